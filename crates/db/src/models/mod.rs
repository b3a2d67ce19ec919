pub mod user_manual;
