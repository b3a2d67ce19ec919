pub mod user_manual_repo;

pub use user_manual_repo::UserManualRepo;
