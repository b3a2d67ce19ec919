//! Request handlers.
//!
//! Handlers delegate to [`crate::service::ManualService`] and map errors via
//! [`crate::error::AppError`].

pub mod user_manual;
