//! Authentication and authorization extractors.
//!
//! - [`auth::AuthIdentity`] -- Runs the access gate on the `Authorization` header.
//! - [`rbac::RequireManualWriter`] -- Requires the manage-manuals capability.

pub mod auth;
pub mod rbac;
