//! Route trees, mounted by [`crate::router::build_app_router`].
//!
//! - [`health`] -- `/health` at the root.
//! - [`user_manual`] -- the authenticated admin tree and the public read tree.

pub mod health;
pub mod user_manual;
