//! Domain types, validation, and pagination rules for user manuals.
//!
//! Zero internal dependencies so the store, the HTTP layer, and any future
//! tooling agree on the same field constraints.

pub mod error;
pub mod manual;
pub mod pagination;
pub mod types;
pub mod video_link;
