//! Authentication primitives for the mutation endpoints.
//!
//! - [`jwt`] -- HS256 access-token verification (and signing for tooling/tests).
//! - [`gate`] -- the [`gate::AccessGate`] seam mapping a credential to an identity.

pub mod gate;
pub mod jwt;
