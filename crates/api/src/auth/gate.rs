//! Access gate for mutating user manual operations.
//!
//! The gate turns an inbound bearer credential into an [`Identity`] or an
//! [`AuthError`]. Every authenticated identity is currently granted
//! [`Capability::ManageManuals`]; role-based narrowing belongs in
//! [`capabilities_for_role`] so callers never change.

use manual_core::types::DbId;

use crate::auth::jwt::{validate_token, JwtConfig};

/// An action an identity may perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Create, update, and delete user manuals.
    ManageManuals,
}

/// A successfully authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub subject: DbId,
    pub role: String,
    pub capabilities: Vec<Capability>,
}

impl Identity {
    pub fn can(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }
}

/// Why a credential was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Missing Authorization header")]
    MissingCredential,

    #[error("Invalid Authorization format. Expected: Bearer <token>")]
    MalformedCredential,

    #[error("Invalid or expired token")]
    InvalidCredential,
}

/// Maps an inbound credential to an identity.
pub trait AccessGate: Send + Sync {
    /// `credential` is the bearer token, `None` when the caller sent none.
    fn authorize(&self, credential: Option<&str>) -> Result<Identity, AuthError>;
}

/// Capabilities granted to a role.
///
/// Single tier for now: any authenticated role may manage manuals.
pub fn capabilities_for_role(_role: &str) -> Vec<Capability> {
    vec![Capability::ManageManuals]
}

/// Extract the token from an `Authorization` header value.
///
/// Returns `Ok(None)` when the header is absent.
pub fn bearer_token(header: Option<&str>) -> Result<Option<&str>, AuthError> {
    match header {
        None => Ok(None),
        Some(value) => value
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(Some)
            .ok_or(AuthError::MalformedCredential),
    }
}

/// [`AccessGate`] that verifies HS256 JWTs.
#[derive(Debug, Clone)]
pub struct JwtAccessGate {
    config: JwtConfig,
}

impl JwtAccessGate {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }
}

impl AccessGate for JwtAccessGate {
    fn authorize(&self, credential: Option<&str>) -> Result<Identity, AuthError> {
        let token = credential.ok_or(AuthError::MissingCredential)?;
        let claims = validate_token(token, &self.config).map_err(|e| {
            tracing::debug!(error = %e, "Rejected access token");
            AuthError::InvalidCredential
        })?;

        Ok(Identity {
            subject: claims.sub,
            capabilities: capabilities_for_role(&claims.role),
            role: claims.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::auth::jwt::generate_access_token;

    fn gate() -> (JwtAccessGate, JwtConfig) {
        let config = JwtConfig {
            secret: "gate-test-secret".to_string(),
            access_token_expiry_mins: 15,
        };
        (JwtAccessGate::new(config.clone()), config)
    }

    #[test]
    fn valid_token_yields_identity_with_manage_capability() {
        let (gate, config) = gate();
        let token = generate_access_token(7, "user", &config).unwrap();

        let identity = gate.authorize(Some(&token)).unwrap();
        assert_eq!(identity.subject, 7);
        assert_eq!(identity.role, "user");
        assert!(identity.can(Capability::ManageManuals));
    }

    #[test]
    fn missing_credential_is_rejected() {
        let (gate, _) = gate();
        assert_matches!(gate.authorize(None), Err(AuthError::MissingCredential));
    }

    #[test]
    fn invalid_token_is_rejected() {
        let (gate, _) = gate();
        assert_matches!(
            gate.authorize(Some("garbage")),
            Err(AuthError::InvalidCredential)
        );
    }

    #[test]
    fn bearer_token_parsing() {
        assert_eq!(bearer_token(None), Ok(None));
        assert_eq!(bearer_token(Some("Bearer abc.def")), Ok(Some("abc.def")));
        assert_eq!(
            bearer_token(Some("Basic dXNlcjpwYXNz")),
            Err(AuthError::MalformedCredential)
        );
        assert_eq!(bearer_token(Some("Bearer ")), Err(AuthError::MalformedCredential));
    }
}
