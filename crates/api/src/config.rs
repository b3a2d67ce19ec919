use crate::auth::jwt::JwtConfig;

/// Which [`manual_db::store::ManualStore`] implementation backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// PostgreSQL via `DATABASE_URL`.
    Postgres,
    /// Process-local store; contents are lost on restart.
    Memory,
}

impl StoreBackend {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Some(Self::Postgres),
            "memory" => Some(Self::Memory),
            _ => None,
        }
    }
}

/// How a missing record on update/delete is reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationNotFoundPolicy {
    /// 404 with the not-found envelope.
    NotFound,
    /// Legacy behaviour: a generic 500 fault.
    Fault,
}

impl MutationNotFoundPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "not_found" | "404" => Some(Self::NotFound),
            "fault" | "500" => Some(Self::Fault),
            _ => None,
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Externally visible base URL used in pagination links.
    pub public_url: String,
    /// Page size when the caller gives none (default: `15`).
    pub default_per_page: i64,
    /// Largest page size a caller may request (default: uncapped).
    pub max_per_page: Option<i64>,
    pub mutation_not_found: MutationNotFoundPolicy,
    pub store_backend: StoreBackend,
    /// JWT verification settings.
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                     | Default                    |
    /// |-----------------------------|----------------------------|
    /// | `HOST`                      | `0.0.0.0`                  |
    /// | `PORT`                      | `3000`                     |
    /// | `CORS_ORIGINS`              | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`      | `30`                       |
    /// | `PUBLIC_URL`                | `http://localhost:{PORT}`  |
    /// | `DEFAULT_PER_PAGE`          | `15`                       |
    /// | `MAX_PER_PAGE`              | unset (no cap)             |
    /// | `MUTATION_NOT_FOUND_STATUS` | `not_found`                |
    /// | `STORE_BACKEND`             | `postgres`                 |
    ///
    /// # Panics
    ///
    /// Panics on unparseable values so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let public_url = std::env::var("PUBLIC_URL")
            .unwrap_or_else(|_| format!("http://localhost:{port}"))
            .trim_end_matches('/')
            .to_string();

        let default_per_page: i64 = std::env::var("DEFAULT_PER_PAGE")
            .unwrap_or_else(|_| manual_core::pagination::DEFAULT_PER_PAGE.to_string())
            .parse()
            .expect("DEFAULT_PER_PAGE must be a valid i64");

        assert!(default_per_page >= 1, "DEFAULT_PER_PAGE must be >= 1");

        let max_per_page: Option<i64> = std::env::var("MAX_PER_PAGE")
            .ok()
            .map(|v| v.parse().expect("MAX_PER_PAGE must be a valid i64"));
        if let Some(max) = max_per_page {
            assert!(max >= default_per_page, "MAX_PER_PAGE must be >= DEFAULT_PER_PAGE");
        }

        let mutation_not_found = std::env::var("MUTATION_NOT_FOUND_STATUS")
            .map(|v| {
                MutationNotFoundPolicy::parse(&v)
                    .expect("MUTATION_NOT_FOUND_STATUS must be `not_found` or `fault`")
            })
            .unwrap_or(MutationNotFoundPolicy::NotFound);

        let store_backend = std::env::var("STORE_BACKEND")
            .map(|v| StoreBackend::parse(&v).expect("STORE_BACKEND must be `postgres` or `memory`"))
            .unwrap_or(StoreBackend::Postgres);

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            public_url,
            default_per_page,
            max_per_page,
            mutation_not_found,
            store_backend,
            jwt,
        }
    }
}
