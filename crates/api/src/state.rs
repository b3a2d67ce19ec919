use std::sync::Arc;

use crate::auth::gate::AccessGate;
use crate::config::ServerConfig;
use crate::service::ManualService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (pagination defaults, not-found policy, ...).
    pub config: Arc<ServerConfig>,
    /// User manual orchestration over the configured store.
    pub manuals: ManualService,
    /// Credential check for mutating routes.
    pub gate: Arc<dyn AccessGate>,
}
