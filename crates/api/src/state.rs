use std::sync::Arc;

use investo_db::SharedBackend;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Data-access backend chosen at startup.
    pub backend: SharedBackend,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
