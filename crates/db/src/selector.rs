//! Startup choice between the remote service and the in-memory store.

use std::sync::Arc;

use crate::backend::SharedBackend;
use crate::fallback::FallbackStore;
use crate::remote::{RemoteBackend, RemoteConfig};

/// Build the backend for this process.
///
/// With remote credentials the [`RemoteBackend`] is used. Without them the
/// [`FallbackStore`] is returned, already seeded with demo data. Missing
/// credentials are not an error.
pub async fn select_backend(remote: Option<RemoteConfig>) -> SharedBackend {
    match remote {
        Some(config) => {
            tracing::info!(url = %config.url, "Using remote database backend");
            Arc::new(RemoteBackend::new(config))
        }
        None => {
            tracing::info!("Remote database not configured, using in-memory fallback store");
            Arc::new(FallbackStore::seeded().await)
        }
    }
}
