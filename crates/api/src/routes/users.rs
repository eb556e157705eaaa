use axum::routing::put;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// ```text
/// PUT    /{id}    -> upsert_profile
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", put(users::upsert_profile))
}
