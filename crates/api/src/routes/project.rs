//! Route definitions for `/projects`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// POST   /{id}/like     -> toggle_like
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/{id}/like", post(project::toggle_like))
}
