use axum::routing::get;
use axum::Router;

use crate::handlers::fields;
use crate::state::AppState;

/// ```text
/// GET    /    -> list_fields
/// POST   /    -> ensure_fields
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(fields::list_fields).post(fields::ensure_fields))
}
