pub mod auth;
pub mod fields;
pub mod health;
pub mod project;
pub mod users;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /projects                         list with details, create
/// /projects/{id}/like               toggle like (POST)
/// /feed                             feed cards for a role
/// /fields                           list, ensure by names (POST)
/// /users/{id}                       upsert profile (PUT)
/// /auth/login                       mock login / signup (POST)
/// /auth/password-strength           password score
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .route("/feed", get(handlers::feed::feed))
        .nest("/fields", fields::router())
        .nest("/users", users::router())
        .nest("/auth", auth::router())
}
