//! Shared query parameter types for API handlers.

use investo_core::types::{ProjectStatus, UserRole};
use serde::Deserialize;

/// Query parameters for `GET /api/v1/feed`.
#[derive(Debug, Default, Deserialize)]
pub struct FeedParams {
    /// Viewer role; decides calls to action. Defaults to `student`.
    #[serde(default)]
    pub role: UserRole,
    /// Free-text search over title, description, category and tags.
    pub q: Option<String>,
    /// Exact category match.
    pub category: Option<String>,
    pub status: Option<ProjectStatus>,
}

/// Query parameters for `GET /api/v1/auth/password-strength`.
#[derive(Debug, Deserialize)]
pub struct PasswordStrengthParams {
    #[serde(default)]
    pub password: String,
}
