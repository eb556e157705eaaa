//! Mock login and signup.
//!
//! No credentials are stored or checked against anything: input passes the
//! form rules, the demo profile is upserted, and that profile is returned.

use axum::extract::State;
use axum::Json;
use investo_core::auth::{self, validate_credentials, LoginMode, PasswordStrength};
use investo_core::types::UserRole;
use investo_db::models::user::{UpsertUserProfile, User};
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiQuery};
use crate::query::PasswordStrengthParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Id given to whoever logs in through the mock form.
pub const LOCAL_USER_ID: &str = "local-user";

/// Body of `POST /api/v1/auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub mode: LoginMode,
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub role: UserRole,
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<LoginRequest>,
) -> AppResult<Json<DataResponse<User>>> {
    validate_credentials(input.mode, &input.email, &input.password)?;

    let user = state
        .backend
        .upsert_user_profile(UpsertUserProfile {
            id: LOCAL_USER_ID.to_string(),
            email: input.email,
            display_name: input.display_name,
            role: input.role,
        })
        .await?;

    tracing::info!(user_id = %user.id, mode = ?input.mode, "Mock login succeeded");

    Ok(Json(DataResponse::new(user)))
}

/// GET /api/v1/auth/password-strength
pub async fn password_strength(
    ApiQuery(params): ApiQuery<PasswordStrengthParams>,
) -> Json<DataResponse<PasswordStrength>> {
    Json(DataResponse::new(auth::password_strength(&params.password)))
}
