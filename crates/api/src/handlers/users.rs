//! Handlers for the `/users` resource.

use axum::extract::State;
use axum::Json;
use investo_core::auth::{is_valid_email, INVALID_EMAIL_MESSAGE};
use investo_core::error::CoreError;
use investo_core::types::{EntityId, UserRole};
use investo_db::models::user::{UpsertUserProfile, User};
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath};
use crate::response::DataResponse;
use crate::state::AppState;

/// Body of `PUT /api/v1/users/{id}`.
#[derive(Debug, Deserialize)]
pub struct UserProfileBody {
    pub email: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub role: UserRole,
}

/// PUT /api/v1/users/{id}
///
/// Insert the profile or replace the row with the same id.
pub async fn upsert_profile(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<EntityId>,
    ApiJson(body): ApiJson<UserProfileBody>,
) -> AppResult<Json<DataResponse<User>>> {
    if !is_valid_email(&body.email) {
        return Err(CoreError::Validation(INVALID_EMAIL_MESSAGE.into()).into());
    }

    let user = state
        .backend
        .upsert_user_profile(UpsertUserProfile {
            id,
            email: body.email,
            display_name: body.display_name,
            role: body.role,
        })
        .await?;
    Ok(Json(DataResponse::new(user)))
}
