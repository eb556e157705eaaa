//! Handlers for the `/fields` resource.

use axum::extract::State;
use axum::Json;
use investo_core::error::CoreError;
use investo_db::models::field::{EnsureFields, Field};

use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/fields
pub async fn list_fields(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Field>>>> {
    let fields = state.backend.list_fields().await?;
    Ok(Json(DataResponse::new(fields)))
}

/// POST /api/v1/fields
///
/// Returns the field for every name, creating missing ones.
pub async fn ensure_fields(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<EnsureFields>,
) -> AppResult<Json<DataResponse<Vec<Field>>>> {
    if input.names.iter().any(|n| n.trim().is_empty()) {
        return Err(CoreError::Validation("field names must not be blank".into()).into());
    }

    let fields = state.backend.ensure_fields_by_names(&input.names).await?;
    Ok(Json(DataResponse::new(fields)))
}
