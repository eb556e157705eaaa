//! Handlers for the `/projects` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use investo_core::error::CoreError;
use investo_core::types::EntityId;
use investo_db::models::like::{LikeState, ToggleLike};
use investo_db::models::project::{CreateProject, Project, ProjectWithDetails};
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath};
use crate::response::DataResponse;
use crate::state::AppState;

/// Body of `POST /api/v1/projects/{id}/like`.
#[derive(Debug, Deserialize)]
pub struct LikeRequest {
    pub user_id: EntityId,
}

/// GET /api/v1/projects
///
/// Every project with its tags and like count, in backend order.
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ProjectWithDetails>>>> {
    let projects = state.backend.list_projects_with_details().await?;
    Ok(Json(DataResponse::new(projects)))
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateProject>,
) -> AppResult<(StatusCode, Json<DataResponse<Project>>)> {
    validate_submission(&input)?;

    let project = state.backend.create_project(input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(project))))
}

/// POST /api/v1/projects/{id}/like
pub async fn toggle_like(
    State(state): State<AppState>,
    ApiPath(project_id): ApiPath<EntityId>,
    ApiJson(input): ApiJson<LikeRequest>,
) -> AppResult<Json<DataResponse<LikeState>>> {
    if input.user_id.trim().is_empty() {
        return Err(CoreError::Validation("user_id must not be empty".into()).into());
    }

    let toggle = ToggleLike {
        project_id,
        user_id: input.user_id,
    };
    let like_state = state.backend.toggle_like(&toggle).await?;
    Ok(Json(DataResponse::new(like_state)))
}

/// Form-level checks made before the submission reaches the backend.
fn validate_submission(input: &CreateProject) -> Result<(), CoreError> {
    if input.author_id.trim().is_empty() {
        return Err(CoreError::Validation("author_id must not be empty".into()));
    }
    if input.title.trim().is_empty() {
        return Err(CoreError::Validation("title must not be empty".into()));
    }
    if !input.funding_goal.is_finite() || input.funding_goal < 0.0 {
        return Err(CoreError::Validation(
            "funding_goal must be a non-negative number".into(),
        ));
    }
    Ok(())
}
