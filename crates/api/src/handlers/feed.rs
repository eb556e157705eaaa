//! Feed view: projects shaped into cards for one viewer role.
//!
//! Featured projects come first; otherwise backend order is kept. Like
//! counts are a snapshot and are not reconciled with later toggles.

use axum::extract::State;
use axum::Json;
use investo_core::feed::{
    call_to_action, display_tags, funding_percentage, matches_query, progress_percentage,
    shows_analyst_metrics, sort_featured_first, CallToAction,
};
use investo_core::types::{EntityId, ProjectStatus, UserRole};
use investo_db::models::project::ProjectWithDetails;
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::ApiQuery;
use crate::query::FeedParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// One project as rendered in the feed.
#[derive(Debug, Serialize)]
pub struct FeedCard {
    pub id: EntityId,
    pub author_id: EntityId,
    pub title: String,
    pub description: String,
    pub category: String,
    /// At most three tags.
    pub tags: Vec<String>,
    pub image: String,
    pub funding_goal: f64,
    pub current_funding: f64,
    pub funding_percentage: f64,
    /// Funding percentage clamped to 100 for the progress bar.
    pub progress_percentage: f64,
    pub likes: u64,
    pub status: ProjectStatus,
    pub featured: bool,
    pub call_to_action: Option<CallToAction>,
    pub show_analyst_metrics: bool,
}

impl FeedCard {
    pub fn new(details: ProjectWithDetails, role: UserRole) -> Self {
        let ProjectWithDetails {
            project,
            tags,
            likes,
        } = details;

        Self {
            tags: display_tags(&tags).to_vec(),
            image: project.image_url.clone().unwrap_or_default(),
            funding_percentage: funding_percentage(project.current_funding, project.funding_goal),
            progress_percentage: progress_percentage(project.current_funding, project.funding_goal),
            featured: project.is_featured(),
            call_to_action: call_to_action(role, project.status),
            show_analyst_metrics: shows_analyst_metrics(role),
            id: project.id,
            author_id: project.author_id,
            title: project.title,
            description: project.description,
            category: project.category,
            funding_goal: project.funding_goal,
            current_funding: project.current_funding,
            likes,
            status: project.status,
        }
    }
}

/// Whether a project passes the feed filters.
fn matches_filters(details: &ProjectWithDetails, params: &FeedParams) -> bool {
    let project = &details.project;

    if let Some(status) = params.status {
        if project.status != status {
            return false;
        }
    }
    if let Some(category) = params.category.as_deref() {
        if !project.category.eq_ignore_ascii_case(category) {
            return false;
        }
    }
    match params.q.as_deref() {
        Some(q) => matches_query(
            q,
            [
                project.title.as_str(),
                project.description.as_str(),
                project.category.as_str(),
            ]
            .into_iter()
            .chain(details.tags.iter().map(String::as_str)),
        ),
        None => true,
    }
}

/// Filter, order and shape projects into feed cards.
pub fn build_feed(projects: Vec<ProjectWithDetails>, params: &FeedParams) -> Vec<FeedCard> {
    let mut visible: Vec<ProjectWithDetails> = projects
        .into_iter()
        .filter(|p| matches_filters(p, params))
        .collect();
    sort_featured_first(&mut visible, |p| p.project.is_featured());

    visible
        .into_iter()
        .map(|p| FeedCard::new(p, params.role))
        .collect()
}

/// GET /api/v1/feed
pub async fn feed(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<FeedParams>,
) -> AppResult<Json<DataResponse<Vec<FeedCard>>>> {
    let projects = state.backend.list_projects_with_details().await?;
    let cards = build_feed(projects, &params);

    tracing::debug!(role = %params.role, count = cards.len(), "Feed built");

    Ok(Json(DataResponse::new(cards)))
}
