//! The data-access contract shared by both backends.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::DbResult;
use crate::models::field::Field;
use crate::models::like::{LikeState, ToggleLike};
use crate::models::project::{CreateProject, Project, ProjectWithDetails};
use crate::models::user::{UpsertUserProfile, User};

/// Which implementation is serving data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Fallback,
    Remote,
}

/// Data-access operations with an identical contract on every backend.
///
/// Callers only ever see copies or derived views; entity memory stays owned
/// by the implementation.
#[async_trait]
pub trait Backend: Send + Sync {
    fn kind(&self) -> BackendKind;

    /// All projects annotated with their tag names and like count.
    ///
    /// No filtering, ordering or pagination is applied.
    async fn list_projects_with_details(&self) -> DbResult<Vec<ProjectWithDetails>>;

    /// Insert a project, ensure its fields exist and link them.
    ///
    /// The returned project carries no tags; re-list to see them merged in.
    async fn create_project(&self, input: CreateProject) -> DbResult<Project>;

    /// Return the field for every name, creating the missing ones.
    async fn ensure_fields_by_names(&self, names: &[String]) -> DbResult<Vec<Field>>;

    async fn list_fields(&self) -> DbResult<Vec<Field>>;

    /// Flip membership of the `(project_id, user_id)` like pair.
    async fn toggle_like(&self, input: &ToggleLike) -> DbResult<LikeState>;

    /// Insert the user, or replace the row with the same `id`.
    async fn upsert_user_profile(&self, input: UpsertUserProfile) -> DbResult<User>;
}

/// Backend handle injected into the API state.
pub type SharedBackend = Arc<dyn Backend>;
