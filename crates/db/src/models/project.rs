//! Project entity model and DTOs.

use investo_core::types::{EntityId, ProjectStatus};
use serde::{Deserialize, Serialize};

use super::{deserialize_id, null_as_default};

/// A project row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: EntityId,
    pub author_id: EntityId,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub funding_goal: f64,
    /// May exceed `funding_goal`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_funding: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ProjectStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl Project {
    pub fn is_featured(&self) -> bool {
        self.featured == Some(true)
    }
}

/// A project joined with its tag names and like count.
///
/// `tags` and `likes` are derived on every read, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectWithDetails {
    #[serde(flatten)]
    pub project: Project,
    pub tags: Vec<String>,
    pub likes: u64,
}

/// DTO for submitting a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub author_id: EntityId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub funding_goal: f64,
    #[serde(default)]
    pub category: String,
    /// Defaults to `pending` if omitted.
    #[serde(default)]
    pub status: ProjectStatus,
    /// Tag names; missing fields are created on first use.
    #[serde(default)]
    pub field_names: Vec<String>,
}
