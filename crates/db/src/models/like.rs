//! Project like models.

use investo_core::types::EntityId;
use serde::{Deserialize, Serialize};

use super::deserialize_id;

/// Presence of a row means `user_id` likes `project_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLike {
    #[serde(deserialize_with = "deserialize_id")]
    pub project_id: EntityId,
    #[serde(deserialize_with = "deserialize_id")]
    pub user_id: EntityId,
}

/// DTO for `toggle_like`.
#[derive(Debug, Clone, Deserialize)]
pub struct ToggleLike {
    pub project_id: EntityId,
    pub user_id: EntityId,
}

impl ToggleLike {
    pub(crate) fn matches(&self, like: &ProjectLike) -> bool {
        like.project_id == self.project_id && like.user_id == self.user_id
    }
}

/// Membership after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeState {
    pub liked: bool,
}
