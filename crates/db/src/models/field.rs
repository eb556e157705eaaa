//! Field (tag) and project-field link models.

use investo_core::types::EntityId;
use serde::{Deserialize, Serialize};

use super::deserialize_id;

/// A tag that can be attached to many projects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: EntityId,
    pub name: String,
}

/// A row of the `project_fields` junction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectField {
    #[serde(deserialize_with = "deserialize_id")]
    pub project_id: EntityId,
    #[serde(deserialize_with = "deserialize_id")]
    pub field_id: EntityId,
}

/// DTO for `ensure_fields_by_names`.
#[derive(Debug, Clone, Deserialize)]
pub struct EnsureFields {
    pub names: Vec<String>,
}
