//! User profile model and DTOs.

use investo_core::types::{EntityId, UserRole};
use serde::{Deserialize, Serialize};

/// A user profile row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub email: String,
    pub display_name: String,
    pub role: UserRole,
}

/// DTO for inserting or replacing a user profile keyed by `id`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertUserProfile {
    pub id: EntityId,
    pub email: String,
    pub display_name: String,
    #[serde(default)]
    pub role: UserRole,
}

impl From<UpsertUserProfile> for User {
    fn from(input: UpsertUserProfile) -> Self {
        Self {
            id: input.id,
            email: input.email,
            display_name: input.display_name,
            role: input.role,
        }
    }
}
