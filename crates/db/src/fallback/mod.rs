//! In-memory backend used when no remote service is configured.
//!
//! All entity memory lives in one [`Memory`] behind a [`RwLock`]. Every
//! operation takes the lock, runs to completion synchronously and releases
//! it before returning, so no mutation is ever observed half-done.

mod seed;

use async_trait::async_trait;
use investo_core::fields::field_id_for;
use rand::Rng;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::backend::{Backend, BackendKind};
use crate::error::DbResult;
use crate::models::field::{Field, ProjectField};
use crate::models::like::{LikeState, ProjectLike, ToggleLike};
use crate::models::project::{CreateProject, Project, ProjectWithDetails};
use crate::models::user::{UpsertUserProfile, User};

/// Prefix of generated project ids.
const PROJECT_ID_PREFIX: &str = "p-";

/// Number of random base-36 characters after the prefix.
const PROJECT_ID_SUFFIX_LEN: usize = 6;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

// ---------------------------------------------------------------------------
// Memory
// ---------------------------------------------------------------------------

/// The backing collections of the fallback store.
#[derive(Debug, Default)]
pub struct Memory {
    pub users: Vec<User>,
    pub projects: Vec<Project>,
    pub fields: Vec<Field>,
    pub project_fields: Vec<ProjectField>,
    pub project_likes: Vec<ProjectLike>,
}

impl Memory {
    /// Join every project with its linked field names and like count.
    ///
    /// Tag names come out in field-collection order.
    pub fn projects_with_details(&self) -> Vec<ProjectWithDetails> {
        self.projects
            .iter()
            .map(|project| {
                let linked: Vec<&str> = self
                    .project_fields
                    .iter()
                    .filter(|link| link.project_id == project.id)
                    .map(|link| link.field_id.as_str())
                    .collect();
                let tags = self
                    .fields
                    .iter()
                    .filter(|field| linked.contains(&field.id.as_str()))
                    .map(|field| field.name.clone())
                    .collect();
                let likes = self
                    .project_likes
                    .iter()
                    .filter(|like| like.project_id == project.id)
                    .count() as u64;

                ProjectWithDetails {
                    project: project.clone(),
                    tags,
                    likes,
                }
            })
            .collect()
    }

    /// Look up each name, creating missing fields.
    ///
    /// A field matches on its exact name or on the id derived from the
    /// name, so case variants resolve to the same field. Output order
    /// matches input order, duplicates included.
    pub fn ensure_fields(&mut self, names: &[String]) -> Vec<Field> {
        names
            .iter()
            .map(|name| {
                let id = field_id_for(name);
                match self.fields.iter().find(|f| f.name == *name || f.id == id) {
                    Some(existing) => existing.clone(),
                    None => {
                        let field = Field {
                            id,
                            name: name.clone(),
                        };
                        tracing::debug!(field_id = %field.id, "Field created");
                        self.fields.push(field.clone());
                        field
                    }
                }
            })
            .collect()
    }

    /// Insert a project and link it to its fields, each at most once.
    pub fn insert_project(&mut self, input: CreateProject) -> Project {
        let id = self.next_project_id();
        let project = Project {
            id: id.clone(),
            author_id: input.author_id,
            title: input.title,
            description: input.description,
            image_url: input.image_url,
            funding_goal: input.funding_goal,
            current_funding: 0.0,
            category: input.category,
            status: input.status,
            featured: None,
        };
        self.projects.push(project.clone());

        for field in self.ensure_fields(&input.field_names) {
            let link = ProjectField {
                project_id: id.clone(),
                field_id: field.id,
            };
            if !self.project_fields.contains(&link) {
                self.project_fields.push(link);
            }
        }

        project
    }

    /// Remove the like pair if present, insert it otherwise.
    ///
    /// Returns the new membership.
    pub fn toggle_like(&mut self, input: &ToggleLike) -> bool {
        match self.project_likes.iter().position(|l| input.matches(l)) {
            Some(idx) => {
                self.project_likes.remove(idx);
                false
            }
            None => {
                self.project_likes.push(ProjectLike {
                    project_id: input.project_id.clone(),
                    user_id: input.user_id.clone(),
                });
                true
            }
        }
    }

    pub fn upsert_user(&mut self, user: User) {
        match self.users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => *existing = user,
            None => self.users.push(user),
        }
    }

    /// Generate a `p-xxxxxx` id not used by any stored project.
    fn next_project_id(&self) -> String {
        let mut rng = rand::rng();
        loop {
            let suffix: String = (0..PROJECT_ID_SUFFIX_LEN)
                .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
                .collect();
            let id = format!("{PROJECT_ID_PREFIX}{suffix}");
            if !self.projects.iter().any(|p| p.id == id) {
                return id;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// Process-lifetime in-memory backend.
#[derive(Debug, Default)]
pub struct FallbackStore {
    memory: RwLock<Memory>,
}

impl FallbackStore {
    /// An empty store. Call [`FallbackStore::seed`] to load demo data.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store already loaded with the demo catalogue.
    pub async fn seeded() -> Self {
        let store = Self::new();
        store.seed().await;
        store
    }

    /// Load the demo catalogue unless projects are already present.
    ///
    /// Returns `true` if data was loaded by this call.
    pub async fn seed(&self) -> bool {
        let mut memory = self.memory.write().await;
        if !memory.projects.is_empty() {
            return false;
        }
        seed::load_demo_data(&mut memory);
        tracing::info!(
            users = memory.users.len(),
            projects = memory.projects.len(),
            fields = memory.fields.len(),
            "Fallback store seeded with demo data"
        );
        true
    }

    /// Shared access to the backing collections.
    pub async fn memory(&self) -> RwLockReadGuard<'_, Memory> {
        self.memory.read().await
    }

    /// Exclusive access to the backing collections.
    pub async fn memory_mut(&self) -> RwLockWriteGuard<'_, Memory> {
        self.memory.write().await
    }
}

#[async_trait]
impl Backend for FallbackStore {
    fn kind(&self) -> BackendKind {
        BackendKind::Fallback
    }

    async fn list_projects_with_details(&self) -> DbResult<Vec<ProjectWithDetails>> {
        Ok(self.memory().await.projects_with_details())
    }

    async fn create_project(&self, input: CreateProject) -> DbResult<Project> {
        let project = self.memory_mut().await.insert_project(input);
        tracing::info!(project_id = %project.id, author_id = %project.author_id, "Project created");
        Ok(project)
    }

    async fn ensure_fields_by_names(&self, names: &[String]) -> DbResult<Vec<Field>> {
        Ok(self.memory_mut().await.ensure_fields(names))
    }

    async fn list_fields(&self) -> DbResult<Vec<Field>> {
        Ok(self.memory().await.fields.clone())
    }

    async fn toggle_like(&self, input: &ToggleLike) -> DbResult<LikeState> {
        let liked = self.memory_mut().await.toggle_like(input);
        tracing::debug!(
            project_id = %input.project_id,
            user_id = %input.user_id,
            liked,
            "Like toggled"
        );
        Ok(LikeState { liked })
    }

    async fn upsert_user_profile(&self, input: UpsertUserProfile) -> DbResult<User> {
        let user = User::from(input);
        self.memory_mut().await.upsert_user(user.clone());
        tracing::info!(user_id = %user.id, role = %user.role, "User profile upserted");
        Ok(user)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
