//! Backend for a managed PostgREST-style database service.
//!
//! Tables: `users`, `projects`, `fields`, `project_fields`, `project_likes`,
//! plus the `v_project_like_counts` view. Every request carries the public
//! API key both as `apikey` and as a bearer token.

use async_trait::async_trait;
use investo_core::fields::field_id_for;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::backend::{Backend, BackendKind};
use crate::error::{DbError, DbResult};
use crate::models::field::{Field, ProjectField};
use crate::models::like::{LikeState, ProjectLike, ToggleLike};
use crate::models::project::{CreateProject, Project, ProjectWithDetails};
use crate::models::user::{UpsertUserProfile, User};

/// Path of the REST API below the service URL.
const REST_PATH: &str = "/rest/v1";

/// Embedded select for projects with their fields and like count.
const PROJECT_DETAILS_SELECT: &str =
    "*,fields:project_fields(fields(*)),like_counts:v_project_like_counts(like_count)";

/// `Prefer` header for upserts that return the stored rows.
const PREFER_UPSERT: &str = "resolution=merge-duplicates,return=representation";

const PREFER_RETURN_ROWS: &str = "return=representation";

/// Ask PostgREST for a single JSON object instead of an array.
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Connection settings for the remote service.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Service base URL, e.g. `https://xyz.supabase.co`.
    pub url: String,
    /// Public (anon) API key.
    pub api_key: String,
}

/// HTTP client for the remote database.
pub struct RemoteBackend {
    client: reqwest::Client,
    rest_url: String,
    api_key: String,
}

// ---------------------------------------------------------------------------
// Wire rows
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct NewProjectRow<'a> {
    author_id: &'a str,
    title: &'a str,
    description: &'a str,
    image_url: Option<&'a str>,
    funding_goal: f64,
    category: &'a str,
    status: investo_core::types::ProjectStatus,
}

#[derive(Debug, Serialize)]
struct NewFieldRow<'a> {
    name: &'a str,
}

/// A `projects` row with the embedded resources of [`PROJECT_DETAILS_SELECT`].
#[derive(Debug, Deserialize)]
struct ProjectDetailsRow {
    #[serde(flatten)]
    project: Project,
    #[serde(default)]
    fields: Vec<EmbeddedField>,
    #[serde(default)]
    like_counts: Vec<LikeCount>,
}

#[derive(Debug, Deserialize)]
struct EmbeddedField {
    fields: Option<Field>,
}

#[derive(Debug, Deserialize)]
struct LikeCount {
    like_count: u64,
}

impl From<ProjectDetailsRow> for ProjectWithDetails {
    fn from(row: ProjectDetailsRow) -> Self {
        let tags = row
            .fields
            .into_iter()
            .filter_map(|link| link.fields)
            .map(|field| field.name)
            .collect();
        let likes = row.like_counts.first().map_or(0, |c| c.like_count);
        Self {
            project: row.project,
            tags,
            likes,
        }
    }
}

/// `names` without later entries that derive an already seen field id.
fn distinct_field_names(names: &[String]) -> Vec<&str> {
    let mut seen: Vec<String> = Vec::with_capacity(names.len());
    names
        .iter()
        .filter(|name| {
            let id = field_id_for(name);
            if seen.contains(&id) {
                false
            } else {
                seen.push(id);
                true
            }
        })
        .map(String::as_str)
        .collect()
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

impl RemoteBackend {
    pub fn new(config: RemoteConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a backend reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: RemoteConfig) -> Self {
        Self {
            client,
            rest_url: format!("{}{REST_PATH}", config.url.trim_end_matches('/')),
            api_key: config.api_key,
        }
    }

    /// Start a request against `table` with authentication headers set.
    fn request(&self, method: Method, table: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}/{table}", self.rest_url))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Upsert `names` into `fields`, returning whatever rows the service sends back.
    ///
    /// Names sharing a field id are sent once, first spelling wins. A batch
    /// that hits the same conflict key twice is rejected by the service.
    async fn upsert_fields(&self, names: &[String]) -> DbResult<Vec<Field>> {
        let rows: Vec<NewFieldRow<'_>> = distinct_field_names(names)
            .into_iter()
            .map(|name| NewFieldRow { name })
            .collect();
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        let response = self
            .request(Method::POST, "fields")
            .query(&[("on_conflict", "name")])
            .header("Prefer", PREFER_UPSERT)
            .json(&rows)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Filter matching one `(project_id, user_id)` like pair.
    fn like_filter(input: &ToggleLike) -> [(&'static str, String); 2] {
        [
            ("project_id", format!("eq.{}", input.project_id)),
            ("user_id", format!("eq.{}", input.user_id)),
        ]
    }

    // ---- private helpers ----

    /// Return the response unchanged on success, or [`DbError::Api`] with
    /// the status and raw body text on failure.
    async fn ensure_success(response: reqwest::Response) -> DbResult<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(DbError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> DbResult<T> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn check_status(response: reqwest::Response) -> DbResult<()> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[async_trait]
impl Backend for RemoteBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Remote
    }

    async fn list_projects_with_details(&self) -> DbResult<Vec<ProjectWithDetails>> {
        let response = self
            .request(Method::GET, "projects")
            .query(&[("select", PROJECT_DETAILS_SELECT)])
            .send()
            .await?;
        let rows: Vec<ProjectDetailsRow> = Self::parse_response(response).await?;
        Ok(rows.into_iter().map(ProjectWithDetails::from).collect())
    }

    async fn create_project(&self, input: CreateProject) -> DbResult<Project> {
        // Fields go first so a rejected field batch leaves no orphan project.
        let fields = self.upsert_fields(&input.field_names).await?;

        let row = NewProjectRow {
            author_id: &input.author_id,
            title: &input.title,
            description: &input.description,
            image_url: input.image_url.as_deref(),
            funding_goal: input.funding_goal,
            category: &input.category,
            status: input.status,
        };
        let response = self
            .request(Method::POST, "projects")
            .header("Prefer", PREFER_RETURN_ROWS)
            .header(ACCEPT, HeaderValue::from_static(SINGLE_OBJECT))
            .json(&row)
            .send()
            .await?;
        let project: Project = Self::parse_response(response).await?;

        let mut links: Vec<ProjectField> = Vec::with_capacity(fields.len());
        for field in fields {
            let link = ProjectField {
                project_id: project.id.clone(),
                field_id: field.id,
            };
            if !links.contains(&link) {
                links.push(link);
            }
        }
        if !links.is_empty() {
            let response = self
                .request(Method::POST, "project_fields")
                .header("Prefer", "resolution=merge-duplicates")
                .json(&links)
                .send()
                .await?;
            Self::check_status(response).await?;
        }

        tracing::info!(project_id = %project.id, links = links.len(), "Project created remotely");
        Ok(project)
    }

    async fn ensure_fields_by_names(&self, names: &[String]) -> DbResult<Vec<Field>> {
        self.upsert_fields(names).await
    }

    async fn list_fields(&self) -> DbResult<Vec<Field>> {
        let response = self
            .request(Method::GET, "fields")
            .query(&[("select", "*"), ("order", "name")])
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn toggle_like(&self, input: &ToggleLike) -> DbResult<LikeState> {
        let filter = Self::like_filter(input);
        let response = self
            .request(Method::GET, "project_likes")
            .query(&[("select", "*")])
            .query(&filter)
            .send()
            .await?;
        let existing: Vec<ProjectLike> = Self::parse_response(response).await?;

        let liked = if existing.is_empty() {
            let like = ProjectLike {
                project_id: input.project_id.clone(),
                user_id: input.user_id.clone(),
            };
            let response = self
                .request(Method::POST, "project_likes")
                .json(&like)
                .send()
                .await?;
            Self::check_status(response).await?;
            true
        } else {
            let response = self
                .request(Method::DELETE, "project_likes")
                .query(&filter)
                .send()
                .await?;
            Self::check_status(response).await?;
            false
        };

        tracing::debug!(
            project_id = %input.project_id,
            user_id = %input.user_id,
            liked,
            "Like toggled remotely"
        );
        Ok(LikeState { liked })
    }

    async fn upsert_user_profile(&self, input: UpsertUserProfile) -> DbResult<User> {
        let user = User::from(input);
        let response = self
            .request(Method::POST, "users")
            .header("Prefer", PREFER_UPSERT)
            .header(ACCEPT, HeaderValue::from_static(SINGLE_OBJECT))
            .json(&user)
            .send()
            .await?;
        Self::parse_response(response).await
    }
}
