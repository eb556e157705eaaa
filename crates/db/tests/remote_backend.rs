//! Remote backend tests against a mock REST service.

use assert_matches::assert_matches;
use investo_core::types::{ProjectStatus, UserRole};
use investo_db::models::like::ToggleLike;
use investo_db::models::project::CreateProject;
use investo_db::models::user::UpsertUserProfile;
use investo_db::{Backend, DbError, RemoteBackend, RemoteConfig};
use serde_json::json;
use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "anon-key";

fn backend_for(server: &MockServer) -> RemoteBackend {
    RemoteBackend::new(RemoteConfig {
        url: server.uri(),
        api_key: API_KEY.to_string(),
    })
}

fn toggle(project_id: &str, user_id: &str) -> ToggleLike {
    ToggleLike {
        project_id: project_id.to_string(),
        user_id: user_id.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_projects_normalizes_tags_and_likes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/projects"))
        .and(header("apikey", API_KEY))
        .and(header("authorization", format!("Bearer {API_KEY}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "11111111-0000-0000-0000-000000000001",
                "author_id": "u-1",
                "title": "Remote Project",
                "description": "From the service",
                "image_url": null,
                "funding_goal": 5000,
                "current_funding": 1250.5,
                "category": "AI",
                "status": "pending",
                "featured": true,
                "fields": [
                    {"fields": {"id": "a", "name": "AI"}},
                    {"fields": {"id": "b", "name": "Robotics"}}
                ],
                "like_counts": [{"like_count": 3}]
            },
            {
                "id": "11111111-0000-0000-0000-000000000002",
                "author_id": "u-2",
                "title": "No Likes Yet",
                "funding_goal": 10,
                "fields": [],
                "like_counts": []
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let projects = backend_for(&server).list_projects_with_details().await.unwrap();

    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].tags, ["AI", "Robotics"]);
    assert_eq!(projects[0].likes, 3);
    assert!(projects[0].project.is_featured());
    assert_eq!(projects[0].project.current_funding, 1250.5);
    assert!(projects[1].tags.is_empty());
    assert_eq!(projects[1].likes, 0);
    assert_eq!(projects[1].project.status, ProjectStatus::Pending);
}

#[tokio::test]
async fn list_projects_surfaces_service_error_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/projects"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .list_projects_with_details()
        .await
        .unwrap_err();

    assert_matches!(err, DbError::Api { status: 503, ref body } if body == "upstream down");
}

#[tokio::test]
async fn create_project_inserts_then_links_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/projects"))
        .and(body_json(json!({
            "author_id": "u-x",
            "title": "T",
            "description": "D",
            "image_url": null,
            "funding_goal": 100.0,
            "category": "AI",
            "status": "pending"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 42,
            "author_id": "u-x",
            "title": "T",
            "description": "D",
            "image_url": null,
            "funding_goal": 100,
            "current_funding": 0,
            "category": "AI",
            "status": "pending"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/fields"))
        .and(query_param("on_conflict", "name"))
        .and(body_json(json!([{"name": "NewTag"}])))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!([{"id": 9, "name": "NewTag"}])),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/project_fields"))
        .and(body_json(json!([{"project_id": "42", "field_id": "9"}])))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let project = backend_for(&server)
        .create_project(CreateProject {
            author_id: "u-x".to_string(),
            title: "T".to_string(),
            description: "D".to_string(),
            image_url: None,
            funding_goal: 100.0,
            category: "AI".to_string(),
            status: ProjectStatus::Pending,
            field_names: vec!["NewTag".to_string()],
        })
        .await
        .unwrap();

    assert_eq!(project.id, "42");
    assert_eq!(project.current_funding, 0.0);
}

#[tokio::test]
async fn create_project_sends_case_variants_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/fields"))
        .and(body_json(json!([{"name": "AI"}])))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([{"id": 3, "name": "AI"}])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/projects"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 43,
            "author_id": "u-x",
            "title": "T",
            "funding_goal": 100,
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/project_fields"))
        .and(body_json(json!([{"project_id": "43", "field_id": "3"}])))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let project = backend_for(&server)
        .create_project(CreateProject {
            author_id: "u-x".to_string(),
            title: "T".to_string(),
            description: String::new(),
            image_url: None,
            funding_goal: 100.0,
            category: String::new(),
            status: ProjectStatus::Pending,
            field_names: vec!["AI".to_string(), "ai".to_string(), "AI".to_string()],
        })
        .await
        .unwrap();
    assert_eq!(project.id, "43");
}

#[tokio::test]
async fn create_project_skips_insert_when_fields_are_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/fields"))
        .respond_with(ResponseTemplate::new(500).set_body_string("batch rejected"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/projects"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .create_project(CreateProject {
            author_id: "u-x".to_string(),
            title: "T".to_string(),
            description: String::new(),
            image_url: None,
            funding_goal: 100.0,
            category: String::new(),
            status: ProjectStatus::Pending,
            field_names: vec!["AI".to_string()],
        })
        .await
        .unwrap_err();
    assert_matches!(err, DbError::Api { status: 500, .. });
}

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn ensure_fields_returns_service_rows_as_given() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/fields"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            {"id": 2, "name": "Beta"},
            {"id": 1, "name": "Alpha"}
        ])))
        .mount(&server)
        .await;

    let fields = backend_for(&server)
        .ensure_fields_by_names(&["Alpha".to_string(), "Beta".to_string()])
        .await
        .unwrap();

    let got: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(got, ["Beta", "Alpha"]);
}

#[tokio::test]
async fn ensure_fields_folds_duplicate_names() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/fields"))
        .and(body_json(json!([{"name": "Robotics"}, {"name": "AI"}])))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            {"id": 1, "name": "Robotics"},
            {"id": 2, "name": "AI"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let names: Vec<String> = ["Robotics", "AI", "robotics", "ai"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let fields = backend_for(&server).ensure_fields_by_names(&names).await.unwrap();
    assert_eq!(fields.len(), 2);
}

#[tokio::test]
async fn ensure_fields_with_no_names_skips_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let fields = backend_for(&server).ensure_fields_by_names(&[]).await.unwrap();
    assert!(fields.is_empty());
}

#[tokio::test]
async fn list_fields_orders_by_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/fields"))
        .and(query_param("order", "name"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "f-ai", "name": "AI"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let fields = backend_for(&server).list_fields().await.unwrap();
    assert_eq!(fields[0].id, "f-ai");
}

// ---------------------------------------------------------------------------
// Likes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn toggle_like_inserts_missing_pair() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/project_likes"))
        .and(query_param("project_id", "eq.p-1"))
        .and(query_param("user_id", "eq.u-new"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/project_likes"))
        .and(body_json(json!({"project_id": "p-1", "user_id": "u-new"})))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let state = backend_for(&server)
        .toggle_like(&toggle("p-1", "u-new"))
        .await
        .unwrap();
    assert!(state.liked);
}

#[tokio::test]
async fn toggle_like_deletes_existing_pair() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/project_likes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"project_id": "p-1", "user_id": "u-investor-1"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/rest/v1/project_likes"))
        .and(query_param("project_id", "eq.p-1"))
        .and(query_param("user_id", "eq.u-investor-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let state = backend_for(&server)
        .toggle_like(&toggle("p-1", "u-investor-1"))
        .await
        .unwrap();
    assert!(!state.liked);
}

#[tokio::test]
async fn toggle_like_deletes_pair_with_integer_keys() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/project_likes"))
        .and(query_param("project_id", "eq.42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"project_id": 42, "user_id": "u-1"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/rest/v1/project_likes"))
        .and(query_param("project_id", "eq.42"))
        .and(query_param("user_id", "eq.u-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let state = backend_for(&server)
        .toggle_like(&toggle("42", "u-1"))
        .await
        .unwrap();
    assert!(!state.liked);
}

#[tokio::test]
async fn toggle_like_insert_failure_is_returned() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/project_likes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/project_likes"))
        .respond_with(ResponseTemplate::new(409).set_body_string("duplicate key"))
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .toggle_like(&toggle("p-1", "u-1"))
        .await
        .unwrap_err();
    assert_matches!(err, DbError::Api { status: 409, .. });
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upsert_user_profile_merges_duplicates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/users"))
        .and(header_exists("prefer"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "u-1",
            "email": "a@b.co",
            "display_name": "A",
            "role": "investor"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user = backend_for(&server)
        .upsert_user_profile(UpsertUserProfile {
            id: "u-1".to_string(),
            email: "a@b.co".to_string(),
            display_name: "A".to_string(),
            role: UserRole::Investor,
        })
        .await
        .unwrap();
    assert_eq!(user.role, UserRole::Investor);
}

#[tokio::test]
async fn unreachable_service_is_a_request_error() {
    let backend = RemoteBackend::new(RemoteConfig {
        url: "http://127.0.0.1:9".to_string(),
        api_key: API_KEY.to_string(),
    });
    let err = backend.list_fields().await.unwrap_err();
    assert_matches!(err, DbError::Request(_));
}
