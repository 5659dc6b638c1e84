use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{self, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use mockall::mock;
use pretty_assertions::assert_eq;
use serde_json::Value;
use tower::ServiceExt;

use mergington_core::{ActivityCatalog, ActivityRepository, CoreError};
use mergington_server::{MergingtonServer, ServerConfig};
use mergington_state_inmemory::InMemoryActivityRepository;

const SEED_ORDER: [&str; 9] = [
    "Chess Club",
    "Programming Class",
    "Gym Class",
    "Soccer Team",
    "Swimming Club",
    "Art Club",
    "Drama Club",
    "Debate Team",
    "Math Olympiad",
];

mock! {
    pub Repository {}

    #[async_trait]
    impl ActivityRepository for Repository {
        async fn list(&self) -> Result<ActivityCatalog, CoreError>;
        async fn count(&self) -> Result<usize, CoreError>;
        async fn add_participant(&self, name: &str, email: &str) -> Result<(), CoreError>;
        async fn remove_participant(&self, name: &str, email: &str) -> Result<usize, CoreError>;
        async fn health_check(&self) -> Result<bool, CoreError>;
    }
}

fn test_app() -> Router {
    mergington_monitoring::logging::init_test_tracing();

    let repository = Arc::new(InMemoryActivityRepository::seeded());
    MergingtonServer::new(ServerConfig::default(), repository).router()
}

async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn participants(app: &Router, activity: &str) -> Vec<String> {
    let (status, body) = send(app, Method::GET, "/activities").await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_value(body[activity]["participants"].clone()).unwrap()
}

#[tokio::test]
async fn test_list_activities_in_seed_order() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/activities").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = body::to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();

    let positions: Vec<usize> = SEED_ORDER
        .iter()
        .map(|name| text.find(&format!("\"{}\"", name)).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);

    let body: Value = serde_json::from_str(&text).unwrap();
    let chess = &body["Chess Club"];
    assert_eq!(chess["description"], "Learn strategies and compete in chess tournaments");
    assert_eq!(chess["schedule"], "Fridays, 3:30 PM - 5:00 PM");
    assert_eq!(chess["max_participants"], 12);
    assert_eq!(
        chess["participants"],
        serde_json::json!(["michael@mergington.edu", "daniel@mergington.edu"])
    );
}

#[tokio::test]
async fn test_signup_then_duplicate() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/activities/Chess%20Club/signup?email=New@Student.edu",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Signed up New@Student.edu for Chess Club");

    let roster = participants(&app, "Chess Club").await;
    assert_eq!(
        roster,
        vec!["michael@mergington.edu", "daniel@mergington.edu", "New@Student.edu"]
    );

    let (status, body) = send(
        &app,
        Method::POST,
        "/activities/Chess%20Club/signup?email=new@student.edu",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Student is already signed up");
    assert_eq!(participants(&app, "Chess Club").await.len(), 3);
}

#[tokio::test]
async fn test_signup_unknown_activity() {
    let app = test_app();

    let (_, before) = send(&app, Method::GET, "/activities").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/activities/Underwater%20Basket%20Weaving/signup?email=a@b.edu",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Activity not found");

    let (_, after) = send(&app, Method::GET, "/activities").await;
    assert_eq!(after, before);
}

#[tokio::test]
async fn test_repeated_email_key_uses_last_value() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/activities/Chess%20Club/signup?email=a@x.edu&email=b@x.edu",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Signed up b@x.edu for Chess Club");
    assert_eq!(
        participants(&app, "Chess Club").await,
        vec!["michael@mergington.edu", "daniel@mergington.edu", "b@x.edu"]
    );

    let (status, body) = send(
        &app,
        Method::DELETE,
        "/activities/Chess%20Club/participants?email=nobody@x.edu&email=B@X.edu",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Unregistered B@X.edu from Chess Club");
    assert_eq!(participants(&app, "Chess Club").await.len(), 2);
}

#[tokio::test]
async fn test_undecodable_activity_name_is_not_found() {
    let app = test_app();
    let (_, before) = send(&app, Method::GET, "/activities").await;

    for (method, uri) in [
        (Method::POST, "/activities/%FF/signup?email=a@x.edu"),
        (Method::DELETE, "/activities/%FF/participants?email=a@x.edu"),
    ] {
        let (status, body) = send(&app, method, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(body["detail"], "Activity not found", "{}", uri);
    }

    let (_, after) = send(&app, Method::GET, "/activities").await;
    assert_eq!(after, before);
}

#[tokio::test]
async fn test_signup_requires_email() {
    let app = test_app();

    for uri in [
        "/activities/Chess%20Club/signup?email=",
        "/activities/Chess%20Club/signup?email=%20%20",
        "/activities/Chess%20Club/signup",
    ] {
        let (status, body) = send(&app, Method::POST, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["detail"], "Email is required", "{}", uri);
    }

    assert_eq!(participants(&app, "Chess Club").await.len(), 2);
}

#[tokio::test]
async fn test_unknown_activity_checked_before_email() {
    let app = test_app();

    let (status, body) = send(&app, Method::POST, "/activities/Nope/signup?email=").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Activity not found");

    let (status, body) = send(&app, Method::DELETE, "/activities/Nope/participants?email=").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Activity not found");
}

#[tokio::test]
async fn test_unregister_case_insensitive() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::DELETE,
        "/activities/Chess%20Club/participants?email=%20Michael@Mergington.EDU%20",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Unregistered  Michael@Mergington.EDU  from Chess Club"
    );

    assert_eq!(participants(&app, "Chess Club").await, vec!["daniel@mergington.edu"]);
}

#[tokio::test]
async fn test_unregister_keeps_order_of_others() {
    let app = test_app();

    for email in ["a@x.edu", "b@x.edu", "c@x.edu"] {
        let uri = format!("/activities/Art%20Club/signup?email={}", email);
        let (status, _) = send(&app, Method::POST, &uri).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, _) = send(&app, Method::DELETE, "/activities/Art%20Club/participants?email=b@x.edu").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(
        participants(&app, "Art Club").await,
        vec!["mia@mergington.edu", "noah@mergington.edu", "a@x.edu", "c@x.edu"]
    );
}

#[tokio::test]
async fn test_unregister_absent_participant() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::DELETE,
        "/activities/Chess%20Club/participants?email=ghost@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Participant not found");

    let (status, body) = send(&app, Method::DELETE, "/activities/Chess%20Club/participants").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Email is required");
}

#[tokio::test]
async fn test_signup_after_unregister() {
    let app = test_app();

    let uri = "/activities/Gym%20Class/participants?email=john@mergington.edu";
    assert_eq!(send(&app, Method::DELETE, uri).await.0, StatusCode::OK);
    assert_eq!(send(&app, Method::DELETE, uri).await.0, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::POST, "/activities/Gym%20Class/signup?email=john@mergington.edu").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        participants(&app, "Gym Class").await,
        vec!["olivia@mergington.edu", "john@mergington.edu"]
    );
}

#[tokio::test]
async fn test_root_redirects_to_landing_page() {
    let app = test_app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/static/index.html"
    );
}

#[tokio::test]
async fn test_static_files_served() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>Mergington</h1>").unwrap();

    let config = ServerConfig {
        static_dir: dir.path().to_path_buf(),
        ..ServerConfig::default()
    };
    let app = MergingtonServer::new(config, Arc::new(InMemoryActivityRepository::seeded())).router();

    let response = app
        .oneshot(Request::builder().uri("/static/index.html").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = body::to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    assert_eq!(&bytes[..], b"<h1>Mergington</h1>");
}

#[tokio::test]
async fn test_wrong_method_on_known_path() {
    let app = test_app();

    for (method, uri) in [
        (Method::GET, "/activities/Chess%20Club/signup"),
        (Method::POST, "/activities"),
        (Method::PUT, "/activities/Chess%20Club/participants?email=a@x.edu"),
    ] {
        let (status, body) = send(&app, method, uri).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{}", uri);
        assert_eq!(body["detail"], "Method Not Allowed", "{}", uri);
    }

    assert_eq!(participants(&app, "Chess Club").await.len(), 2);
}

#[tokio::test]
async fn test_unknown_route() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/clubs").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Not Found");
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "UP");
    assert_eq!(body["dependencies"]["activityStore"]["status"], "UP");
    assert_eq!(body["dependencies"]["activityStore"]["activities"], 9);
    assert!(body["startedAt"].is_string());
}

#[tokio::test]
async fn test_health_check_store_down() {
    let mut repository = MockRepository::new();
    repository
        .expect_health_check()
        .returning(|| Err(CoreError::StateStoreError("unreachable".into())));
    repository
        .expect_count()
        .returning(|| Err(CoreError::StateStoreError("unreachable".into())));
    repository.expect_list().never();

    let app = MergingtonServer::new(ServerConfig::default(), Arc::new(repository)).router();

    let (status, body) = send(&app, Method::GET, "/health").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "DOWN");
    assert_eq!(body["dependencies"]["activityStore"]["status"], "DOWN");
}

#[tokio::test]
async fn test_store_failure_is_internal_error() {
    let mut repository = MockRepository::new();
    repository
        .expect_list()
        .returning(|| Err(CoreError::StateStoreError("disk on fire".into())));

    let app = MergingtonServer::new(ServerConfig::default(), Arc::new(repository)).router();

    let (status, body) = send(&app, Method::GET, "/activities").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "State store error: disk on fire");
}

#[tokio::test]
async fn test_correlation_id_header() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/activities")
                .header("x-correlation-id", "req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers().get("x-correlation-id").unwrap(), "req-42");

    let response = app
        .oneshot(Request::builder().uri("/activities").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let generated = response
        .headers()
        .get("x-correlation-id")
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(generated.len(), 36);
}
