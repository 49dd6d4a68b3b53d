mod common;

use async_trait::async_trait;
use axum::http::StatusCode;
use link_tracker::domain::entities::{Link, NewLink};
use link_tracker::domain::repositories::LinkRepository;
use link_tracker::error::AppError;
use link_tracker::infrastructure::persistence::InMemoryStore;
use link_tracker::state::AppState;
use link_tracker::utils::code_generator::is_valid_code;
use serde_json::{Value, json};
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::task::JoinSet;

/// Link store where another writer inserts the same code right before each
/// of the first `races` inserts, after the allocator's existence check.
struct RacingLinkStore {
    inner: Arc<InMemoryStore>,
    races: AtomicUsize,
}

#[async_trait]
impl LinkRepository for RacingLinkStore {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let racing = self
            .races
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if racing {
            common::create_test_link(&self.inner, &new_link.code).await;
        }
        LinkRepository::create(self.inner.as_ref(), new_link).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError> {
        self.inner.find_by_id(id).await
    }

    async fn code_exists(&self, code: &str) -> Result<bool, AppError> {
        self.inner.code_exists(code).await
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Link>, AppError> {
        LinkRepository::list(self.inner.as_ref(), offset, limit).await
    }

    async fn count(&self) -> Result<i64, AppError> {
        LinkRepository::count(self.inner.as_ref()).await
    }

    async fn ping(&self) -> Result<(), AppError> {
        LinkRepository::ping(self.inner.as_ref()).await
    }
}

fn racing_server(races: usize) -> (Arc<InMemoryStore>, axum_test::TestServer) {
    let store = Arc::new(InMemoryStore::new());
    let links = Arc::new(RacingLinkStore {
        inner: store.clone(),
        races: AtomicUsize::new(races),
    });
    let server = common::make_server(AppState::new(links, store.clone()));
    (store, server)
}

#[tokio::test]
async fn test_create_link_success() {
    let (_store, server) = common::setup();

    let response = server
        .post("/api/links")
        .json(&json!({
            "white_url": "https://example.com/safe",
            "black_url": "https://example.com/offer"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<Value>();
    assert_eq!(json["id"], 1);
    assert_eq!(json["white_url"], "https://example.com/safe");
    assert_eq!(json["black_url"], "https://example.com/offer");
    assert!(json["created_at"].is_string());

    let code = json["code"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert!(is_valid_code(code));
}

#[tokio::test]
async fn test_create_link_stores_urls_verbatim() {
    let (_store, server) = common::setup();

    let response = server
        .post("/api/links")
        .json(&json!({
            "white_url": "  https://example.com/a?b=c  ",
            "black_url": "not even a url"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    assert_eq!(json["white_url"], "  https://example.com/a?b=c  ");
    assert_eq!(json["black_url"], "not even a url");
}

#[tokio::test]
async fn test_create_link_missing_field() {
    let (_store, server) = common::setup();

    let response = server
        .post("/api/links")
        .json(&json!({ "white_url": "https://example.com/safe" }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_create_link_blank_url() {
    let (_store, server) = common::setup();

    let response = server
        .post("/api/links")
        .json(&json!({
            "white_url": "https://example.com/safe",
            "black_url": "   "
        }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_create_link_malformed_body() {
    let (_store, server) = common::setup();

    let response = server
        .post("/api/links")
        .text("{\"white_url\": ")
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_get_link_returns_created_record() {
    let (_store, server) = common::setup();

    let created = server
        .post("/api/links")
        .json(&json!({
            "white_url": "https://example.com/safe",
            "black_url": "https://example.com/offer"
        }))
        .await
        .json::<Value>();

    let id = created["id"].as_i64().unwrap();
    let response = server.get(&format!("/api/links/{id}")).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), created);
}

#[tokio::test]
async fn test_get_link_not_found() {
    let (_store, server) = common::setup();

    let response = server.get("/api/links/999").await;

    response.assert_status_not_found();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_get_link_non_numeric_id() {
    let (_store, server) = common::setup();

    let response = server.get("/api/links/abc").await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["message"], "Invalid link ID");
}

#[tokio::test]
async fn test_list_links_second_page() {
    let (store, server) = common::setup();
    for i in 0..15 {
        common::create_test_link(&store, &format!("code{i:02}")).await;
    }

    let response = server
        .get("/api/links")
        .add_query_param("page", 2)
        .add_query_param("pageSize", 10)
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();

    let ids: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![5, 4, 3, 2, 1]);
    assert_eq!(json["pagination"]["total"], 15);
    assert_eq!(json["pagination"]["page"], 2);
    assert_eq!(json["pagination"]["pageSize"], 10);
}

#[tokio::test]
async fn test_list_links_defaults_and_lenient_params() {
    let (store, server) = common::setup();
    for i in 0..12 {
        common::create_test_link(&store, &format!("code{i:02}")).await;
    }

    let response = server
        .get("/api/links")
        .add_query_param("page", "abc")
        .add_query_param("pageSize", "-3")
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["data"].as_array().unwrap().len(), 10);
    assert_eq!(json["data"][0]["id"], 12);
    assert_eq!(json["pagination"]["page"], 1);
    assert_eq!(json["pagination"]["pageSize"], 10);
}

#[tokio::test]
async fn test_list_links_empty() {
    let (_store, server) = common::setup();

    let response = server.get("/api/links").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["data"], json!([]));
    assert_eq!(json["pagination"]["total"], 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_get_distinct_codes() {
    const N: usize = 50;

    let store = common::slow_store(Duration::from_millis(5));
    let state = common::create_test_state(store.clone());

    let mut tasks = JoinSet::new();
    for i in 0..N {
        let registry = state.link_registry.clone();
        tasks.spawn(async move {
            registry
                .create(
                    format!("https://white.example/{i}"),
                    format!("https://black.example/{i}"),
                )
                .await
        });
    }

    let mut codes = HashSet::new();
    let mut ids = HashSet::new();
    while let Some(result) = tasks.join_next().await {
        let link = result.unwrap().unwrap();
        assert!(is_valid_code(&link.code));
        codes.insert(link.code);
        ids.insert(link.id);
    }

    assert_eq!(codes.len(), N);
    assert_eq!(ids.len(), N);
}

#[tokio::test]
async fn test_create_retries_after_code_taken_at_insert() {
    let (store, server) = racing_server(1);

    let response = server
        .post("/api/links")
        .json(&json!({
            "white_url": "https://example.com/safe",
            "black_url": "https://example.com/offer"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    assert_eq!(json["id"], 2);
    assert_eq!(json["white_url"], "https://example.com/safe");

    let racer = store.find_by_id(1).await.unwrap().unwrap();
    assert_ne!(json["code"], racer.code.as_str());
    assert_eq!(LinkRepository::count(store.as_ref()).await.unwrap(), 2);
}

#[tokio::test]
async fn test_create_fails_when_code_taken_on_every_insert() {
    let (store, server) = racing_server(2);

    let response = server
        .post("/api/links")
        .json(&json!({
            "white_url": "https://example.com/safe",
            "black_url": "https://example.com/offer"
        }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "store_error");
    assert_eq!(LinkRepository::count(store.as_ref()).await.unwrap(), 2);
}

#[tokio::test]
async fn test_list_links_repeated_page_keys_use_first_value() {
    let (store, server) = common::setup();
    for i in 0..15 {
        common::create_test_link(&store, &format!("code{i:02}")).await;
    }

    let response = server.get("/api/links?page=2&page=1").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["data"].as_array().unwrap().len(), 5);
    assert_eq!(json["data"][0]["id"], 5);
    assert_eq!(json["pagination"]["page"], 2);
    assert_eq!(json["pagination"]["total"], 15);
}
