#![allow(dead_code)]

use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use link_tracker::api::handlers::health_handler;
use link_tracker::api::routes::api_routes;
use link_tracker::domain::entities::{Link, NewClick, NewLink};
use link_tracker::domain::repositories::{ClickRepository, LinkRepository};
use link_tracker::infrastructure::persistence::InMemoryStore;
use link_tracker::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

pub fn create_test_state(store: Arc<InMemoryStore>) -> AppState {
    AppState::new(store.clone(), store)
}

pub fn make_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_routes())
        .with_state(state);
    TestServer::new(app).unwrap()
}

/// Fresh in-memory store and a server over it.
pub fn setup() -> (Arc<InMemoryStore>, TestServer) {
    let store = Arc::new(InMemoryStore::new());
    let server = make_server(create_test_state(store.clone()));
    (store, server)
}

/// Store whose operations each sleep for `latency` first.
pub fn slow_store(latency: Duration) -> Arc<InMemoryStore> {
    Arc::new(InMemoryStore::with_latency(latency))
}

pub async fn create_test_link(store: &InMemoryStore, code: &str) -> Link {
    LinkRepository::create(
        store,
        NewLink {
            code: code.to_string(),
            white_url: format!("https://white.example/{code}"),
            black_url: format!("https://black.example/{code}"),
        },
    )
    .await
    .unwrap()
}

pub async fn create_test_click(store: &InMemoryStore, link_id: i64, country: &str, is_bot: bool) {
    store
        .record(NewClick {
            link_id,
            ip: "198.51.100.1".to_string(),
            user_agent: "Mozilla/5.0".to_string(),
            country: country.to_string(),
            is_bot,
        })
        .await
        .unwrap();
}

pub async fn insert_pg_link(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO links (code, white_url, black_url) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(code)
    .bind(format!("https://white.example/{code}"))
    .bind(format!("https://black.example/{code}"))
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_pg_click(pool: &PgPool, link_id: i64, country: &str, is_bot: bool) {
    sqlx::query(
        "INSERT INTO clicks (ip, user_agent, country, is_bot, link_id) VALUES ($1, $2, $3, $4, $5)",
    )
    .bind("198.51.100.1")
    .bind("Mozilla/5.0")
    .bind(country)
    .bind(is_bot)
    .bind(link_id)
    .execute(pool)
    .await
    .unwrap();
}
