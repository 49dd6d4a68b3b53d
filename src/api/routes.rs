//! API route configuration.

use crate::api::handlers::{
    create_link_handler, get_link_handler, link_stats_handler, list_clicks_handler,
    list_links_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET  /links`            - List links (paginated)
/// - `POST /links`            - Create a link
/// - `GET  /links/{id}`       - Fetch one link
/// - `GET  /links/{id}/stats` - Click statistics for a link
/// - `GET  /clicks`           - List clicks (paginated, filterable)
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route("/links/{id}", get(get_link_handler))
        .route("/links/{id}/stats", get(link_stats_handler))
        .route("/clicks", get(list_clicks_handler))
}
