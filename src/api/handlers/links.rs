//! Handlers for link endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::link::{CreateLinkRequest, LinkListResponse, LinkResponse};
use crate::api::dto::pagination::{PaginationMeta, PaginationParams};
use crate::api::extract::LenientQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Lists links, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
///
/// # Query Parameters
///
/// - `page` (optional): Page number (default: 1)
/// - `pageSize` (optional): Items per page (default: 10)
///
/// Values that are not positive integers fall back to the defaults. A
/// repeated parameter keeps its first value.
///
/// # Response
///
/// ```json
/// {
///   "data": [
///     {
///       "id": 2,
///       "code": "aB3xY9",
///       "white_url": "https://example.com/safe",
///       "black_url": "https://example.com/offer",
///       "created_at": "2026-01-02T03:04:05Z"
///     }
///   ],
///   "pagination": { "total": 2, "page": 1, "pageSize": 10 }
/// }
/// ```
pub async fn list_links_handler(
    State(state): State<AppState>,
    LenientQuery(params): LenientQuery<PaginationParams>,
) -> Result<Json<LinkListResponse>, AppError> {
    let page = params.page_request();
    let (links, total) = state.link_registry.list(page).await?;

    Ok(Json(LinkListResponse {
        data: links.into_iter().map(LinkResponse::from).collect(),
        pagination: PaginationMeta::new(total, page),
    }))
}

/// Creates a link with a generated short code.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "white_url": "https://example.com/safe",
///   "black_url": "https://example.com/offer"
/// }
/// ```
///
/// # Response Codes
///
/// - **201 Created**: Link created, body is the new link
/// - **400 Bad Request**: Malformed body or missing/blank URL
/// - **500 Internal Server Error**: Code allocation or storage failure
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Invalid request format",
            json!({ "reason": rejection.body_text() }),
        )
    })?;
    payload.validate()?;

    let link = state
        .link_registry
        .create(
            payload.white_url.unwrap_or_default(),
            payload.black_url.unwrap_or_default(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Fetches one link by id.
///
/// # Endpoint
///
/// `GET /api/links/{id}`
///
/// # Response Codes
///
/// - **200 OK**: Link found
/// - **400 Bad Request**: `id` is not an integer
/// - **404 Not Found**: No link with this id
pub async fn get_link_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LinkResponse>, AppError> {
    let id = parse_link_id(&id)?;
    let link = state.link_registry.get(id).await?;

    Ok(Json(link.into()))
}

/// Parses a link id path segment.
pub(crate) fn parse_link_id(raw: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::bad_request("Invalid link ID", json!({ "id": raw })))
}
