//! Handler for the click listing.

use axum::{
    Json,
    extract::State,
};

use crate::api::dto::click::{ClickFilters, ClickListResponse, ClickResponse};
use crate::api::dto::pagination::{ClickQueryParams, PaginationMeta};
use crate::api::extract::LenientQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Lists clicks across all links, newest first.
///
/// # Endpoint
///
/// `GET /api/clicks`
///
/// # Query Parameters
///
/// - `page` (optional): Page number (default: 1)
/// - `pageSize` (optional): Items per page (default: 10)
/// - `country` (optional): Exact country match; empty means no filter
/// - `is_bot` (optional): `true`/`false` (also `1`/`0`, `t`/`f`); other
///   values are ignored
///
/// A repeated parameter keeps its first value.
///
/// # Response
///
/// `pagination.total` counts clicks matching the filters. `filters.countries`
/// lists every country in the log and is not narrowed by the filters.
///
/// ```json
/// {
///   "data": [],
///   "pagination": { "total": 0, "page": 1, "pageSize": 10 },
///   "filters": { "countries": ["FR", "US"] }
/// }
/// ```
pub async fn list_clicks_handler(
    State(state): State<AppState>,
    LenientQuery(params): LenientQuery<ClickQueryParams>,
) -> Result<Json<ClickListResponse>, AppError> {
    let page = params.page_request();
    let listing = state
        .click_aggregator
        .list_clicks(params.filter(), page)
        .await?;

    Ok(Json(ClickListResponse {
        data: listing.clicks.into_iter().map(ClickResponse::from).collect(),
        pagination: PaginationMeta::new(listing.total, page),
        filters: ClickFilters {
            countries: listing.countries,
        },
    }))
}
