//! Handler for per-link click statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::LinkStatsResponse;
use crate::api::handlers::links::parse_link_id;
use crate::error::AppError;
use crate::state::AppState;

/// Returns click totals for one link.
///
/// # Endpoint
///
/// `GET /api/links/{id}/stats`
///
/// # Response
///
/// ```json
/// {
///   "total_clicks": 4,
///   "bot_clicks": 1,
///   "country_stats": [
///     { "country": "US", "count": 3 },
///     { "country": "FR", "count": 1 }
///   ]
/// }
/// ```
///
/// `country_stats` is ordered by count descending, then country.
///
/// # Errors
///
/// Returns 404 Not Found if the link doesn't exist.
/// Returns 400 Bad Request if `id` is not an integer.
pub async fn link_stats_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LinkStatsResponse>, AppError> {
    let id = parse_link_id(&id)?;
    let stats = state.click_aggregator.stats(id).await?;

    Ok(Json(stats.into()))
}
