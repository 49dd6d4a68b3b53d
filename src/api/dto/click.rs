//! DTOs for click listing endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::dto::pagination::PaginationMeta;
use crate::domain::entities::Click;

/// A click as returned by the API.
#[derive(Debug, Serialize)]
pub struct ClickResponse {
    pub id: i64,
    pub ip: String,
    pub user_agent: String,
    pub country: String,
    pub is_bot: bool,
    pub link_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Click> for ClickResponse {
    fn from(click: Click) -> Self {
        Self {
            id: click.id,
            ip: click.ip,
            user_agent: click.user_agent,
            country: click.country,
            is_bot: click.is_bot,
            link_id: click.link_id,
            created_at: click.created_at,
        }
    }
}

/// Values available for the click filters.
#[derive(Debug, Serialize)]
pub struct ClickFilters {
    /// Every country in the click log, regardless of the active filter.
    pub countries: Vec<String>,
}

/// One page of clicks with its filter metadata.
#[derive(Debug, Serialize)]
pub struct ClickListResponse {
    pub data: Vec<ClickResponse>,
    pub pagination: PaginationMeta,
    pub filters: ClickFilters,
}
