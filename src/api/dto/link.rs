//! DTOs for link endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::pagination::PaginationMeta;
use crate::domain::entities::Link;

/// Request to create a link with its two destinations.
///
/// Both fields are required. Blank values are rejected by
/// [`crate::application::services::LinkRegistry::create`].
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    #[validate(required(message = "white_url is required"))]
    pub white_url: Option<String>,

    #[validate(required(message = "black_url is required"))]
    pub black_url: Option<String>,
}

/// A link as returned by the API.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: i64,
    pub code: String,
    pub white_url: String,
    pub black_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            code: link.code,
            white_url: link.white_url,
            black_url: link.black_url,
            created_at: link.created_at,
        }
    }
}

/// One page of links.
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub data: Vec<LinkResponse>,
    pub pagination: PaginationMeta,
}
