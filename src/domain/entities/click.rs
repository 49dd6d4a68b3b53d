//! Click entity representing a single recorded visit.

use chrono::{DateTime, Utc};

/// A visit recorded against a link.
///
/// Clicks are append-only. `is_bot` is computed upstream and stored as given;
/// `country` may be the empty string, which is a regular grouping key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Click {
    pub id: i64,
    pub ip: String,
    pub user_agent: String,
    pub country: String,
    pub is_bot: bool,
    pub link_id: i64,
    pub created_at: DateTime<Utc>,
}

impl Click {
    /// Creates a new Click instance.
    pub fn new(
        id: i64,
        ip: String,
        user_agent: String,
        country: String,
        is_bot: bool,
        link_id: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            ip,
            user_agent,
            country,
            is_bot,
            link_id,
            created_at,
        }
    }
}

/// Input data for recording a click.
///
/// The `link_id` must reference an existing link; the store rejects
/// dangling references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewClick {
    pub link_id: i64,
    pub ip: String,
    pub user_agent: String,
    pub country: String,
    pub is_bot: bool,
}
