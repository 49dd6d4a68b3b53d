//! DTOs for link statistics endpoint.

use serde::Serialize;

use crate::domain::entities::{CountryCount, LinkStats};

/// Click statistics for one link.
#[derive(Debug, Serialize)]
pub struct LinkStatsResponse {
    pub total_clicks: i64,
    pub bot_clicks: i64,
    pub country_stats: Vec<CountryStatItem>,
}

/// Clicks from one country.
#[derive(Debug, Serialize)]
pub struct CountryStatItem {
    pub country: String,
    pub count: i64,
}

impl From<CountryCount> for CountryStatItem {
    fn from(c: CountryCount) -> Self {
        Self {
            country: c.country,
            count: c.count,
        }
    }
}

impl From<LinkStats> for LinkStatsResponse {
    fn from(stats: LinkStats) -> Self {
        Self {
            total_clicks: stats.total_clicks,
            bot_clicks: stats.bot_clicks,
            country_stats: stats.country_stats.into_iter().map(Into::into).collect(),
        }
    }
}
