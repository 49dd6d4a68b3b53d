//! Derived click statistics. Never persisted, recomputed per request.

/// Click count for one country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCount {
    pub country: String,
    pub count: i64,
}

impl CountryCount {
    pub fn new(country: impl Into<String>, count: i64) -> Self {
        Self {
            country: country.into(),
            count,
        }
    }
}

/// Aggregated statistics for a single link.
///
/// `country_stats` is ordered by count descending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkStats {
    pub total_clicks: i64,
    pub bot_clicks: i64,
    pub country_stats: Vec<CountryCount>,
}
