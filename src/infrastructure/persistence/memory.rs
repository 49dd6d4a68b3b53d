//! In-process store implementing both repository traits.
//!
//! Used by the HTTP integration tests and for running the service without a
//! database. Constraints mirror the PostgreSQL schema: codes are unique and
//! clicks must reference an existing link.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::time::Duration;
use tokio::sync::RwLock;

use crate::domain::click_filter::ClickFilter;
use crate::domain::entities::{Click, CountryCount, Link, NewClick, NewLink};
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::error::AppError;

#[derive(Debug, Default)]
struct Tables {
    links: BTreeMap<i64, Link>,
    codes: HashSet<String>,
    clicks: BTreeMap<i64, Click>,
    last_link_id: i64,
    last_click_id: i64,
}

/// Link and click tables behind a single `RwLock`.
///
/// Ids are assigned sequentially starting at 1. The code uniqueness check and
/// the insert happen under one write lock, so concurrent `create` calls with
/// the same code see exactly one success.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
    latency: Option<Duration>,
}

fn window<T>(rows: impl Iterator<Item = T>, offset: i64, limit: i64) -> Vec<T> {
    let offset = usize::try_from(offset).unwrap_or(0);
    let limit = usize::try_from(limit).unwrap_or(0);
    rows.skip(offset).take(limit).collect()
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays every operation by `latency` before it touches the tables.
    ///
    /// Widens the window between concurrent requests in tests.
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency: Some(latency),
            ..Self::default()
        }
    }

    async fn delay(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl LinkRepository for InMemoryStore {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        self.delay().await;
        let mut tables = self.tables.write().await;

        if tables.codes.contains(&new_link.code) {
            return Err(AppError::conflict(
                "Short code already exists",
                json!({ "constraint": "links_code_key" }),
            ));
        }

        tables.last_link_id += 1;
        let link = Link::new(
            tables.last_link_id,
            new_link.code,
            new_link.white_url,
            new_link.black_url,
            Utc::now(),
        );
        tables.codes.insert(link.code.clone());
        tables.links.insert(link.id, link.clone());

        Ok(link)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError> {
        self.delay().await;
        Ok(self.tables.read().await.links.get(&id).cloned())
    }

    async fn code_exists(&self, code: &str) -> Result<bool, AppError> {
        self.delay().await;
        Ok(self.tables.read().await.codes.contains(code))
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Link>, AppError> {
        self.delay().await;
        let tables = self.tables.read().await;
        Ok(window(tables.links.values().rev().cloned(), offset, limit))
    }

    async fn count(&self) -> Result<i64, AppError> {
        self.delay().await;
        Ok(self.tables.read().await.links.len() as i64)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[async_trait]
impl ClickRepository for InMemoryStore {
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError> {
        self.delay().await;
        let mut tables = self.tables.write().await;

        if !tables.links.contains_key(&new_click.link_id) {
            return Err(AppError::bad_request(
                "Referenced link does not exist",
                json!({}),
            ));
        }

        tables.last_click_id += 1;
        let click = Click::new(
            tables.last_click_id,
            new_click.ip,
            new_click.user_agent,
            new_click.country,
            new_click.is_bot,
            new_click.link_id,
            Utc::now(),
        );
        tables.clicks.insert(click.id, click.clone());

        Ok(click)
    }

    async fn list(
        &self,
        filter: &ClickFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Click>, AppError> {
        self.delay().await;
        let tables = self.tables.read().await;
        let matching = tables
            .clicks
            .values()
            .rev()
            .filter(|click| filter.matches(click))
            .cloned();

        Ok(window(matching, offset, limit))
    }

    async fn count(&self, filter: &ClickFilter) -> Result<i64, AppError> {
        self.delay().await;
        let tables = self.tables.read().await;
        let count = tables
            .clicks
            .values()
            .filter(|click| filter.matches(click))
            .count();

        Ok(count as i64)
    }

    async fn distinct_countries(&self) -> Result<Vec<String>, AppError> {
        self.delay().await;
        let tables = self.tables.read().await;
        let countries: BTreeSet<&str> = tables
            .clicks
            .values()
            .map(|click| click.country.as_str())
            .collect();

        Ok(countries.into_iter().map(str::to_string).collect())
    }

    async fn count_by_country(&self, link_id: i64) -> Result<Vec<CountryCount>, AppError> {
        self.delay().await;
        let tables = self.tables.read().await;

        let mut counts: HashMap<&str, i64> = HashMap::new();
        for click in tables.clicks.values().filter(|c| c.link_id == link_id) {
            *counts.entry(click.country.as_str()).or_default() += 1;
        }

        let mut stats: Vec<CountryCount> = counts
            .into_iter()
            .map(|(country, count)| CountryCount::new(country, count))
            .collect();
        stats.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.country.cmp(&b.country)));

        Ok(stats)
    }
}
