//! Click listing and per-link analytics.

use std::sync::Arc;

use serde_json::json;

use crate::domain::click_filter::ClickFilter;
use crate::domain::entities::{Click, LinkStats, NewClick};
use crate::domain::page::PageRequest;
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::error::AppError;

/// One page of clicks together with its filter-consistent total.
#[derive(Debug, Clone)]
pub struct ClickListing {
    pub clicks: Vec<Click>,
    /// Number of clicks matching the filter across all pages.
    pub total: i64,
    /// Every country present in the click log, ignoring the filter.
    pub countries: Vec<String>,
}

/// Service building filtered click listings and grouped link statistics.
///
/// Independent queries of one request run concurrently with
/// `tokio::try_join!`.
pub struct ClickAggregator<
    C: ClickRepository + ?Sized = dyn ClickRepository,
    L: LinkRepository + ?Sized = dyn LinkRepository,
> {
    click_repository: Arc<C>,
    link_repository: Arc<L>,
}

impl<C: ClickRepository + ?Sized, L: LinkRepository + ?Sized> ClickAggregator<C, L> {
    /// Creates a new click aggregator.
    pub fn new(click_repository: Arc<C>, link_repository: Arc<L>) -> Self {
        Self {
            click_repository,
            link_repository,
        }
    }

    /// Lists one page of clicks matching `filter`, newest first.
    ///
    /// The same filter drives both the page and the total, so `total` always
    /// counts the rows the page was cut from.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on storage failures.
    pub async fn list_clicks(
        &self,
        filter: ClickFilter,
        page: PageRequest,
    ) -> Result<ClickListing, AppError> {
        let (clicks, total, countries) = tokio::try_join!(
            self.click_repository
                .list(&filter, page.offset(), page.limit()),
            self.click_repository.count(&filter),
            self.click_repository.distinct_countries()
        )?;

        Ok(ClickListing {
            clicks,
            total,
            countries,
        })
    }

    /// Computes click statistics for one link.
    ///
    /// The link is looked up first so that a missing link is distinguishable
    /// from a link without clicks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the link does not exist.
    /// Returns [`AppError::Store`] on storage failures.
    pub async fn stats(&self, link_id: i64) -> Result<LinkStats, AppError> {
        if self.link_repository.find_by_id(link_id).await?.is_none() {
            return Err(AppError::not_found(
                "Link not found",
                json!({ "id": link_id }),
            ));
        }

        let all_clicks = ClickFilter::for_link(link_id);
        let bot_clicks = all_clicks.clone().with_is_bot(Some(true));

        let (total_clicks, bot_clicks, country_stats) = tokio::try_join!(
            self.click_repository.count(&all_clicks),
            self.click_repository.count(&bot_clicks),
            self.click_repository.count_by_country(link_id)
        )?;

        Ok(LinkStats {
            total_clicks,
            bot_clicks,
            country_stats,
        })
    }

    /// Appends a click to the log.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the link does not exist.
    /// Returns [`AppError::Store`] on storage failures.
    pub async fn record_click(&self, new_click: NewClick) -> Result<Click, AppError> {
        let click = self.click_repository.record(new_click).await?;
        tracing::debug!(click_id = click.id, link_id = click.link_id, "Click recorded");
        Ok(click)
    }
}
