//! Repository trait for click recording and aggregation.

use crate::domain::click_filter::ClickFilter;
use crate::domain::entities::{Click, CountryCount, NewClick};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the click log.
///
/// Every query that takes a [`ClickFilter`] must apply all of its predicates,
/// so that [`ClickRepository::list`] and [`ClickRepository::count`] over the
/// same filter describe the same rows.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryStore`] - In-process implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_click.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the referenced link does not exist.
    /// Returns [`AppError::Store`] on other storage failures.
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError>;

    /// Lists clicks matching `filter`, ordered by id descending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on storage failures.
    async fn list(
        &self,
        filter: &ClickFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Click>, AppError>;

    /// Counts clicks matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on storage failures.
    async fn count(&self, filter: &ClickFilter) -> Result<i64, AppError>;

    /// Distinct countries across all clicks, ascending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on storage failures.
    async fn distinct_countries(&self) -> Result<Vec<String>, AppError>;

    /// Click counts per country for one link, highest count first.
    ///
    /// Ties are ordered by country ascending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on storage failures.
    async fn count_by_country(&self, link_id: i64) -> Result<Vec<CountryCount>, AppError>;
}
