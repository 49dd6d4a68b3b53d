//! Repository trait for link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing links.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryStore`] - In-process implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link.
    ///
    /// The store enforces uniqueness of `code` atomically; this is the
    /// authoritative collision check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code is already taken.
    /// Returns [`AppError::Store`] on other storage failures.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on storage failures.
    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError>;

    /// Returns true if a link with this code exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on storage failures.
    async fn code_exists(&self, code: &str) -> Result<bool, AppError>;

    /// Lists links ordered by id descending.
    ///
    /// # Arguments
    ///
    /// - `offset` - Number of rows to skip
    /// - `limit` - Maximum number of rows to return
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on storage failures.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Link>, AppError>;

    /// Counts all links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on storage failures.
    async fn count(&self) -> Result<i64, AppError>;

    /// Round-trips the store to confirm it is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
