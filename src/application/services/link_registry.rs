//! Link creation and retrieval service.

use std::sync::Arc;

use serde_json::json;

use crate::application::services::code_allocator::CodeAllocator;
use crate::domain::entities::{Link, NewLink};
use crate::domain::page::PageRequest;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Number of allocate-and-insert rounds before a storage collision is
/// reported as a failure.
const INSERT_ATTEMPTS: usize = 2;

/// Service for creating, fetching and listing links.
pub struct LinkRegistry<L: LinkRepository + ?Sized = dyn LinkRepository> {
    link_repository: Arc<L>,
    allocator: CodeAllocator<L>,
}

impl<L: LinkRepository + ?Sized> LinkRegistry<L> {
    /// Creates a new link registry.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self {
            allocator: CodeAllocator::new(link_repository.clone()),
            link_repository,
        }
    }

    /// Creates a link with a freshly allocated short code.
    ///
    /// Both URLs are stored exactly as given.
    ///
    /// # Code Allocation
    ///
    /// A unique-constraint violation on insert means another request took the
    /// same code between the allocator's check and this insert. The whole
    /// allocate-and-insert step is then repeated once with a new code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if either URL is empty.
    /// Returns [`AppError::Allocation`] if no free code could be drawn.
    /// Returns [`AppError::Store`] on storage failures, including a repeated
    /// collision on insert.
    pub async fn create(&self, white_url: String, black_url: String) -> Result<Link, AppError> {
        require_url("white_url", &white_url)?;
        require_url("black_url", &black_url)?;

        let mut attempt = 1;
        loop {
            let code = self.allocator.allocate().await?;
            let new_link = NewLink {
                code,
                white_url: white_url.clone(),
                black_url: black_url.clone(),
            };

            match self.link_repository.create(new_link).await {
                Ok(link) => {
                    metrics::counter!("links_created_total").increment(1);
                    tracing::info!(link_id = link.id, code = %link.code, "Link created");
                    return Ok(link);
                }
                Err(AppError::Conflict { .. }) if attempt < INSERT_ATTEMPTS => {
                    tracing::warn!(attempt, "Short code taken at insert, retrying");
                    attempt += 1;
                }
                Err(AppError::Conflict { details, .. }) => {
                    tracing::error!(attempts = attempt, "Short code collided on every insert");
                    return Err(AppError::store("Failed to create link", details));
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Retrieves a link by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    /// Returns [`AppError::Store`] on storage failures.
    pub async fn get(&self, id: i64) -> Result<Link, AppError> {
        self.link_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "id": id })))
    }

    /// Lists one page of links, most recent first, with the total count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on storage failures.
    pub async fn list(&self, page: PageRequest) -> Result<(Vec<Link>, i64), AppError> {
        tokio::try_join!(
            self.link_repository.list(page.offset(), page.limit()),
            self.link_repository.count()
        )
    }

    /// Checks that the link store is reachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }
}

fn require_url(field: &'static str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::bad_request(
            format!("{field} is required"),
            json!({ "field": field }),
        ));
    }
    Ok(())
}
