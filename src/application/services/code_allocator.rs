//! Short code allocation.

use std::sync::Arc;

use serde_json::json;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Number of codes drawn before allocation gives up.
pub const MAX_ALLOCATION_ATTEMPTS: usize = 5;

/// Draws random short codes until one is not in use.
///
/// The existence check only avoids constraint-violation churn; it cannot
/// rule out a concurrent insert of the same code. The unique constraint in
/// the store plus the insert retry in
/// [`LinkRegistry`](crate::application::services::LinkRegistry) are what
/// keep codes unique.
pub struct CodeAllocator<L: LinkRepository + ?Sized = dyn LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository + ?Sized> CodeAllocator<L> {
    /// Creates an allocator backed by the given link store.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Returns a code that was unused at the time of the check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Allocation`] if every attempt collided or the
    /// random source failed.
    /// Returns [`AppError::Store`] if the existence check fails.
    pub async fn allocate(&self) -> Result<String, AppError> {
        for attempt in 1..=MAX_ALLOCATION_ATTEMPTS {
            let code = generate_code().map_err(|e| {
                tracing::error!(error = %e, "System random source failed");
                AppError::allocation(
                    "Failed to generate unique code",
                    json!({ "reason": "Random source unavailable" }),
                )
            })?;

            if !self.link_repository.code_exists(&code).await? {
                return Ok(code);
            }

            tracing::debug!(attempt, code = %code, "Short code collision");
        }

        metrics::counter!("code_allocation_exhausted_total").increment(1);
        tracing::error!(
            attempts = MAX_ALLOCATION_ATTEMPTS,
            "Short code allocation exhausted, store may be returning stale results"
        );

        Err(AppError::allocation(
            "Failed to generate unique code",
            json!({ "attempts": MAX_ALLOCATION_ATTEMPTS }),
        ))
    }
}
