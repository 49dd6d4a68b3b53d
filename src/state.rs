//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{ClickAggregator, LinkRegistry};
use crate::domain::repositories::{ClickRepository, LinkRepository};

/// Services shared by all request handlers.
///
/// Cloning is cheap: every field is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub link_registry: Arc<LinkRegistry>,
    pub click_aggregator: Arc<ClickAggregator>,
}

impl AppState {
    /// Wires services on top of the given repositories.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        click_repository: Arc<dyn ClickRepository>,
    ) -> Self {
        Self {
            link_registry: Arc::new(LinkRegistry::new(link_repository.clone())),
            click_aggregator: Arc::new(ClickAggregator::new(click_repository, link_repository)),
        }
    }
}
