//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod clicks;
pub mod health;
pub mod links;
pub mod stats;

pub use clicks::list_clicks_handler;
pub use health::health_handler;
pub use links::{create_link_handler, get_link_handler, list_links_handler};
pub use stats::link_stats_handler;
