//! Business logic services for the application layer.

pub mod click_aggregator;
pub mod code_allocator;
pub mod link_registry;

pub use click_aggregator::{ClickAggregator, ClickListing};
pub use code_allocator::CodeAllocator;
pub use link_registry::LinkRegistry;
