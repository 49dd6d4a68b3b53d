//! Application layer services implementing business logic.
//!
//! Services consume repository traits through injected `Arc` handles and
//! provide the operations the HTTP handlers and the admin CLI call.
//!
//! # Available Services
//!
//! - [`services::code_allocator::CodeAllocator`] - Unique short code allocation
//! - [`services::link_registry::LinkRegistry`] - Link creation, lookup and listing
//! - [`services::click_aggregator::ClickAggregator`] - Click listing and link statistics

pub mod services;
