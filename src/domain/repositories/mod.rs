//! Repository trait definitions for the domain layer.
//!
//! These traits are the contract between the services and the store. The
//! services only ever see `Arc<dyn ...>` handles injected at construction.
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Link insertion, lookup and pagination
//! - [`ClickRepository`] - Click log append and aggregate queries
//!
//! # Testing
//!
//! Mock implementations are generated via `mockall` under `cfg(test)`.
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod click_repository;
pub mod link_repository;

pub use click_repository::ClickRepository;
pub use link_repository::LinkRepository;

#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
