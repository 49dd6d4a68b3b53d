//! Repository implementations.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - Link storage and retrieval in PostgreSQL
//! - [`PgClickRepository`] - Click log and analytics queries in PostgreSQL
//! - [`InMemoryStore`] - Both traits over in-process tables

pub mod memory;
pub mod pg_click_repository;
pub mod pg_link_repository;

pub use memory::InMemoryStore;
pub use pg_click_repository::PgClickRepository;
pub use pg_link_repository::PgLinkRepository;
