//! Domain layer containing business entities and store contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`click_filter`] - Predicate list shared by click page and count queries
//! - [`page`] - Page selection for paginated listings
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Business rules live in [`crate::application::services`].

pub mod click_filter;
pub mod entities;
pub mod page;
pub mod repositories;
