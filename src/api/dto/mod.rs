//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Collections always serialize as arrays, never `null`.

pub mod click;
pub mod health;
pub mod link;
pub mod pagination;
pub mod stats;
