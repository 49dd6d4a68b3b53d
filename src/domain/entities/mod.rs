//! Core domain entities.
//!
//! Entities are plain data structures without business logic. Creation inputs
//! live in separate `New*` structs because identity and timestamps are
//! assigned by the store.
//!
//! - [`Link`] - A short code with its two destination URLs
//! - [`Click`] - A recorded visit against a link
//! - [`LinkStats`] - Per-link click totals and country breakdown

pub mod click;
pub mod link;
pub mod stats;

pub use click::{Click, NewClick};
pub use link::{Link, NewLink};
pub use stats::{CountryCount, LinkStats};
