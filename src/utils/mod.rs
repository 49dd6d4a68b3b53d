//! Utility functions used across the application.
//!
//! - [`code_generator`] - Short code generation and shape checks
//! - [`db_error`] - PostgreSQL constraint violation classification

pub mod code_generator;
pub mod db_error;
