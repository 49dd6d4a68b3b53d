//! Pagination and filtering query parameters.
//!
//! Parsing is lenient: a value that does not parse is treated as absent
//! rather than rejected, so `?page=abc` behaves like no `page` at all.

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, DisplayFromStr, serde_as};

use crate::domain::click_filter::ClickFilter;
use crate::domain::page::PageRequest;

/// Pagination query parameters.
///
/// Uses `serde_with` to parse page numbers from query strings, falling back
/// to `None` for anything that is not a non-negative integer.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default, rename = "pageSize")]
    pub page_size: Option<u32>,
}

impl PaginationParams {
    /// Resolves the parameters into a page request.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `pageSize`: 10
    ///
    /// Zero is treated like a missing value.
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page.unwrap_or(0), self.page_size.unwrap_or(0))
    }
}

/// Query parameters of the click listing.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ClickQueryParams {
    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default, rename = "pageSize")]
    pub page_size: Option<u32>,

    /// Exact country match. Empty means no filter.
    pub country: Option<String>,

    /// Accepts `1 t T TRUE true True 0 f F FALSE false False`; anything else
    /// is ignored.
    pub is_bot: Option<String>,
}

impl ClickQueryParams {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page.unwrap_or(0), self.page_size.unwrap_or(0))
    }

    /// Builds the click filter, country first, then bot flag.
    pub fn filter(&self) -> ClickFilter {
        ClickFilter::new()
            .with_country(self.country.clone())
            .with_is_bot(self.is_bot.as_deref().and_then(parse_bool))
    }
}

/// Pagination metadata echoed back with every list response.
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub total: i64,
    pub page: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

impl PaginationMeta {
    pub fn new(total: i64, page: PageRequest) -> Self {
        Self {
            total,
            page: page.page,
            page_size: page.page_size,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
