//! Page selection for paginated listings.

/// Default page number.
pub const DEFAULT_PAGE: u32 = 1;

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// A 1-based page of fixed size.
///
/// No upper bound is placed on `page_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    /// Builds a page request, replacing zero values with the defaults.
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: if page == 0 { DEFAULT_PAGE } else { page },
            page_size: if page_size == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                page_size
            },
        }
    }

    /// Rows to skip.
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1).saturating_mul(i64::from(self.page_size))
    }

    /// Rows to return.
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
