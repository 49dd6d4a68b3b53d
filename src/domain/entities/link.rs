//! Link entity representing a tracked short link.

use chrono::{DateTime, Utc};

/// A short link with its two destinations.
///
/// The `white_url` and `black_url` pair is stored verbatim; choosing between
/// them happens at redirect time, outside this service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub white_url: String,
    pub black_url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        code: String,
        white_url: String,
        black_url: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            code,
            white_url,
            black_url,
            created_at,
        }
    }
}

/// Input data for inserting a new link.
///
/// `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub white_url: String,
    pub black_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            1,
            "aB3xZ9".to_string(),
            "https://white.example.com".to_string(),
            "https://black.example.com".to_string(),
            now,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.code, "aB3xZ9");
        assert_eq!(link.white_url, "https://white.example.com");
        assert_eq!(link.black_url, "https://black.example.com");
        assert_eq!(link.created_at, now);
    }

    #[test]
    fn test_new_link_creation() {
        let new_link = NewLink {
            code: "Qw12er".to_string(),
            white_url: "https://rust-lang.org".to_string(),
            black_url: "https://crates.io".to_string(),
        };

        assert_eq!(new_link.code, "Qw12er");
        assert_eq!(new_link.white_url, "https://rust-lang.org");
        assert_eq!(new_link.black_url, "https://crates.io");
    }
}
