//! Composable predicate list for click queries.
//!
//! A [`ClickFilter`] is an ordered sequence of equality predicates joined
//! with AND. Repositories render the same filter into both the page query
//! and the count query, so a page and its `total` always describe the same
//! set of clicks.

use crate::domain::entities::Click;

/// A single equality predicate on a click column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickPredicate {
    LinkId(i64),
    Country(String),
    IsBot(bool),
}

impl ClickPredicate {
    /// Column the predicate constrains.
    pub fn column(&self) -> &'static str {
        match self {
            ClickPredicate::LinkId(_) => "link_id",
            ClickPredicate::Country(_) => "country",
            ClickPredicate::IsBot(_) => "is_bot",
        }
    }

    /// Evaluates the predicate against an in-memory click.
    pub fn matches(&self, click: &Click) -> bool {
        match self {
            ClickPredicate::LinkId(id) => click.link_id == *id,
            ClickPredicate::Country(country) => click.country == *country,
            ClickPredicate::IsBot(is_bot) => click.is_bot == *is_bot,
        }
    }
}

/// Conjunction of click predicates, applied in insertion order.
///
/// An empty filter matches every click.
///
/// # Examples
///
/// ```
/// use link_tracker::domain::click_filter::{ClickFilter, ClickPredicate};
///
/// let filter = ClickFilter::new()
///     .with_country(Some("FR".to_string()))
///     .with_is_bot(None);
///
/// assert_eq!(filter.predicates(), &[ClickPredicate::Country("FR".to_string())]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickFilter {
    predicates: Vec<ClickPredicate>,
}

impl ClickFilter {
    /// Creates an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the filter to clicks of one link.
    pub fn for_link(link_id: i64) -> Self {
        Self::new().and(ClickPredicate::LinkId(link_id))
    }

    /// Appends a predicate.
    pub fn and(mut self, predicate: ClickPredicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Adds an exact country match. `None` and the empty string leave the
    /// filter unchanged.
    pub fn with_country(self, country: Option<String>) -> Self {
        match country {
            Some(country) if !country.is_empty() => self.and(ClickPredicate::Country(country)),
            _ => self,
        }
    }

    /// Adds a bot flag match when present.
    pub fn with_is_bot(self, is_bot: Option<bool>) -> Self {
        match is_bot {
            Some(is_bot) => self.and(ClickPredicate::IsBot(is_bot)),
            None => self,
        }
    }

    pub fn predicates(&self) -> &[ClickPredicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Returns true if every predicate holds for `click`.
    pub fn matches(&self, click: &Click) -> bool {
        self.predicates.iter().all(|p| p.matches(click))
    }
}
