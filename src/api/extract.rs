//! Request extractors.

use std::collections::HashSet;
use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum::http::{Uri, request::Parts};
use serde::de::DeserializeOwned;

/// Query string extractor that never rejects.
///
/// A repeated key keeps its first value, so `?page=1&page=2` reads as
/// `?page=1`. A query that still fails to deserialize yields `T::default()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for LenientQuery<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(parse_query(parts.uri.query())))
    }
}

/// Deserializes a raw query string with first-value-wins semantics.
pub fn parse_query<T: DeserializeOwned + Default>(query: Option<&str>) -> T {
    let Some(query) = query else {
        return T::default();
    };

    let uri = format!("/?{}", first_values(query)).parse::<Uri>();
    match uri.ok().map(|uri| Query::<T>::try_from_uri(&uri)) {
        Some(Ok(Query(params))) => params,
        _ => {
            tracing::debug!(query, "Unparsable query string, using defaults");
            T::default()
        }
    }
}

fn first_values(query: &str) -> String {
    let mut seen = HashSet::new();
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| {
            let key = pair.split_once('=').map_or(*pair, |(key, _)| key);
            seen.insert(key)
        })
        .collect::<Vec<_>>()
        .join("&")
}
