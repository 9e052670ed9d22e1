//! Search parameters and the fail-soft search service.
//!
//! [`SearchParams`] carries the caller's raw inputs; [`SearchParams::resolve`]
//! applies the documented defaults. [`SearchService`] issues exactly one
//! request per search and recovers from every failure by returning an empty
//! sequence — nothing propagates to the caller.

use serde::{Deserialize, Serialize};
use tracing::warn;

use meetfinder_core::Event;

use crate::client::{MeetupClient, SearchFilter};
use crate::normalize::normalize_edges;

/// Default search keyword.
pub const DEFAULT_QUERY: &str = "party";
/// Default latitude of the search center.
pub const DEFAULT_LAT: f64 = 43.8;
/// Default longitude of the search center.
pub const DEFAULT_LON: f64 = -79.4;
/// Default search radius in miles.
pub const DEFAULT_RADIUS_MILES: i64 = 100;

/// Search parameters as supplied by the caller, before defaulting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Search keyword.
    #[serde(default)]
    pub query: Option<String>,
    /// Latitude of the search center.
    #[serde(default)]
    pub lat: Option<f64>,
    /// Longitude of the search center.
    #[serde(default)]
    pub lon: Option<f64>,
    /// Search radius in miles.
    #[serde(default)]
    pub radius: Option<i64>,
}

impl SearchParams {
    /// Parses raw string parameters, as they arrive from a query string.
    ///
    /// Non-numeric values parse to `None` and later fall back to the
    /// defaults, never to zero. A fractional radius is coerced to an integer
    /// by truncation.
    pub fn from_raw(
        query: Option<&str>,
        lat: Option<&str>,
        lon: Option<&str>,
        radius: Option<&str>,
    ) -> Self {
        Self {
            query: query.map(str::to_string),
            lat: lat.and_then(|s| s.trim().parse::<f64>().ok()),
            lon: lon.and_then(|s| s.trim().parse::<f64>().ok()),
            radius: radius.and_then(|s| s.trim().parse::<f64>().ok().map(|r| r as i64)),
        }
    }

    /// Resolves the parameters into a concrete [`SearchFilter`].
    ///
    /// Absent values take the documented defaults; an empty query string
    /// also falls back to [`DEFAULT_QUERY`].
    pub fn resolve(&self) -> SearchFilter {
        let query = match self.query.as_deref() {
            Some(q) if !q.is_empty() => q.to_string(),
            _ => DEFAULT_QUERY.to_string(),
        };
        SearchFilter {
            query,
            lat: self.lat.unwrap_or(DEFAULT_LAT),
            lon: self.lon.unwrap_or(DEFAULT_LON),
            radius: self.radius.unwrap_or(DEFAULT_RADIUS_MILES),
            source: "EVENTS",
        }
    }
}

/// Orchestrates one search against the remote event source.
#[derive(Debug, Clone)]
pub struct SearchService {
    client: MeetupClient,
}

impl SearchService {
    /// Creates a search service on top of the given client.
    pub fn new(client: MeetupClient) -> Self {
        Self { client }
    }

    /// Runs one search and returns the normalized events in source order.
    ///
    /// Fail-soft: any transport error, bad status, or malformed response is
    /// logged and yields an empty sequence. No partial results are
    /// synthesized.
    pub async fn search(&self, params: &SearchParams) -> Vec<Event> {
        let filter = params.resolve();
        match self.client.keyword_search(&filter).await {
            Ok(edges) => normalize_edges(&edges),
            Err(e) => {
                warn!(query = %filter.query, error = %e, "event search failed");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod defaults {
        use super::*;

        #[test]
        fn all_absent_uses_documented_defaults() {
            let filter = SearchParams::default().resolve();
            assert_eq!(filter.query, "party");
            assert_eq!(filter.lat, 43.8);
            assert_eq!(filter.lon, -79.4);
            assert_eq!(filter.radius, 100);
            assert_eq!(filter.source, "EVENTS");
        }

        #[test]
        fn empty_query_falls_back() {
            let params = SearchParams {
                query: Some(String::new()),
                ..SearchParams::default()
            };
            assert_eq!(params.resolve().query, "party");
        }

        #[test]
        fn supplied_values_are_kept() {
            let params = SearchParams {
                query: Some("hiking".to_string()),
                lat: Some(51.5),
                lon: Some(-0.1),
                radius: Some(25),
            };
            let filter = params.resolve();
            assert_eq!(filter.query, "hiking");
            assert_eq!(filter.lat, 51.5);
            assert_eq!(filter.lon, -0.1);
            assert_eq!(filter.radius, 25);
        }

        #[test]
        fn zero_coordinates_are_valid() {
            let params = SearchParams {
                lat: Some(0.0),
                lon: Some(0.0),
                ..SearchParams::default()
            };
            let filter = params.resolve();
            assert_eq!(filter.lat, 0.0);
            assert_eq!(filter.lon, 0.0);
        }
    }

    mod raw_parsing {
        use super::*;

        #[test]
        fn parses_well_formed_strings() {
            let params =
                SearchParams::from_raw(Some("salsa"), Some("43.65"), Some("-79.38"), Some("50"));
            assert_eq!(params.query.as_deref(), Some("salsa"));
            assert_eq!(params.lat, Some(43.65));
            assert_eq!(params.lon, Some(-79.38));
            assert_eq!(params.radius, Some(50));
        }

        #[test]
        fn invalid_numbers_become_absent() {
            let params =
                SearchParams::from_raw(Some("salsa"), Some("north"), Some(""), Some("wide"));
            assert_eq!(params.lat, None);
            assert_eq!(params.lon, None);
            assert_eq!(params.radius, None);
            // ...and absent values resolve to the defaults, not zero.
            let filter = params.resolve();
            assert_eq!(filter.lat, 43.8);
            assert_eq!(filter.lon, -79.4);
            assert_eq!(filter.radius, 100);
        }

        #[test]
        fn fractional_radius_truncates() {
            let params = SearchParams::from_raw(None, None, None, Some("100.7"));
            assert_eq!(params.radius, Some(100));
        }

        #[test]
        fn all_none_stays_none() {
            let params = SearchParams::from_raw(None, None, None, None);
            assert_eq!(params, SearchParams::default());
        }
    }

    mod fail_soft {
        use super::*;

        /// Returns an endpoint URL on a port that nothing listens on.
        fn dead_endpoint() -> String {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            let port = listener.local_addr().unwrap().port();
            drop(listener);
            format!("http://127.0.0.1:{port}/gql")
        }

        #[tokio::test]
        async fn transport_failure_yields_empty() {
            let client = MeetupClient::new("test-token").with_endpoint(dead_endpoint());
            let service = SearchService::new(client);
            let events = service.search(&SearchParams::default()).await;
            assert!(events.is_empty());
        }
    }
}
