//! Meetup GraphQL API client.
//!
//! A low-level HTTP client for the keyword-search endpoint: one POST carrying
//! the fixed GraphQL document plus a [`SearchFilter`], authorized with a
//! static bearer token. No pagination is followed; the returned edges are
//! whatever the first page holds.

use serde::Serialize;
use tracing::debug;

use crate::error::{SourceError, SourceResult};
use crate::raw::{SearchEdge, SearchResponse};

/// The Meetup GraphQL endpoint.
pub const MEETUP_GQL_URL: &str = "https://api.meetup.com/gql";

/// The keyword-search GraphQL document.
///
/// Only the event kind of the result union carries selected fields; other
/// kinds come back as empty objects.
const SEARCH_QUERY: &str = r#"
query($filter: SearchConnectionFilter!) {
  keywordSearch(filter: $filter) {
    count
    edges {
      cursor
      node {
        id
        result {
          ... on Event {
            title
            eventUrl
            description
            dateTime
            going
            venue {
              name
              address
              city
              state
              country
              lat
              lng
            }
            eventType
            isOnline
            group {
              id
              name
              urlname
            }
            host {
              id
              name
            }
          }
        }
      }
    }
  }
}"#;

/// The search filter sent as GraphQL variables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchFilter {
    /// Search keyword.
    pub query: String,
    /// Latitude of the search center.
    pub lat: f64,
    /// Longitude of the search center.
    pub lon: f64,
    /// Search radius in miles.
    pub radius: i64,
    /// Result-kind discriminator; always `"EVENTS"`.
    pub source: &'static str,
}

#[derive(Debug, Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: Variables<'a>,
}

#[derive(Debug, Serialize)]
struct Variables<'a> {
    filter: &'a SearchFilter,
}

/// Meetup API client.
#[derive(Debug, Clone)]
pub struct MeetupClient {
    http_client: reqwest::Client,
    token: String,
    endpoint: String,
}

impl MeetupClient {
    /// Creates a new client with the given bearer token.
    ///
    /// The HTTP client keeps its default timeout behavior; no explicit
    /// timeout is configured.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            token: token.into(),
            endpoint: MEETUP_GQL_URL.to_string(),
        }
    }

    /// Builder: override the endpoint URL.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Returns the endpoint URL this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Runs one keyword search and returns the first page of edges.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-success HTTP statuses, undecodable
    /// bodies, and responses without a `keywordSearch` field.
    pub async fn keyword_search(&self, filter: &SearchFilter) -> SourceResult<Vec<SearchEdge>> {
        let body = GraphqlRequest {
            query: SEARCH_QUERY,
            variables: Variables { filter },
        };

        let response = self
            .http_client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::status(status.as_u16()));
        }

        let parsed: SearchResponse = response.json().await?;
        let Some(keyword_search) = parsed.data.as_ref().and_then(|d| d.keyword_search.clone())
        else {
            return Err(SourceError::invalid_response(parsed.error_summary()));
        };

        debug!(
            count = keyword_search.count,
            returned = keyword_search.edges.len(),
            "keyword search complete"
        );
        Ok(keyword_search.edges)
    }
}
