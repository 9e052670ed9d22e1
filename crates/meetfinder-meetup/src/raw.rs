//! Raw wire types for the Meetup GraphQL keyword search.
//!
//! These mirror the response shape
//! `{data: {keywordSearch: {count, edges: [{cursor, node: {id, result}}]}}}`
//! as it comes off the wire, before normalization. The `result` field is a
//! union over search-result kinds; only the event kind carries data through
//! the inline fragment, every other kind arrives as an empty object.

use serde::Deserialize;

/// Top-level GraphQL response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Response data; absent when the query failed entirely.
    #[serde(default)]
    pub data: Option<SearchData>,
    /// GraphQL-level errors reported alongside (or instead of) data.
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

impl SearchResponse {
    /// Joins GraphQL error messages into one line for logging.
    pub fn error_summary(&self) -> String {
        if self.errors.is_empty() {
            "no keywordSearch field in response".to_string()
        } else {
            self.errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ")
        }
    }
}

/// One GraphQL error entry.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlError {
    /// Human-readable error message.
    #[serde(default)]
    pub message: String,
}

/// The `data` object of a search response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchData {
    /// The keyword-search connection; absent on malformed responses.
    #[serde(rename = "keywordSearch", default)]
    pub keyword_search: Option<KeywordSearch>,
}

/// The keyword-search connection: total count plus the first page of edges.
#[derive(Debug, Clone, Deserialize)]
pub struct KeywordSearch {
    /// Total number of results the remote source reports.
    #[serde(default)]
    pub count: u64,
    /// The first page of result edges. No further pages are fetched.
    #[serde(default)]
    pub edges: Vec<SearchEdge>,
}

/// One edge of the paginated result list.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchEdge {
    /// Pagination cursor. Unused: only the first page is consumed.
    #[serde(default)]
    pub cursor: Option<String>,
    /// The result node.
    pub node: SearchNode,
}

/// One search-result node.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchNode {
    /// Unique node identifier within the response.
    pub id: String,
    /// The union-typed result payload.
    #[serde(default)]
    pub result: RawResult,
}

/// The union-typed result payload of a node.
///
/// The search is polymorphic over result kinds; the GraphQL query only
/// selects fields on the event kind, so anything else deserializes into the
/// `Other` catch-all and is skipped during normalization.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawResult {
    /// An event result with its selected fields.
    Event(RawEventNode),
    /// Any other result kind (arrives as an empty or unknown object).
    Other(serde_json::Value),
}

impl Default for RawResult {
    fn default() -> Self {
        Self::Other(serde_json::Value::Null)
    }
}

impl RawResult {
    /// Returns the event payload, if this result is of the event kind.
    pub fn as_event(&self) -> Option<&RawEventNode> {
        match self {
            Self::Event(event) => Some(event),
            Self::Other(_) => None,
        }
    }
}

/// The selected fields of an event result.
///
/// `title` and `eventUrl` are the discriminating fields: a payload without
/// them is not an event result.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEventNode {
    /// Event title.
    pub title: String,
    /// Link to the original listing.
    pub event_url: String,
    /// Description, possibly with markup.
    #[serde(default)]
    pub description: Option<String>,
    /// ISO-8601 start timestamp.
    #[serde(default)]
    pub date_time: Option<String>,
    /// Attendee count.
    #[serde(default)]
    pub going: Option<u64>,
    /// Venue sub-object.
    #[serde(default)]
    pub venue: Option<RawVenue>,
    /// Event type discriminator.
    #[serde(default)]
    pub event_type: Option<String>,
    /// Whether the event is online.
    #[serde(default)]
    pub is_online: Option<bool>,
    /// Hosting group sub-object.
    #[serde(default)]
    pub group: Option<RawGroup>,
    /// Host sub-object.
    #[serde(default)]
    pub host: Option<RawHost>,
}

/// The venue sub-object of an event result.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVenue {
    /// Venue name.
    #[serde(default)]
    pub name: Option<String>,
    /// Street address.
    #[serde(default)]
    pub address: Option<String>,
    /// City.
    #[serde(default)]
    pub city: Option<String>,
    /// State or province.
    #[serde(default)]
    pub state: Option<String>,
    /// Country code.
    #[serde(default)]
    pub country: Option<String>,
    /// Latitude.
    #[serde(default)]
    pub lat: Option<f64>,
    /// Longitude.
    #[serde(default)]
    pub lng: Option<f64>,
}

/// The group sub-object of an event result.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGroup {
    /// Group identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Group display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Group URL name.
    #[serde(default)]
    pub urlname: Option<String>,
}

/// The host sub-object of an event result.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawHost {
    /// Host identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Host display name.
    #[serde(default)]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    mod result_union {
        use super::*;

        #[test]
        fn event_variant_requires_discriminating_fields() {
            let json = r#"{"title": "Picnic", "eventUrl": "https://example.com/e/1"}"#;
            let result: RawResult = serde_json::from_str(json).unwrap();
            assert!(result.as_event().is_some());
        }

        #[test]
        fn empty_object_is_other() {
            let result: RawResult = serde_json::from_str("{}").unwrap();
            assert!(result.as_event().is_none());
        }

        #[test]
        fn unknown_kind_is_other() {
            let json = r#"{"groupAnalytics": {"totalMembers": 9}}"#;
            let result: RawResult = serde_json::from_str(json).unwrap();
            assert!(result.as_event().is_none());
        }
    }

    mod response_shape {
        use super::*;

        const FULL_RESPONSE: &str = r#"{
            "data": {
                "keywordSearch": {
                    "count": 2,
                    "edges": [
                        {
                            "cursor": "c1",
                            "node": {
                                "id": "n1",
                                "result": {
                                    "title": "Rust Meetup",
                                    "eventUrl": "https://www.meetup.com/rust/events/1/",
                                    "description": "<p>Hello</p>",
                                    "dateTime": "2025-03-15T18:00:00-04:00",
                                    "going": 25,
                                    "venue": {
                                        "name": "The Loft",
                                        "city": "Toronto",
                                        "state": "ON",
                                        "country": "ca",
                                        "lat": 43.65,
                                        "lng": -79.38
                                    },
                                    "eventType": "PHYSICAL",
                                    "isOnline": false,
                                    "group": {"id": "g1", "name": "Toronto Rust", "urlname": "toronto-rust"},
                                    "host": {"id": "h1", "name": "Sam"}
                                }
                            }
                        },
                        {
                            "cursor": "c2",
                            "node": {"id": "n2", "result": {}}
                        }
                    ]
                }
            }
        }"#;

        #[test]
        fn parses_full_response() {
            let response: SearchResponse = serde_json::from_str(FULL_RESPONSE).unwrap();
            let search = response.data.unwrap().keyword_search.unwrap();
            assert_eq!(search.count, 2);
            assert_eq!(search.edges.len(), 2);

            let event = search.edges[0].node.result.as_event().unwrap();
            assert_eq!(event.title, "Rust Meetup");
            assert_eq!(event.going, Some(25));
            assert_eq!(event.venue.as_ref().unwrap().city.as_deref(), Some("Toronto"));

            assert!(search.edges[1].node.result.as_event().is_none());
        }

        #[test]
        fn missing_data_with_errors() {
            let json = r#"{"errors": [{"message": "token invalid"}, {"message": "nope"}]}"#;
            let response: SearchResponse = serde_json::from_str(json).unwrap();
            assert!(response.data.is_none());
            assert_eq!(response.error_summary(), "token invalid; nope");
        }

        #[test]
        fn empty_body_summary() {
            let response: SearchResponse = serde_json::from_str("{}").unwrap();
            assert!(response.data.is_none());
            assert_eq!(
                response.error_summary(),
                "no keywordSearch field in response"
            );
        }
    }
}
