//! Remote event source: Meetup GraphQL client, wire types, normalizer and
//! the fail-soft search service.

pub mod client;
pub mod error;
pub mod normalize;
pub mod raw;
pub mod search;

pub use client::{MeetupClient, SearchFilter, MEETUP_GQL_URL};
pub use error::{SourceError, SourceResult};
pub use normalize::{normalize_edges, normalize_node};
pub use raw::{KeywordSearch, RawEventNode, RawResult, SearchEdge, SearchNode, SearchResponse};
pub use search::{
    SearchParams, SearchService, DEFAULT_LAT, DEFAULT_LON, DEFAULT_QUERY, DEFAULT_RADIUS_MILES,
};
