//! Core types: events, text utilities, meeting links, rendering, CSV export

pub mod event;
pub mod export;
pub mod links;
pub mod render;
pub mod text;
pub mod tracing;

pub use event::{Event, VenueDetails, VENUE_FALLBACK};
pub use export::{export_csv, export_filename, ExportError, CSV_HEADER};
pub use links::extract_meeting_link;
pub use render::{card_view, format_event_date, table_view, EventCard, EventRow};
pub use text::{strip_tags, truncate};
pub use crate::tracing::{init_tracing, TracingConfig, TracingError, TracingOutputFormat};
