//! Presentation renderer: display-ready views of an event sequence.
//!
//! Two independent renderings of the same ordered event list:
//! - [`card_view`]: one [`EventCard`] per event, full stripped description
//! - [`table_view`]: one [`EventRow`] per event, description truncated
//!
//! Both are pure formatting functions; they never touch the network and never
//! mutate their input.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::text::{strip_tags, truncate};

/// Maximum description length in the table view, in characters.
pub const TABLE_DESCRIPTION_MAX: usize = 100;

/// Display string for events without a timestamp.
pub const DATE_FALLBACK: &str = "Date not specified";

/// Display string for events without a description.
pub const DESCRIPTION_FALLBACK: &str = "No description provided";

/// A display-ready card for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCard {
    /// Event title.
    pub title: String,
    /// Attendee count.
    pub going: u64,
    /// Markup-stripped description.
    pub description: String,
    /// Formatted start date.
    pub date: String,
    /// Location line: `"Online"`, the venue string, or the venue fallback.
    pub location: String,
    /// Link to the original listing.
    pub event_url: String,
}

/// A display-ready table row for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRow {
    /// Event title.
    pub title: String,
    /// Markup-stripped description, truncated to [`TABLE_DESCRIPTION_MAX`].
    pub description: String,
    /// Formatted start date.
    pub date: String,
    /// Location line.
    pub location: String,
    /// Attendee count.
    pub going: u64,
    /// Link to the original listing.
    pub event_url: String,
}

/// Renders the card view: one card per event, in input order.
pub fn card_view(events: &[Event]) -> Vec<EventCard> {
    events
        .iter()
        .map(|event| EventCard {
            title: event.title.clone(),
            going: event.going,
            description: clean_description(event.description.as_deref()),
            date: format_event_date(event.date_time.as_deref()),
            location: event.location_display().to_string(),
            event_url: event.event_url.clone(),
        })
        .collect()
}

/// Renders the table view: one row per event, in input order.
pub fn table_view(events: &[Event]) -> Vec<EventRow> {
    events
        .iter()
        .map(|event| EventRow {
            title: event.title.clone(),
            description: match event.description.as_deref() {
                Some(raw) if !raw.is_empty() => {
                    truncate(&strip_tags(raw), TABLE_DESCRIPTION_MAX)
                }
                _ => DESCRIPTION_FALLBACK.to_string(),
            },
            date: format_event_date(event.date_time.as_deref()),
            location: event.location_display().to_string(),
            going: event.going,
            event_url: event.event_url.clone(),
        })
        .collect()
}

fn clean_description(description: Option<&str>) -> String {
    match description {
        Some(raw) if !raw.is_empty() => strip_tags(raw),
        _ => DESCRIPTION_FALLBACK.to_string(),
    }
}

/// Formats an event timestamp as `Sat, Mar 15, 2025, 6:00 PM`.
///
/// Absent or unparseable timestamps render as [`DATE_FALLBACK`]. Timestamps
/// carrying a UTC offset are shown in the event's own wall-clock time.
pub fn format_event_date(date_time: Option<&str>) -> String {
    let Some(raw) = date_time else {
        return DATE_FALLBACK.to_string();
    };
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%a, %b %-d, %Y, %-I:%M %p").to_string(),
        None => DATE_FALLBACK.to_string(),
    }
}

/// Parses the timestamp shapes the remote source emits.
///
/// RFC 3339 first, then the minute-precision offset form, then naive
/// fallbacks. The offset is dropped after parsing so the wall-clock time is
/// preserved.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M%:z") {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M").ok()
}
