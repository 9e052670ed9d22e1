//! CSV export of an event sequence.
//!
//! Produces a CSV document with a fixed nine-column schema consumed by a
//! downstream import template. Column order and quoting rules are part of the
//! contract; see [`CSV_HEADER`].

use chrono::NaiveDate;
use thiserror::Error;

use crate::event::Event;
use crate::links::extract_meeting_link;
use crate::text::strip_tags;

/// The fixed CSV header row.
pub const CSV_HEADER: &str =
    "name,description,eventDate,location,isVirtual,meetingLink,hobbyId,groupId,organizerId";

/// Errors that can occur during CSV export.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    /// Export was requested with an empty result set.
    #[error("No events to export")]
    NoEvents,
}

/// Serializes events into a CSV document.
///
/// One row per event, in input order, prefixed with [`CSV_HEADER`]. Rows are
/// newline-joined with no trailing newline.
///
/// # Errors
///
/// Returns [`ExportError::NoEvents`] when `events` is empty; an empty export
/// is a user error, not an empty file.
pub fn export_csv(events: &[Event]) -> Result<String, ExportError> {
    if events.is_empty() {
        return Err(ExportError::NoEvents);
    }

    let mut lines = Vec::with_capacity(events.len() + 1);
    lines.push(CSV_HEADER.to_string());
    lines.extend(events.iter().map(csv_row));
    Ok(lines.join("\n"))
}

/// Returns the download filename for an export performed on `date`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("meetup-events-{}.csv", date.format("%Y-%m-%d"))
}

fn csv_row(event: &Event) -> String {
    let description = event
        .description
        .as_deref()
        .map(|raw| strip_tags(raw))
        .unwrap_or_default();

    let location = if event.is_online {
        "Online".to_string()
    } else {
        event.venue.clone()
    };

    // The link is mined from the raw (unstripped) description, and only for
    // online events.
    let meeting_link = if event.is_online {
        event
            .description
            .as_deref()
            .and_then(extract_meeting_link)
            .unwrap_or_default()
    } else {
        String::new()
    };

    let columns = [
        quote(&event.title),
        quote(&description),
        event.date_time.clone().unwrap_or_default(),
        quote(&location),
        event.is_online.to_string(),
        quote(&meeting_link),
        String::new(), // hobbyId, reserved for the downstream template
        quote_if_nonempty(&event.group_id),
        quote_if_nonempty(&event.organizer_id),
    ];

    columns.join(",")
}

/// Wraps in double quotes, doubling embedded double quotes.
fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn quote_if_nonempty(value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        quote(value)
    }
}
