//! Request and response types for the search/render/export boundary.
//!
//! One JSON object per line in each direction. A search answers with
//! `{success: true, events: [...]}`; failures answer with
//! `{success: false, message}` without closing the connection.

use serde::{Deserialize, Serialize};

use meetfinder_core::{Event, EventCard, EventRow};

/// Which rendering of the current result set to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    /// Card collection.
    Cards,
    /// Tabular rows.
    Table,
}

/// Requests accepted by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    /// Run a search. Parameters arrive as raw strings, exactly as a query
    /// string would carry them; absent or non-numeric values take the
    /// documented defaults.
    Search {
        /// Search keyword.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        query: Option<String>,
        /// Latitude of the search center.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        lat: Option<String>,
        /// Longitude of the search center.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        lon: Option<String>,
        /// Search radius in miles.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        radius: Option<String>,
    },

    /// Render the session's most recent result set.
    Render {
        /// Which view to produce.
        view: ViewKind,
    },

    /// Export the session's most recent result set as CSV.
    Export,
}

impl Request {
    /// Creates a Search request with no parameters.
    pub fn search() -> Self {
        Self::Search {
            query: None,
            lat: None,
            lon: None,
            radius: None,
        }
    }
}

/// Responses produced by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    /// Search result: the normalized events, in source order.
    Events {
        /// Always true for this variant.
        success: bool,
        /// The normalized events.
        events: Vec<Event>,
    },

    /// Card view of the current result set.
    Cards {
        /// Always true for this variant.
        success: bool,
        /// One card per event.
        cards: Vec<EventCard>,
    },

    /// Table view of the current result set.
    Table {
        /// Always true for this variant.
        success: bool,
        /// One row per event.
        rows: Vec<EventRow>,
    },

    /// A CSV export ready for download.
    Export {
        /// Always true for this variant.
        success: bool,
        /// Suggested download filename.
        filename: String,
        /// The CSV document.
        content: String,
    },

    /// A user-visible error.
    Error {
        /// Always false for this variant.
        success: bool,
        /// Error message.
        message: String,
    },
}

impl Response {
    /// Creates a search response.
    pub fn events(events: Vec<Event>) -> Self {
        Self::Events {
            success: true,
            events,
        }
    }

    /// Creates a card-view response.
    pub fn cards(cards: Vec<EventCard>) -> Self {
        Self::Cards {
            success: true,
            cards,
        }
    }

    /// Creates a table-view response.
    pub fn table(rows: Vec<EventRow>) -> Self {
        Self::Table {
            success: true,
            rows,
        }
    }

    /// Creates an export response.
    pub fn export(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Export {
            success: true,
            filename: filename.into(),
            content: content.into(),
        }
    }

    /// Creates an error response.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            success: false,
            message: message.into(),
        }
    }
}
