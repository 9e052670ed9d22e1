//! Event types for search results.
//!
//! This module provides the flat, display-ready event record produced by the
//! normalizer:
//! - [`Event`]: one search result with every field coalesced to a default
//! - [`VenueDetails`]: the raw venue sub-record, retained as-is

use serde::{Deserialize, Serialize};

/// Display string used when an event has no venue name.
pub const VENUE_FALLBACK: &str = "Location not specified";

/// The raw venue sub-record of an event.
///
/// Kept alongside the composite `venue` display string for downstream use;
/// fields are passed through without further validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueDetails {
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
    /// Country code. Excluded from the display string.
    #[serde(default)]
    pub country: Option<String>,
    /// Latitude.
    #[serde(default)]
    pub lat: Option<f64>,
    /// Longitude.
    #[serde(default)]
    pub lng: Option<f64>,
}

impl VenueDetails {
    /// Returns true if no venue field is populated.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.address.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.country.is_none()
            && self.lat.is_none()
            && self.lng.is_none()
    }
}

/// A normalized event from the remote event source.
///
/// Every field is present: optional remote fields have been coalesced to
/// documented defaults by the normalizer. Events are immutable once built and
/// live only for the duration of one search/export cycle.
///
/// Serializes with camelCase field names, matching the wire shape consumed by
/// the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier within one search response.
    pub id: String,
    /// Display name of the event.
    pub title: String,
    /// Link to the original listing.
    pub event_url: String,
    /// Description, possibly containing markup.
    #[serde(default)]
    pub description: Option<String>,
    /// ISO-8601 timestamp, as returned by the remote source.
    #[serde(default)]
    pub date_time: Option<String>,
    /// Attendee count.
    #[serde(default)]
    pub going: u64,
    /// Whether the event takes place online.
    #[serde(default)]
    pub is_online: bool,
    /// Event type discriminator from the remote source.
    #[serde(default)]
    pub event_type: String,
    /// Human-readable venue string, or [`VENUE_FALLBACK`].
    pub venue: String,
    /// The raw venue sub-record.
    #[serde(default)]
    pub venue_details: VenueDetails,
    /// Hosting group identifier.
    #[serde(default)]
    pub group_id: String,
    /// Hosting group name.
    #[serde(default)]
    pub group_name: String,
    /// Organizer identifier.
    #[serde(default)]
    pub organizer_id: String,
    /// Organizer name.
    #[serde(default)]
    pub organizer_name: String,
}

impl Event {
    /// Creates a new Event with required fields and defaults everywhere else.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        event_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            event_url: event_url.into(),
            description: None,
            date_time: None,
            going: 0,
            is_online: false,
            event_type: String::new(),
            venue: VENUE_FALLBACK.to_string(),
            venue_details: VenueDetails::default(),
            group_id: String::new(),
            group_name: String::new(),
            organizer_id: String::new(),
            organizer_name: String::new(),
        }
    }

    /// Builder method to set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder method to set the event timestamp.
    pub fn with_date_time(mut self, date_time: impl Into<String>) -> Self {
        self.date_time = Some(date_time.into());
        self
    }

    /// Builder method to set the attendee count.
    pub fn with_going(mut self, going: u64) -> Self {
        self.going = going;
        self
    }

    /// Builder method to mark the event as online.
    pub fn with_online(mut self, is_online: bool) -> Self {
        self.is_online = is_online;
        self
    }

    /// Builder method to set the event type.
    pub fn with_event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = event_type.into();
        self
    }

    /// Builder method to set the venue display string.
    pub fn with_venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = venue.into();
        self
    }

    /// Builder method to set the raw venue details.
    pub fn with_venue_details(mut self, details: VenueDetails) -> Self {
        self.venue_details = details;
        self
    }

    /// Builder method to set the hosting group.
    pub fn with_group(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.group_id = id.into();
        self.group_name = name.into();
        self
    }

    /// Builder method to set the organizer.
    pub fn with_organizer(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.organizer_id = id.into();
        self.organizer_name = name.into();
        self
    }

    /// Returns the location to display: `"Online"` for online events,
    /// otherwise the venue string.
    pub fn location_display(&self) -> &str {
        if self.is_online { "Online" } else { &self.venue }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event() -> Event {
        Event::new(
            "evt-1",
            "Board Game Night",
            "https://www.meetup.com/games/events/1/",
        )
    }

    mod construction {
        use super::*;

        #[test]
        fn defaults_are_concrete() {
            let event = sample_event();
            assert_eq!(event.going, 0);
            assert!(!event.is_online);
            assert_eq!(event.event_type, "");
            assert_eq!(event.venue, VENUE_FALLBACK);
            assert!(event.venue_details.is_empty());
            assert_eq!(event.group_id, "");
            assert_eq!(event.organizer_id, "");
            assert!(event.description.is_none());
            assert!(event.date_time.is_none());
        }

        #[test]
        fn builder_pattern() {
            let event = sample_event()
                .with_description("Bring your own dice")
                .with_date_time("2025-03-15T18:00:00-04:00")
                .with_going(42)
                .with_online(true)
                .with_event_type("PHYSICAL")
                .with_venue("The Tabletop, 12 King St, Toronto, ON")
                .with_group("grp-9", "Toronto Gamers")
                .with_organizer("org-3", "Sam");

            assert_eq!(event.going, 42);
            assert!(event.is_online);
            assert_eq!(event.group_name, "Toronto Gamers");
            assert_eq!(event.organizer_id, "org-3");
            assert_eq!(
                event.date_time.as_deref(),
                Some("2025-03-15T18:00:00-04:00")
            );
        }
    }

    mod location_display {
        use super::*;

        #[test]
        fn online_wins_over_venue() {
            let event = sample_event().with_venue("Somewhere").with_online(true);
            assert_eq!(event.location_display(), "Online");
        }

        #[test]
        fn falls_back_to_venue() {
            let event = sample_event().with_venue("The Tabletop, Toronto");
            assert_eq!(event.location_display(), "The Tabletop, Toronto");
        }

        #[test]
        fn fallback_literal_when_unset() {
            assert_eq!(sample_event().location_display(), VENUE_FALLBACK);
        }
    }

    mod serde_shape {
        use super::*;

        #[test]
        fn camel_case_field_names() {
            let event = sample_event().with_going(7);
            let json = serde_json::to_value(&event).unwrap();
            assert_eq!(json["eventUrl"], "https://www.meetup.com/games/events/1/");
            assert_eq!(json["isOnline"], false);
            assert_eq!(json["going"], 7);
            assert_eq!(json["venueDetails"]["name"], serde_json::Value::Null);
        }

        #[test]
        fn roundtrip() {
            let event = sample_event()
                .with_description("desc")
                .with_venue_details(VenueDetails {
                    name: Some("The Tabletop".to_string()),
                    city: Some("Toronto".to_string()),
                    lat: Some(43.65),
                    ..VenueDetails::default()
                });
            let json = serde_json::to_string(&event).unwrap();
            let parsed: Event = serde_json::from_str(&json).unwrap();
            assert_eq!(event, parsed);
        }
    }
}
