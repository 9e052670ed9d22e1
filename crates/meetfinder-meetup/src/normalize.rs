//! Raw node to [`Event`] conversion.
//!
//! Maps one raw search node into the flat, display-ready event record. The
//! normalizer never fails: optional remote fields degrade to documented
//! defaults field-by-field, and nodes that are not of the event kind are
//! skipped.

use tracing::debug;

use meetfinder_core::{Event, VENUE_FALLBACK, VenueDetails};

use crate::raw::{RawVenue, SearchEdge, SearchNode};

/// Converts one search node into an [`Event`].
///
/// Returns `None` when the node's result is not of the event kind (the
/// search union's other variants carry no selected fields).
pub fn normalize_node(node: &SearchNode) -> Option<Event> {
    let Some(raw) = node.result.as_event() else {
        debug!(node_id = %node.id, "skipping non-event search result");
        return None;
    };

    let venue_details = raw
        .venue
        .as_ref()
        .map(venue_details)
        .unwrap_or_default();

    let group = raw.group.clone().unwrap_or_default();
    let host = raw.host.clone().unwrap_or_default();

    let mut event = Event::new(&node.id, &raw.title, &raw.event_url)
        .with_going(raw.going.unwrap_or(0))
        .with_online(raw.is_online.unwrap_or(false))
        .with_event_type(raw.event_type.clone().unwrap_or_default())
        .with_venue(venue_display(raw.venue.as_ref()))
        .with_venue_details(venue_details)
        .with_group(
            group.id.unwrap_or_default(),
            group.name.unwrap_or_default(),
        )
        .with_organizer(host.id.unwrap_or_default(), host.name.unwrap_or_default());

    if let Some(ref description) = raw.description {
        event = event.with_description(description);
    }
    if let Some(ref date_time) = raw.date_time {
        event = event.with_date_time(date_time);
    }

    Some(event)
}

/// Normalizes a page of edges, preserving the source's result order.
///
/// Non-event nodes are dropped; everything else maps to exactly one event.
pub fn normalize_edges(edges: &[SearchEdge]) -> Vec<Event> {
    edges
        .iter()
        .filter_map(|edge| normalize_node(&edge.node))
        .collect()
}

/// Builds the composite venue display string.
///
/// `name[, address][, city][, state]`; country stays out of the display
/// string. A venue without a name yields the fallback literal.
fn venue_display(venue: Option<&RawVenue>) -> String {
    let Some(venue) = venue else {
        return VENUE_FALLBACK.to_string();
    };
    let Some(ref name) = venue.name else {
        return VENUE_FALLBACK.to_string();
    };

    let mut display = name.clone();
    for part in [&venue.address, &venue.city, &venue.state] {
        if let Some(part) = part {
            display.push_str(", ");
            display.push_str(part);
        }
    }
    display
}

fn venue_details(venue: &RawVenue) -> VenueDetails {
    VenueDetails {
        name: venue.name.clone(),
        address: venue.address.clone(),
        city: venue.city.clone(),
        state: venue.state.clone(),
        country: venue.country.clone(),
        lat: venue.lat,
        lng: venue.lng,
    }
}
