//! Request dispatch and session state.
//!
//! [`SessionState`] carries the most recent result set between the search,
//! render and export operations of one connection — deliberately explicit
//! state rather than a process-wide global, so a second session never sees
//! another session's results. Each new search overwrites it
//! (last-response-wins).

use chrono::Local;
use tracing::{debug, info};

use meetfinder_core::{card_view, export_csv, export_filename, table_view, Event};
use meetfinder_meetup::{SearchParams, SearchService};

use crate::protocol::{Request, Response, ViewKind};

/// Per-session state: the most recent search results.
#[derive(Debug, Default)]
pub struct SessionState {
    last_results: Vec<Event>,
}

impl SessionState {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the result set with a fresh one.
    pub fn set_results(&mut self, events: Vec<Event>) {
        self.last_results = events;
    }

    /// Returns the current result set.
    pub fn results(&self) -> &[Event] {
        &self.last_results
    }
}

/// Routes requests to the search service, renderer and exporter.
#[derive(Debug)]
pub struct RequestHandler {
    service: SearchService,
}

impl RequestHandler {
    /// Creates a handler on top of the given search service.
    pub fn new(service: SearchService) -> Self {
        Self { service }
    }

    /// Handles one request against the given session.
    ///
    /// Never fails: every outcome, including the export-with-no-data user
    /// error, is expressed as a [`Response`].
    pub async fn handle(&self, request: Request, session: &mut SessionState) -> Response {
        match request {
            Request::Search {
                query,
                lat,
                lon,
                radius,
            } => {
                let params = SearchParams::from_raw(
                    query.as_deref(),
                    lat.as_deref(),
                    lon.as_deref(),
                    radius.as_deref(),
                );
                let events = self.service.search(&params).await;
                info!(count = events.len(), "search complete");
                session.set_results(events.clone());
                Response::events(events)
            }

            Request::Render { view } => {
                debug!(?view, count = session.results().len(), "rendering result set");
                match view {
                    ViewKind::Cards => Response::cards(card_view(session.results())),
                    ViewKind::Table => Response::table(table_view(session.results())),
                }
            }

            Request::Export => match export_csv(session.results()) {
                Ok(content) => {
                    let filename = export_filename(Local::now().date_naive());
                    info!(%filename, rows = session.results().len(), "exported result set");
                    Response::export(filename, content)
                }
                Err(e) => Response::error(e.to_string()),
            },
        }
    }
}
