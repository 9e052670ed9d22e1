//! Server: protocol types, session state, dispatch and TCP listener.
//!
//! Exposes the search/render/export boundary over newline-delimited JSON:
//! a search answers `{success: true, events: [...]}`, failures answer
//! `{success: false, message}`. Each connection holds its own session state
//! carrying the most recent result set for render and export.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use meetfinder_meetup::{MeetupClient, SearchService};
//! use meetfinder_server::{EventServer, RequestHandler, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::from_env()?;
//!     let client = MeetupClient::new(config.token.clone());
//!     let handler = Arc::new(RequestHandler::new(SearchService::new(client)));
//!     let server = EventServer::bind(config).await?;
//!     server.run(handler).await?;
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod handler;
mod protocol;
mod socket;

pub use config::{ServerConfig, DEFAULT_PORT};
pub use error::{ServerError, ServerResult};
pub use handler::{RequestHandler, SessionState};
pub use protocol::{Request, Response, ViewKind};
pub use socket::EventServer;
