//! TCP listener for the search/render/export protocol.
//!
//! Requests and responses are newline-delimited JSON. Each connection gets
//! its own task and its own [`SessionState`]; a connection semaphore caps
//! concurrency.

use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Semaphore;
use tracing::{debug, error, info, warn};

use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::handler::{RequestHandler, SessionState};
use crate::protocol::{Request, Response};

/// TCP server for handling client connections.
pub struct EventServer {
    /// Server configuration.
    config: ServerConfig,
    /// TCP listener.
    listener: TcpListener,
    /// Semaphore for limiting concurrent connections.
    connection_semaphore: Arc<Semaphore>,
}

impl EventServer {
    /// Binds the listener per the configuration.
    pub async fn bind(config: ServerConfig) -> ServerResult<Self> {
        let listener = TcpListener::bind(config.listen_addr()).await?;
        info!(addr = %listener.local_addr()?, "Server listening");

        let connection_semaphore = Arc::new(Semaphore::new(config.max_connections));

        Ok(Self {
            config,
            listener,
            connection_semaphore,
        })
    }

    /// Returns the bound local address.
    pub fn local_addr(&self) -> ServerResult<std::net::SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Runs the accept loop, spawning one task per connection.
    ///
    /// This method runs indefinitely until accepting fails fatally.
    pub async fn run(&self, handler: Arc<RequestHandler>) -> ServerResult<()> {
        loop {
            let permit = self
                .connection_semaphore
                .clone()
                .acquire_owned()
                .await
                .expect("semaphore should not be closed");

            match self.listener.accept().await {
                Ok((stream, peer)) => {
                    debug!(%peer, "Accepted new connection");
                    let handler = Arc::clone(&handler);
                    let timeout = self.config.connection_timeout;
                    tokio::spawn(async move {
                        handle_connection(stream, handler, timeout).await;
                        drop(permit);
                    });
                }
                Err(e) => {
                    error!(error = %e, "Failed to accept connection");
                    // Continue accepting despite errors
                }
            }
        }
    }
}

/// Serves one connection until EOF, idle timeout, or a write failure.
///
/// Malformed request lines answer with an error response and keep the
/// connection open.
async fn handle_connection(stream: TcpStream, handler: Arc<RequestHandler>, timeout: Duration) {
    let mut session = SessionState::new();
    let (reader, mut writer) = stream.into_split();
    let mut lines = BufReader::new(reader).lines();

    loop {
        let line = match tokio::time::timeout(timeout, lines.next_line()).await {
            Ok(Ok(Some(line))) => line,
            Ok(Ok(None)) => break, // clean EOF
            Ok(Err(e)) => {
                warn!(error = %e, "Connection read failed");
                break;
            }
            Err(_) => {
                debug!("Connection idle timeout");
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Request>(&line) {
            Ok(request) => handler.handle(request, &mut session).await,
            Err(e) => Response::error(format!("invalid request: {e}")),
        };

        let mut payload = match serde_json::to_vec(&response) {
            Ok(payload) => payload,
            Err(e) => {
                error!(error = %e, "Failed to encode response");
                break;
            }
        };
        payload.push(b'\n');

        if let Err(e) = writer.write_all(&payload).await {
            debug!(error = %e, "Connection write failed");
            break;
        }
    }
}
