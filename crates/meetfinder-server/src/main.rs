//! meetfinder server entry point.

use std::process::ExitCode;
use std::sync::Arc;

use meetfinder_core::{init_tracing, TracingConfig};
use meetfinder_meetup::{MeetupClient, SearchService};
use meetfinder_server::{EventServer, RequestHandler, ServerConfig, ServerResult};

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = init_tracing(TracingConfig::default()) {
        eprintln!("error: {}", e);
        return ExitCode::FAILURE;
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> ServerResult<()> {
    let config = ServerConfig::from_env()?;
    let client = MeetupClient::new(config.token.clone());
    let handler = Arc::new(RequestHandler::new(SearchService::new(client)));

    let server = EventServer::bind(config).await?;
    server.run(handler).await
}
