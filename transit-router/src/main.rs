use std::io::{self, Write};
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use transit_router::requests::{RequestDocument, RequestError, StatHandler, load_document};
use transit_router::web::{AppState, ServerConfig, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the JSON answers.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let document = match &config.document {
        Some(path) => RequestDocument::from_path(path),
        None => RequestDocument::from_reader(io::stdin().lock()),
    };
    let document = match document {
        Ok(document) => document,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let (catalogue, router) = match load_document(&document) {
        Ok(loaded) => loaded,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = write_answers(&document, &catalogue, &router) {
        error!("{e}");
        return ExitCode::FAILURE;
    }

    let Some(addr) = config.listen else {
        return ExitCode::SUCCESS;
    };

    let app = create_router(AppState::new(catalogue, router));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("failed to bind {addr}: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("transit router listening on http://{addr}");
    info!("  GET  /health             - Health check");
    info!("  GET  /api/buses/{{name}}   - Bus statistics");
    info!("  GET  /api/stops/{{name}}   - Buses serving a stop");
    info!("  GET  /api/route?from&to  - Fastest route");
    info!("  POST /api/stat           - Batch of stat requests");

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Print the answers to the document's stat requests as a JSON array.
fn write_answers(
    document: &RequestDocument,
    catalogue: &transit_router::catalogue::TransportCatalogue,
    router: &transit_router::router::TransportRouter,
) -> Result<(), RequestError> {
    let answers = StatHandler::new(catalogue, router).answer_all(&document.stat_requests);
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &answers)?;
    writeln!(stdout)?;
    Ok(())
}
