//! Server entry point.
//!
//! # Responsibility
//! - Initialize logging, open storage, bind the listener, serve the routes.
//!
//! # Invariants
//! - Startup failures are logged and terminate the process with status 1.

use log::{error, info};
use pricebook_api::{app, AppState};
use pricebook_core::{default_log_level, init_logging, logging_status, ItemService};
use std::process::ExitCode;

const DB_PATH: &str = "items.db";
const LISTEN_ADDR: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(message) = init_logging(default_log_level()) {
        eprintln!("logging setup failed: {message}");
        return ExitCode::FAILURE;
    }

    let service = match ItemService::open(DB_PATH) {
        Ok(service) => service,
        Err(err) => {
            error!(
                "event=server_start module=api status=error error_code=db_open_failed db_path={DB_PATH} error={err}"
            );
            return ExitCode::FAILURE;
        }
    };

    let listener = match tokio::net::TcpListener::bind(LISTEN_ADDR).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(
                "event=server_start module=api status=error error_code=bind_failed addr={LISTEN_ADDR} error={err}"
            );
            return ExitCode::FAILURE;
        }
    };

    let level = logging_status().unwrap_or("off");
    info!(
        "event=server_start module=api status=ok addr={LISTEN_ADDR} db_path={DB_PATH} level={level}"
    );

    if let Err(err) = axum::serve(listener, app(AppState::new(service))).await {
        error!("event=server_error module=api status=error error={err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
