//! Hotel Search Main Entry Point
//!
//! Runs one search session over the configured catalog: the command-line
//! arguments form the query, `SEARCH_FILTERS` supplies the filters, and the
//! ranked results are printed as JSON with favorite status applied.

use dotenv::dotenv;
use hotel_search::catalog::{sorted, SortState};
use hotel_search::{AppError, Dependencies, SearchMode};
use hotel_search_shared::HotelRecord;
use serde::Serialize;
use std::env;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging.
fn init_tracing() -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("hotel_search=info,hotel_search_repository=info"));

    let json_logs = env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    // Logs go to stderr so stdout carries only the results.
    if json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .map_err(|e| AppError::config(format!("Failed to initialize tracing: {}", e)))?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .map_err(|e| AppError::config(format!("Failed to initialize tracing: {}", e)))?;
    }

    info!(
        service_name = "hotel-search",
        service_version = env!("CARGO_PKG_VERSION"),
        json = json_logs,
        "Tracing initialized"
    );

    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionOutput<'a> {
    query: &'a str,
    mode: SearchMode,
    is_searching: bool,
    has_active_filters: bool,
    results: Vec<HotelRecord>,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load environment variables from .env file
    dotenv().ok();

    init_tracing()?;

    info!("Starting hotel search session");

    let mut deps = match Dependencies::new().await {
        Ok(deps) => deps,
        Err(e) => {
            error!(error = %e, "Failed to initialize dependencies");
            return Err(e);
        }
    };

    let query = env::args().skip(1).collect::<Vec<_>>().join(" ");
    deps.engine.set_query(query.as_str());

    let results = if deps.engine.mode() == SearchMode::Idle {
        // Nothing to search for: fall back to the full listing, as the browse screen does.
        info!("No query or filters, listing the catalog");
        deps.favorites
            .decorate(&sorted(deps.catalog.hotels(), SortState::default()))
    } else {
        if deps.engine.shows_empty_state() {
            info!(query = %query.trim(), "No hotels found");
        }
        deps.favorites.decorate(deps.engine.results())
    };

    let output = SessionOutput {
        query: &query,
        mode: deps.engine.mode(),
        is_searching: deps.engine.is_searching(),
        has_active_filters: deps.engine.has_active_filters(),
        results,
    };

    let rendered = serde_json::to_string_pretty(&output)
        .map_err(|e| AppError::output(format!("Failed to encode results: {}", e)))?;
    println!("{}", rendered);

    Ok(())
}
