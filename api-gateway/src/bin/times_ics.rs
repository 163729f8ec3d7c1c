//! Prayer Times Calendar Lambda - Handles the /times-ics endpoint.
//!
//! Converts the upstream prayer-time feed for one city into an iCalendar
//! document that calendar clients can subscribe to.
//!
//! Endpoint:
//! - GET /times-ics?cityID=<id> - Calendar feed for the given city

use lambda_http::{run, service_fn, Body, Request, RequestExt, Response};
use shared::http::{calendar_response, error_response};
use shared::ics::to_ics;
use shared::transform::events_for_days;
use shared::{Config, Error, VakitClient};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Application state
struct AppState {
    config: Config,
    client: VakitClient,
}

impl AppState {
    fn new() -> Result<Self, lambda_http::Error> {
        let config = Config::from_env()
            .map_err(|e| format!("Configuration error: {}", e))?;
        let client = VakitClient::new(&config);

        Ok(Self { config, client })
    }
}

/// Build the calendar document for one city.
///
/// The pipeline is strictly sequential: validate the parameter, fetch the
/// upstream records, expand them into events, serialize. The first failure
/// wins; no partial output is ever returned.
async fn build_feed(state: &AppState, city_id: Option<&str>) -> Result<String, Error> {
    let city_id = match city_id {
        Some(id) if !id.is_empty() => id,
        _ => return Err(Error::MissingParameters),
    };

    let days = state.client.fetch_times(city_id).await?;
    let events = events_for_days(&days)?;

    info!(
        "Built {} events over {} days for city {}",
        events.len(),
        days.len(),
        city_id
    );

    Ok(to_ics(&events))
}

async fn handler(state: Arc<AppState>, event: Request) -> Result<Response<Body>, lambda_http::Error> {
    let params = event.query_string_parameters();
    let city_id = params.first("cityID");

    match build_feed(&state, city_id).await {
        Ok(ics) => calendar_response(ics, state.config.cache_max_age),
        Err(err) => {
            error!("Failed to build calendar feed: {}", err);
            error_response(&err)
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let state = Arc::new(AppState::new()?);

    run(service_fn(move |event| {
        let state = Arc::clone(&state);
        async move { handler(state, event).await }
    }))
    .await
}
