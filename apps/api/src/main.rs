//! Entitle API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod dev_seed;
mod dto;
mod error;
mod handlers;
mod state;

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

use entitle_application::{AccessRequestService, UserService};
use entitle_core::AppError;
use entitle_infrastructure::{
    InMemoryAccessRequestStore, InMemoryApplicationDirectory, InMemoryUserDirectory,
    TracingNotifier,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::api_config::ApiConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::load()?;

    let application_directory = Arc::new(InMemoryApplicationDirectory::with_latency(
        config.simulated_latency,
    ));
    let user_directory = Arc::new(InMemoryUserDirectory::with_latency(
        config.simulated_latency,
    ));
    let access_request_store = Arc::new(InMemoryAccessRequestStore::new());
    let notifier = Arc::new(TracingNotifier::new());

    if config.seed_demo_data {
        dev_seed::run(application_directory.as_ref(), user_directory.as_ref()).await?;
    }

    let app_state = AppState {
        application_directory: application_directory.clone(),
        user_service: UserService::new(user_directory.clone()),
        access_request_service: AccessRequestService::new(access_request_store, notifier),
    };

    let app = api_router::build_router(app_state, config.frontend_url.as_str())?;

    let host = IpAddr::from_str(&config.api_host).map_err(|error| {
        AppError::Internal(format!("invalid API_HOST '{}': {error}", config.api_host))
    })?;
    let address = SocketAddr::from((host, config.api_port));

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, "entitle-api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}
