//! Contact intake service entry point.
//!
//! Startup order: load `.env`, parse config, open the store, bind, serve.
//! A store that cannot be reached stops the process before it binds.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use contact_api::config::DEFAULT_LOG_FILTER;
use contact_api::{AppState, Config, IntakeService, StoreHandle, logging, serve, shutdown_signal};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();
    let config = Config::parse();

    logging::init(DEFAULT_LOG_FILTER);
    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    let store = match StoreHandle::open(&config).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "store connection error");
            return Err(e).context("could not open the submission store");
        }
    };

    let intake = IntakeService::new(store.store()).with_options(config.validation());
    let listener = TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("could not bind {}", config.bind_addr()))?;

    let served = serve(listener, AppState::new(intake), shutdown_signal()).await;
    store.close().await;
    served?;

    tracing::info!("contact-api stopped");
    Ok(())
}
