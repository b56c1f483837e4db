use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use ideabox_server::{AppState, ServerArgs, config::DEFAULT_LOG_FILTER};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
        .context("failed to install tracing subscriber")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ServerArgs::parse();
    init_tracing()?;

    let gateway = ideabox_providers::gateway_from_env();
    if gateway.registry().list_available().is_empty() {
        tracing::warn!("no provider API key configured; generation requests will fail");
    }

    let bind = args.bind;
    let state = AppState::new(Arc::new(gateway), args.environment);
    ideabox_server::serve(bind, state)
        .await
        .with_context(|| format!("server on {bind} failed"))
}
