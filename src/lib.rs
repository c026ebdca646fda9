pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod provider;

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use axum::Router;
use tracing::info;

use crate::config::AppConfig;
use crate::provider::{SolutionProvider, TemplateProvider};

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn SolutionProvider>,
    pub response_delay: Duration,
}

impl AppState {
    pub fn new(provider: Arc<dyn SolutionProvider>, response_delay: Duration) -> Self {
        Self {
            provider,
            response_delay,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Arc::new(TemplateProvider::new()), config.response_delay())
    }
}

pub fn build_app(state: Arc<AppState>) -> Router {
    api::router(state)
}

pub async fn run_server(app: Router, port: u16) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("failed to bind port {port}"))?;

    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app).await.context("server failed")
}
