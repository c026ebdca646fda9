use std::sync::Arc;

use anyhow::Result;
use solve_service::{build_app, config::AppConfig, run_server, AppState};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,solve_service=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let config = AppConfig::from_env();
    info!(
        port = config.port,
        solve_delay_ms = config.solve_delay_ms,
        "Starting solve service v{}",
        env!("CARGO_PKG_VERSION")
    );

    let app = build_app(Arc::new(AppState::from_config(&config)));
    run_server(app, config.port).await
}
