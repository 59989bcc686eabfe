//! Wiring & DI. Entry point: load config, build the transport, inject into the shell, run UI.
//! No workflow logic here; every operation lives in `usecases`.

use classifier_client::adapters::http::ReqwestTransport;
use classifier_client::adapters::ui::tui::TuiInputPort;
use classifier_client::ports::{InputPort, Transport};
use classifier_client::shared::config::AppConfig;
use classifier_client::usecases::HealthCheck;
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "invalid configuration, using defaults");
        AppConfig::default()
    });
    let transport_cfg = cfg.transport_config();
    info!(
        url = %transport_cfg.base_url,
        timeout_secs = transport_cfg.timeout.map(|t| t.as_secs()),
        "classification backend"
    );

    classifier_client::adapters::ui::init_ui(&transport_cfg.base_url);

    // --- Transport (injected into every operation; no ambient endpoint) ---
    let transport: Arc<dyn Transport> = Arc::new(
        ReqwestTransport::new(transport_cfg).map_err(|e| anyhow::anyhow!("{}", e))?,
    );

    // --- Startup probe: informational, never blocks the shell ---
    match HealthCheck::new(Arc::clone(&transport)).probe().await {
        Ok(status) => info!(status = %status, "backend reachable"),
        Err(e) => warn!(error = %e, "backend health check failed"),
    }

    // --- Run (main menu -> Add Class / Upload Images / Classify Image / View Classes) ---
    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(transport));
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
