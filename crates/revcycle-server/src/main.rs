use revcycle_analytics::AnalyticsEngine;
use revcycle_core::demo;
use revcycle_server::{AppState, config, router};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if std::env::var_os("REVCYCLE_LOG_JSON").is_some() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let config_path = config::config_path()?;
    let mut cfg = config::load_config(&config_path)?;
    config::apply_env_overrides(&mut cfg);

    let mut engine = AnalyticsEngine::new(cfg.analysis)?;
    if let Some(template) = config::load_appeal_template(&cfg)? {
        engine = engine.with_appeal_template(template);
    }
    if cfg.load_demo_on_start {
        engine.load_contracts(demo::contracts());
        engine.load_payments(demo::payments());
        engine.load_claims(demo::claims());
        tracing::info!("demo datasets loaded at startup");
    }

    let bind_addr = cfg.bind_addr.clone();
    let max_upload_bytes = cfg.max_upload_bytes;
    let app = router(AppState::new(engine, cfg, Some(config_path)), max_upload_bytes);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "revcycle server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
    }
    tracing::info!("shutting down");
}
