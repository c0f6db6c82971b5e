use anyhow::Context;
use searchstream_adapter_axum::{build_router, AppState};
use searchstream_core::config::AppConfig;

async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::from_toml_str(include_str!("../../../searchstream.toml"))
        .map_err(anyhow::Error::msg)
        .context("invalid searchstream.toml")?;

    simple_logger::SimpleLogger::new()
        .with_level(cfg.logging.level)
        .init()
        .context("failed to install logger")?;

    let addr = cfg.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    log::info!("searchstream listening on {}", addr);

    axum::serve(listener, build_router(AppState::from_entropy()))
        .await
        .context("server stopped")
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        log::error!("{:#}", err);
        eprintln!("searchstream adapter failed: {:#}", err);
        std::process::exit(1);
    }
}
