use anyhow::Context;
use chemscan::api::{build_router, AppState};
use chemscan::config::ServerConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,chemscan=debug,tower_http=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env()?;
    info!(pubchem = %config.pubchem_base_url,
          inventory = %config.inventory_file.display(),
          threshold = config.similarity_threshold,
          match_key = %config.match_key,
          "configuration loaded");

    let state = AppState::from_config(&config)?;
    let app = build_router(state, &config.index_file);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("could not bind {}", config.bind_addr))?;
    info!("chemscan listening on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
