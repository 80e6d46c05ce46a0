use anyhow::Context;

use civicstats_api::app::{build_app, services::AppServices};
use civicstats_infra::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    civicstats_observability::init();

    let config = AppConfig::from_env().context("failed to load configuration")?;
    let app = build_app(AppServices::in_memory());

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
