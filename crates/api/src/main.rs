use std::net::SocketAddr;

use anyhow::{Context, Result};
use zenjourney_api::{build_app, ApiConfig};
use zenjourney_observability::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("zenjourney-api");

    let config = ApiConfig::from_env();
    let bind = config.bind.clone();
    let app = build_app(config).await?;

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    tracing::info!(bind = %bind, "zenjourney api started");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}
