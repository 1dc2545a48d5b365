use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use kudos_export::pdf::WeasyPrint;
use kudos_server::config::ServerConfig;
use kudos_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ServerConfig::from_env()?;
    let renderer = WeasyPrint::new(&config.weasyprint).with_base_url(std::env::current_dir()?);
    let bind = config.bind;

    let state = AppState::new(config, Arc::new(renderer))?;
    let app = kudos_server::app(state);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    tracing::info!(%bind, "kudos server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
