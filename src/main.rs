use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use activity_finder_api::api::{create_router, AppState};
use activity_finder_api::config::Config;
use activity_finder_api::services::providers::anthropic::AnthropicProvider;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Built once here and injected so tests can substitute a stub
    // CompletionProvider.
    let provider = Arc::new(AnthropicProvider::new(
        config.anthropic_api_key,
        config.anthropic_api_url,
        config.anthropic_model,
    ));

    let state = AppState::new(provider);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Family Activity Finder API listening");
    axum::serve(listener, app).await?;

    Ok(())
}
