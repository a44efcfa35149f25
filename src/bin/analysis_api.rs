use anyhow::Context;
use outfit_advisor::{
    api::{analysis_router, AnalysisState},
    config::Config,
    shutdown, telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    telemetry::init_tracing("analysis-api");

    if config.api_key().is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; /analyze will fail until it is configured");
    }

    let state = AnalysisState::from_config(&config).context("Failed to build inference provider")?;
    let app = analysis_router(state);

    let addr = config.analysis_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(addr = %addr, model = %config.openai_model, "Analysis API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::signal())
        .await?;

    Ok(())
}
