use anyhow::Context;
use outfit_advisor::{
    api::{recommendation_router, RecommendationState},
    config::Config,
    shutdown, telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    telemetry::init_tracing("recommendation-service");

    let app = recommendation_router(RecommendationState::default());

    let addr = config.recommendation_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(addr = %addr, "Recommendation service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::signal())
        .await?;

    Ok(())
}
