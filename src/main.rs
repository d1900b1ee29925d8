use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use scholia::application::services::AnalysisService;
use scholia::infrastructure::llm::OllamaClient;
use scholia::infrastructure::observability::{TracingConfig, init_tracing};
use scholia::infrastructure::text_processing::CompositeFileLoader;
use scholia::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(
        &TracingConfig::from_settings(&settings.logging, environment),
        settings.server.port,
    );

    let file_loader = Arc::new(CompositeFileLoader::default());
    let llm_client = Arc::new(OllamaClient::from_settings(&settings.ollama));
    tracing::info!(base_url = %llm_client.base_url(), "Using Ollama backend");

    let analysis_service = Arc::new(AnalysisService::new(file_loader, llm_client));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server.host/server.port")?;

    let state = AppState {
        analysis_service,
        settings,
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
