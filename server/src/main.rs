use anyhow::Context;
use food_creator_core::{AiClient, InferenceClient};
use food_creator_server::config::ServerConfig;
use food_creator_server::{api, app, telemetry, AppState};
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Check for --openapi flag to dump the OpenAPI document and exit
    if env::args().any(|arg| arg == "--openapi") {
        println!("{}", api::openapi().to_pretty_json()?);
        return Ok(());
    }

    dotenvy::dotenv().ok();
    telemetry::init_telemetry();

    let config = ServerConfig::from_env().context("Invalid server configuration")?;

    let client = InferenceClient::new(config.ai.clone());
    tracing::info!(
        model = client.model_name(),
        "Using inference provider at {}",
        config.ai.endpoint
    );
    let ai_client: AppState = Arc::new(client);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app(ai_client))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
