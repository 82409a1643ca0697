use anyhow::Context;
use user_registry::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("🚀 Starting user registry...");

    let config = AppConfig::from_env();
    tracing::info!("Environment: {}", config.environment);

    let repository = select_repository(&config).await;
    let router = build_router(repository);

    let addr = config.server.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("✅ Server running on http://localhost:{}", config.server.port);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("🛑 Initiating graceful shutdown...");
        })
        .await
        .context("Server error")?;

    tracing::info!("👋 Server stopped");
    Ok(())
}
