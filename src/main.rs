use tender_search::config::types::{LogFormat, ServerConfig};
use tender_search::gateway::opensearch::OpenSearchGateway;
use tender_search::search::engine::SearchService;
use tender_search::search::handlers::router;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match ServerConfig::from_process() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {:#}", e);
            eprintln!(
                "Usage: OPENSEARCH_ENDPOINT=<url> {} [--bind <addr:port>] [--endpoint <url>] [--index <name>]",
                std::env::args().next().unwrap_or_else(|| "tender-search".to_string())
            );
            std::process::exit(1);
        }
    };

    init_logging(&config);

    tracing::info!(
        "Using OpenSearch at {} (index '{}', credentials: {:?})",
        config.gateway.endpoint,
        config.gateway.index,
        config.gateway.credentials
    );
    if config.gateway.accept_invalid_certs {
        tracing::warn!("TLS certificate validation is disabled for the OpenSearch endpoint");
    }

    // 1. Gateway to the document index:
    let credentials = config.gateway.credentials.provider();
    let gateway = OpenSearchGateway::new(&config.gateway, credentials)?;

    // 2. Search pipeline:
    let service = Arc::new(SearchService::new(gateway, config.gateway.index.clone()));

    // 3. HTTP Router:
    let app = router(service);

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_logging(config: &ServerConfig) {
    match config.log_format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_max_level(config.log_level)
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_max_level(config.log_level)
            .init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        // keep serving; the process can still be killed
        std::future::pending::<()>().await;
    }
}
