use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tokio::signal;

use ara_notification_composer::catalog::create_catalog;
use ara_notification_composer::config::{SenderBackend, Settings};
use ara_notification_composer::infrastructure::redis::RedisPublisher;
use ara_notification_composer::localization::ResourceTranslator;
use ara_notification_composer::metrics::CatalogMetrics;
use ara_notification_composer::notification::{LoggingSender, NotificationSender};
use ara_notification_composer::server::{create_app, AppState};
use ara_notification_composer::telemetry::init_telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let settings = Settings::new()?;

    // Initialize tracing
    let _telemetry = init_telemetry(&settings.otel)?;
    tracing::info!("Configuration loaded");

    let catalog = create_catalog(&settings.catalog)?;
    CatalogMetrics::set_definitions(catalog.len());
    tracing::info!(
        groups = catalog.groups().len(),
        definitions = catalog.len(),
        "Notification catalog built"
    );

    let translator = Arc::new(ResourceTranslator::from_config(&settings.localization)?);

    let sender: Arc<dyn NotificationSender> = match settings.sender.backend {
        SenderBackend::Log => Arc::new(LoggingSender),
        SenderBackend::Redis => Arc::new(RedisPublisher::connect(&settings.redis).await?),
    };
    tracing::info!(backend = ?settings.sender.backend, "Notification sender ready");

    // Create application state
    let addr = settings.server_addr();
    let state = AppState::new(settings, catalog, translator, sender);
    tracing::info!("Application state initialized");

    let app = create_app(state);

    // Start server
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
