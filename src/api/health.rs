//! Health check and statistics endpoints.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::config::SenderBackend;
use crate::server::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub sender: String,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub catalog: CatalogStats,
}

#[derive(Debug, Serialize)]
pub struct CatalogStats {
    pub groups: usize,
    pub definitions: usize,
    pub subscribable_definitions: usize,
    pub templated_definitions: usize,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let sender = match state.settings.sender.backend {
        SenderBackend::Log => "log",
        SenderBackend::Redis => "redis",
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        sender: sender.to_string(),
    })
}

pub async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let catalog = &state.catalog;

    Json(StatsResponse {
        catalog: CatalogStats {
            groups: catalog.groups().len(),
            definitions: catalog.len(),
            subscribable_definitions: catalog
                .definitions()
                .filter(|d| d.allow_subscription_to_clients)
                .count(),
            templated_definitions: catalog.definitions().filter(|d| d.has_template()).count(),
        },
    })
}
