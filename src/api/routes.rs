use axum::{
    routing::{get, post},
    Router,
};

use crate::server::AppState;

use super::health::{health, stats};
use super::metrics::prometheus_metrics;
use super::notifications::{assignable_notifiers, assignable_templates, send_notification};

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health & Stats
        .route("/health", get(health))
        .route("/stats", get(stats))
        .route("/metrics", get(prometheus_metrics))
        // Notification endpoints
        .nest(
            "/api/v1",
            Router::new()
                .route(
                    "/notifications/assignable-notifiers",
                    get(assignable_notifiers),
                )
                .route(
                    "/notifications/assignable-templates",
                    get(assignable_templates),
                )
                .route("/notifications/send", post(send_notification)),
        )
}
