//! API layer - HTTP endpoint handlers organized by domain.

mod health;
mod metrics;
mod notifications;
mod routes;

pub use health::{health, stats, CatalogStats, HealthResponse, StatsResponse};
pub use metrics::prometheus_metrics;
pub use notifications::{
    assignable_notifiers, assignable_templates, send_notification, AssignableNotifiersResponse,
    AssignableTemplatesResponse,
};
pub use routes::api_routes;
