// Infrastructure layer (shared components)
pub mod infrastructure;

pub use infrastructure::auth;
pub use infrastructure::config;
pub use infrastructure::error;
pub use infrastructure::metrics;

// Domain layer (business logic)
pub mod catalog;
pub mod localization;
pub mod notification;
pub mod projection;

// Application layer
pub mod api;
pub mod server;

// Supporting modules
pub mod telemetry;
