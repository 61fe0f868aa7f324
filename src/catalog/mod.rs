//! Notification definition catalog.
//!
//! This module provides:
//! - Group and definition types, including their localizable texts
//! - Startup registration with name validation
//! - Exact-name lookup over an immutable registry
//!
//! # Example
//!
//! ```ignore
//! let catalog = DefinitionCatalog::builder()
//!     .group(
//!         NotificationGroup::new("orders", "Notifications:Orders")
//!             .subscribable(true)
//!             .with_notification(
//!                 NotificationDefinition::new("order.created", "Notifications:OrderCreated")
//!                     .with_template("order-created"),
//!             ),
//!     )?
//!     .build();
//!
//! let definition = catalog.get_by_name("order.created")?;
//! ```

mod store;
mod types;

pub use store::{create_catalog, CatalogBuilder, DefinitionCatalog};
pub use types::{
    CatalogError, CatalogResult, LocalizableText, NotificationContentType, NotificationDefinition,
    NotificationGroup, NotificationLifetime, NotificationType,
};
