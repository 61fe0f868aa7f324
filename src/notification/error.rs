use serde_json::{json, Value};
use thiserror::Error;

/// Errors raised while resolving, composing or forwarding a notification
#[derive(Debug, Error)]
pub enum NotificationError {
    /// The requested notification name is not registered
    #[error("Notification definition not found: {name}")]
    DefinitionNotFound { name: String },

    /// Template mode was requested for a definition without a template
    #[error("The notification template {template_name} does not exist!")]
    TemplateNotRegistered { template_name: String },

    /// The translator failed
    #[error("Localization failed: {0}")]
    Localization(anyhow::Error),

    /// The sender failed
    #[error("Delivery failed: {0}")]
    Delivery(anyhow::Error),
}

impl NotificationError {
    /// Stable code surfaced to callers
    pub fn code(&self) -> &'static str {
        match self {
            NotificationError::DefinitionNotFound { .. } => "NOTIFICATION_NOT_DEFINED",
            NotificationError::TemplateNotRegistered { .. } => "NOTIFICATION_TEMPLATE_NOT_FOUND",
            NotificationError::Localization(_) => "LOCALIZATION_ERROR",
            NotificationError::Delivery(_) => "DELIVERY_ERROR",
        }
    }

    /// Business errors are caller or configuration mistakes, not faults
    pub fn is_business(&self) -> bool {
        matches!(
            self,
            NotificationError::DefinitionNotFound { .. }
                | NotificationError::TemplateNotRegistered { .. }
        )
    }

    /// Contextual data attached to business errors
    pub fn data(&self) -> Option<Value> {
        match self {
            NotificationError::DefinitionNotFound { name } => Some(json!({ "name": name })),
            NotificationError::TemplateNotRegistered { template_name } => {
                Some(json!({ "name": template_name }))
            }
            _ => None,
        }
    }
}
