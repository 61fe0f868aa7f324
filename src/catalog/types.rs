//! Notification definition types and error definitions

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Catalog-specific error type
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Notification definition not found: {name}")]
    DefinitionNotFound { name: String },

    #[error("Notification group already registered: {0}")]
    DuplicateGroup(String),

    #[error("Notification definition already registered: {0}")]
    DuplicateDefinition(String),

    #[error("Invalid name: {0}")]
    InvalidName(String),
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// How long a delivered notification is kept by the receiving side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub enum NotificationLifetime {
    /// Kept until the recipient removes it
    #[default]
    Persistent,
    /// Shown once, then discarded
    OnlyOne,
}

/// Category of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub enum NotificationType {
    #[default]
    Application,
    System,
    User,
    ServiceCallback,
}

/// Shape the receiving side should expect for the content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub enum NotificationContentType {
    #[default]
    Text,
    Html,
    Markdown,
    Json,
}

/// A text identity resolved by a translator.
///
/// Accepts either a bare key (`"Orders:Created"`) or
/// `{ "resource": "Orders", "key": "Created" }` when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LocalizableTextRepr")]
pub struct LocalizableText {
    /// Resource namespace the key belongs to (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    /// Lookup key, also used verbatim when no translation exists
    pub key: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LocalizableTextRepr {
    Key(String),
    Full {
        #[serde(default)]
        resource: Option<String>,
        key: String,
    },
}

impl From<LocalizableTextRepr> for LocalizableText {
    fn from(repr: LocalizableTextRepr) -> Self {
        match repr {
            LocalizableTextRepr::Key(key) => Self { resource: None, key },
            LocalizableTextRepr::Full { resource, key } => Self { resource, key },
        }
    }
}

impl LocalizableText {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            resource: None,
            key: key.into(),
        }
    }

    pub fn in_resource(resource: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            resource: Some(resource.into()),
            key: key.into(),
        }
    }
}

impl From<&str> for LocalizableText {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// A registered, named notification type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationDefinition {
    /// Globally unique name (e.g., "order.created")
    pub name: String,

    /// Localizable display name
    pub display_name: LocalizableText,

    /// Localizable description (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizableText>,

    #[serde(default)]
    pub lifetime: NotificationLifetime,

    #[serde(default)]
    pub notification_type: NotificationType,

    #[serde(default)]
    pub content_type: NotificationContentType,

    /// Whether clients may subscribe to this notification themselves
    #[serde(default)]
    pub allow_subscription_to_clients: bool,

    /// Template identity understood by the rendering engine; presence
    /// marks the definition as template-capable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl NotificationDefinition {
    pub fn new(name: impl Into<String>, display_name: impl Into<LocalizableText>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            description: None,
            lifetime: NotificationLifetime::default(),
            notification_type: NotificationType::default(),
            content_type: NotificationContentType::default(),
            allow_subscription_to_clients: false,
            template: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<LocalizableText>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_lifetime(mut self, lifetime: NotificationLifetime) -> Self {
        self.lifetime = lifetime;
        self
    }

    pub fn with_type(mut self, notification_type: NotificationType) -> Self {
        self.notification_type = notification_type;
        self
    }

    pub fn with_content_type(mut self, content_type: NotificationContentType) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn subscribable(mut self, allow: bool) -> Self {
        self.allow_subscription_to_clients = allow;
        self
    }

    pub fn has_template(&self) -> bool {
        self.template.is_some()
    }
}

/// A named collection of definitions, used for listing and subscription UIs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationGroup {
    /// Unique group name
    pub name: String,

    /// Localizable display name
    pub display_name: LocalizableText,

    /// Whether clients may subscribe to notifications of this group
    #[serde(default)]
    pub allow_subscription_to_clients: bool,

    /// Definitions in registration order
    #[serde(default)]
    pub notifications: Vec<NotificationDefinition>,
}

impl NotificationGroup {
    pub fn new(name: impl Into<String>, display_name: impl Into<LocalizableText>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            allow_subscription_to_clients: false,
            notifications: Vec::new(),
        }
    }

    pub fn subscribable(mut self, allow: bool) -> Self {
        self.allow_subscription_to_clients = allow;
        self
    }

    pub fn with_notification(mut self, definition: NotificationDefinition) -> Self {
        self.notifications.push(definition);
        self
    }
}
