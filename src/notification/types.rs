use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Caller-supplied importance hint, opaque to composition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub enum Severity {
    Success,
    /// Informational (default)
    #[default]
    Info,
    Warn,
    Error,
    Fatal,
}

/// Request to send a registered notification.
///
/// Optional fields are normalized once, at deserialization or in
/// [`SendRequestBuilder::build`]: blank `templateName`/`culture` become
/// `None`, a missing or null `data` becomes an empty map and `severity`
/// defaults to [`Severity::Info`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendRequest {
    /// Name of the target definition
    pub name: String,
    /// Recipient; absent means broadcast
    #[serde(default)]
    pub to_user_id: Option<Uuid>,
    /// Recipient display name, advisory only
    #[serde(default)]
    pub to_user_name: Option<String>,
    /// Presence requests template-mode delivery
    #[serde(default, deserialize_with = "non_blank")]
    pub template_name: Option<String>,
    /// Culture for template rendering; falls back to the caller's culture
    #[serde(default, deserialize_with = "non_blank")]
    pub culture: Option<String>,
    /// Arbitrary extra fields
    #[serde(default, deserialize_with = "map_or_empty")]
    pub data: Map<String, Value>,
    #[serde(default)]
    pub severity: Severity,
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(blank_to_none(Option::<String>::deserialize(deserializer)?))
}

fn map_or_empty<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

impl SendRequest {
    pub fn builder(name: impl Into<String>) -> SendRequestBuilder {
        SendRequestBuilder::new(name)
    }

    /// Requested template name, if template mode was asked for
    pub fn requested_template(&self) -> Option<&str> {
        self.template_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }
}

/// Builder for [`SendRequest`]
#[derive(Debug, Clone)]
pub struct SendRequestBuilder {
    name: String,
    to_user_id: Option<Uuid>,
    to_user_name: Option<String>,
    template_name: Option<String>,
    culture: Option<String>,
    data: Map<String, Value>,
    severity: Severity,
}

impl SendRequestBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            to_user_id: None,
            to_user_name: None,
            template_name: None,
            culture: None,
            data: Map::new(),
            severity: Severity::default(),
        }
    }

    /// Address a single user
    pub fn to_user(mut self, user_id: Uuid, user_name: Option<String>) -> Self {
        self.to_user_id = Some(user_id);
        self.to_user_name = user_name;
        self
    }

    /// Request template-mode delivery
    pub fn template(mut self, template_name: impl Into<String>) -> Self {
        self.template_name = Some(template_name.into());
        self
    }

    pub fn culture(mut self, culture: impl Into<String>) -> Self {
        self.culture = Some(culture.into());
        self
    }

    /// Replace the data map
    pub fn data(mut self, data: Map<String, Value>) -> Self {
        self.data = data;
        self
    }

    /// Set a single data field
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn build(self) -> SendRequest {
        SendRequest {
            name: self.name,
            to_user_id: self.to_user_id,
            to_user_name: self.to_user_name,
            template_name: blank_to_none(self.template_name),
            culture: blank_to_none(self.culture),
            data: self.data,
            severity: self.severity,
        }
    }
}

/// Recipient of a targeted notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetIdentity {
    pub user_id: Uuid,
    /// Advisory, never used for lookup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

/// Tenant the notification is scoped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantScope(pub Uuid);

impl std::fmt::Display for TenantScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ambient facts about the caller, passed explicitly into every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerContext {
    /// Current culture
    pub culture: String,
    /// Caller display name
    pub display_name: Option<String>,
    /// Caller login name
    pub login_name: Option<String>,
    /// Current tenant, if any
    pub tenant_id: Option<Uuid>,
}

impl CallerContext {
    pub fn new(culture: impl Into<String>) -> Self {
        Self {
            culture: culture.into(),
            display_name: None,
            login_name: None,
            tenant_id: None,
        }
    }

    pub fn with_user(mut self, display_name: Option<String>, login_name: Option<String>) -> Self {
        self.display_name = blank_to_none(display_name);
        self.login_name = blank_to_none(login_name);
        self
    }

    pub fn with_tenant(mut self, tenant_id: Option<Uuid>) -> Self {
        self.tenant_id = tenant_id;
        self
    }

    /// Name shown as the sender: display name, else login name
    pub fn from_user(&self) -> Option<&str> {
        self.display_name.as_deref().or(self.login_name.as_deref())
    }

    pub fn tenant(&self) -> Option<TenantScope> {
        self.tenant_id.map(TenantScope)
    }
}

/// Payload produced for one send; exactly one variant per request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ComposedPayload {
    /// Content is rendered later from the definition's template
    Template(TemplatePayload),
    /// Content is the normalized caller data
    Structured(StructuredPayload),
}

impl ComposedPayload {
    /// Short label used in logs and metrics
    pub fn mode(&self) -> &'static str {
        match self {
            ComposedPayload::Template(_) => "template",
            ComposedPayload::Structured(_) => "structured",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplatePayload {
    pub definition_name: String,
    pub culture: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_user: Option<String>,
    /// Passed through unvalidated for the rendering engine
    pub data: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredPayload {
    pub fields: Map<String, Value>,
}
