//! Redis Pub/Sub sender.
//!
//! Every forwarded notification is wrapped in an [`OutboundEnvelope`],
//! serialized to JSON and published on one channel. Downstream transports
//! (email, push, in-app) subscribe to that channel.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, RedisError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::RedisConfig;
use crate::notification::{ComposedPayload, NotificationSender, Severity, TargetIdentity, TenantScope};

/// Wire format published on the outbound channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundEnvelope {
    pub id: Uuid,
    pub sent_at: DateTime<Utc>,
    pub name: String,
    pub payload: ComposedPayload,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<TargetIdentity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<TenantScope>,
    pub severity: Severity,
}

impl OutboundEnvelope {
    pub fn new(
        name: impl Into<String>,
        payload: ComposedPayload,
        target: Option<TargetIdentity>,
        tenant_id: Option<TenantScope>,
        severity: Severity,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            sent_at: Utc::now(),
            name: name.into(),
            payload,
            target,
            tenant_id,
            severity,
        }
    }
}

/// Publishes composed notifications to a Redis channel
pub struct RedisPublisher {
    connection: ConnectionManager,
    channel: String,
}

impl RedisPublisher {
    /// Connect using the configured URL; reconnects are handled by the
    /// connection manager.
    pub async fn connect(config: &RedisConfig) -> Result<Self, RedisError> {
        let client = Client::open(config.url.as_str())?;
        let connection = client.get_connection_manager().await?;

        tracing::info!(channel = %config.channel, "Redis publisher connected");

        Ok(Self {
            connection,
            channel: config.channel.clone(),
        })
    }
}

#[async_trait]
impl NotificationSender for RedisPublisher {
    async fn send_notification(
        &self,
        name: &str,
        payload: ComposedPayload,
        target: Option<TargetIdentity>,
        tenant: Option<TenantScope>,
        severity: Severity,
    ) -> anyhow::Result<()> {
        let envelope = OutboundEnvelope::new(name, payload, target, tenant, severity);
        let message = serde_json::to_string(&envelope)?;

        let mut conn = self.connection.clone();
        let receivers: i64 = conn.publish(&self.channel, message).await?;

        tracing::debug!(
            envelope_id = %envelope.id,
            notification = %name,
            channel = %self.channel,
            receivers = receivers,
            "Notification published"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    #[test]
    fn test_envelope_wire_format() {
        let user_id = Uuid::new_v4();
        let envelope = OutboundEnvelope::new(
            "order.created",
            ComposedPayload::Structured(crate::notification::StructuredPayload {
                fields: Map::new(),
            }),
            Some(TargetIdentity {
                user_id,
                user_name: None,
            }),
            Some(TenantScope(Uuid::nil())),
            Severity::Error,
        );

        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["name"], "order.created");
        assert_eq!(value["payload"], json!({"mode": "structured", "fields": {}}));
        assert_eq!(value["target"], json!({"userId": user_id}));
        assert_eq!(value["tenantId"], json!(Uuid::nil()));
        assert_eq!(value["severity"], "Error");
        assert!(value.get("sentAt").is_some());

        let parsed: OutboundEnvelope = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, envelope);
    }

    #[test]
    fn test_broadcast_envelope_omits_target() {
        let envelope = OutboundEnvelope::new(
            "system.maintenance",
            ComposedPayload::Structured(crate::notification::StructuredPayload {
                fields: Map::new(),
            }),
            None,
            None,
            Severity::Info,
        );

        let value = serde_json::to_value(&envelope).unwrap();
        assert!(value.get("target").is_none());
        assert!(value.get("tenantId").is_none());
    }
}
