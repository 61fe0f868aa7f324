//! Delivery abstraction the dispatcher forwards composed notifications to.

use async_trait::async_trait;

use super::{ComposedPayload, Severity, TargetIdentity, TenantScope};

/// Transport-agnostic notification sender.
///
/// Implementations own retries, queueing and batching; the dispatcher calls
/// this exactly once per successfully composed request and only propagates
/// the error.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send_notification(
        &self,
        name: &str,
        payload: ComposedPayload,
        target: Option<TargetIdentity>,
        tenant: Option<TenantScope>,
        severity: Severity,
    ) -> anyhow::Result<()>;
}

/// Sender that only records forwarded notifications in the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSender;

#[async_trait]
impl NotificationSender for LoggingSender {
    async fn send_notification(
        &self,
        name: &str,
        payload: ComposedPayload,
        target: Option<TargetIdentity>,
        tenant: Option<TenantScope>,
        severity: Severity,
    ) -> anyhow::Result<()> {
        let payload_json = serde_json::to_string(&payload)?;

        tracing::info!(
            notification = %name,
            mode = payload.mode(),
            target_user = ?target.as_ref().map(|t| t.user_id),
            tenant = ?tenant,
            severity = ?severity,
            payload = %payload_json,
            "Notification forwarded"
        );

        Ok(())
    }
}
