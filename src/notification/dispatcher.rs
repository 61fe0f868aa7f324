use std::sync::Arc;
use std::time::Instant;

use crate::catalog::DefinitionCatalog;
use crate::metrics::DispatchMetrics;

use super::address::resolve_target;
use super::{CallerContext, NotificationError, NotificationSender, PayloadComposer, SendRequest};

/// Routes send requests through composition to the injected sender.
///
/// Holds no mutable state: each call composes, resolves the recipient and
/// forwards at most once. Nothing is forwarded when composition fails.
pub struct NotificationDispatcher {
    composer: PayloadComposer,
    sender: Arc<dyn NotificationSender>,
}

impl NotificationDispatcher {
    pub fn new(catalog: Arc<DefinitionCatalog>, sender: Arc<dyn NotificationSender>) -> Self {
        Self {
            composer: PayloadComposer::new(catalog),
            sender,
        }
    }

    /// Compose and forward one notification
    #[tracing::instrument(
        name = "dispatcher.send",
        skip(self, request, ctx),
        fields(
            notification = %request.name,
            severity = ?request.severity,
            tenant = ?ctx.tenant_id
        )
    )]
    pub async fn send(
        &self,
        request: SendRequest,
        ctx: &CallerContext,
    ) -> Result<(), NotificationError> {
        let started = Instant::now();
        let target = resolve_target(request.to_user_id, request.to_user_name.as_deref());

        let payload = match self.composer.compose(&request, ctx) {
            Ok(payload) => payload,
            Err(e) => {
                DispatchMetrics::record_rejected(e.code());
                tracing::warn!(
                    notification = %request.name,
                    code = e.code(),
                    error = %e,
                    "Notification rejected"
                );
                return Err(e);
            }
        };

        let mode = payload.mode();
        let broadcast = target.is_none();

        if let Err(e) = self
            .sender
            .send_notification(&request.name, payload, target, ctx.tenant(), request.severity)
            .await
        {
            DispatchMetrics::record_sender_failure();
            tracing::error!(
                notification = %request.name,
                error = %e,
                "Sender failed to deliver notification"
            );
            return Err(NotificationError::Delivery(e));
        }

        DispatchMetrics::record_sent(mode);
        DispatchMetrics::observe_latency(started.elapsed().as_secs_f64());

        tracing::debug!(
            notification = %request.name,
            mode = mode,
            broadcast = broadcast,
            "Notification dispatched"
        );

        Ok(())
    }
}
