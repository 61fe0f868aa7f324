//! Notification catalog and send endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::error::Result;
use crate::notification::SendRequest;
use crate::projection::{NotificationGroupView, NotificationTemplateView};
use crate::server::{AppState, Caller};

#[derive(Debug, Serialize)]
pub struct AssignableNotifiersResponse {
    pub groups: Vec<NotificationGroupView>,
}

#[derive(Debug, Serialize)]
pub struct AssignableTemplatesResponse {
    pub templates: Vec<NotificationTemplateView>,
}

/// GET /api/v1/notifications/assignable-notifiers
#[tracing::instrument(
    name = "http.assignable_notifiers",
    skip(state, caller),
    fields(culture = %caller.0.culture)
)]
pub async fn assignable_notifiers(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<AssignableNotifiersResponse>> {
    let groups = state.projector.assignable_notifiers(&caller.0.culture).await?;

    Ok(Json(AssignableNotifiersResponse { groups }))
}

/// GET /api/v1/notifications/assignable-templates
#[tracing::instrument(
    name = "http.assignable_templates",
    skip(state, caller),
    fields(culture = %caller.0.culture)
)]
pub async fn assignable_templates(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<AssignableTemplatesResponse>> {
    let templates = state.projector.assignable_templates(&caller.0.culture).await?;

    Ok(Json(AssignableTemplatesResponse { templates }))
}

/// POST /api/v1/notifications/send
///
/// Composes the payload for the named definition and forwards it to the
/// configured sender. Replies `204 No Content` once the sender accepted it.
#[tracing::instrument(
    name = "http.send_notification",
    skip(state, caller, request),
    fields(notification = tracing::field::Empty)
)]
pub async fn send_notification(
    State(state): State<AppState>,
    caller: Caller,
    request: std::result::Result<Json<SendRequest>, JsonRejection>,
) -> Result<StatusCode> {
    let Json(request) = request?;

    tracing::Span::current().record("notification", request.name.as_str());
    state.dispatcher.send(request, &caller.0).await?;

    Ok(StatusCode::NO_CONTENT)
}
