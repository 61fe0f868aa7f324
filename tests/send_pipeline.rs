//! End-to-end composition and dispatch tests
//!
//! Builds a catalog, dispatcher and projector the way the server does, with
//! a recording sender in place of a real transport.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;
use uuid::Uuid;

use ara_notification_composer::catalog::{
    DefinitionCatalog, NotificationDefinition, NotificationGroup,
};
use ara_notification_composer::localization::ResourceTranslator;
use ara_notification_composer::notification::{
    CallerContext, ComposedPayload, NotificationDispatcher, NotificationError, NotificationSender,
    SendRequest, Severity, TargetIdentity, TenantScope,
};
use ara_notification_composer::projection::CatalogProjector;

#[derive(Debug, Clone)]
struct Forwarded {
    name: String,
    payload: ComposedPayload,
    target: Option<TargetIdentity>,
    tenant: Option<TenantScope>,
    severity: Severity,
}

#[derive(Default)]
struct RecordingSender {
    calls: Mutex<Vec<Forwarded>>,
}

impl RecordingSender {
    fn calls(&self) -> Vec<Forwarded> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationSender for RecordingSender {
    async fn send_notification(
        &self,
        name: &str,
        payload: ComposedPayload,
        target: Option<TargetIdentity>,
        tenant: Option<TenantScope>,
        severity: Severity,
    ) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(Forwarded {
            name: name.to_string(),
            payload,
            target,
            tenant,
            severity,
        });
        Ok(())
    }
}

/// `order.created` is template-capable and subscribable;
/// `order.cancelled` is neither.
fn order_catalog() -> Arc<DefinitionCatalog> {
    let group = NotificationGroup::new("orders", "Orders")
        .subscribable(true)
        .with_notification(
            NotificationDefinition::new("order.created", "Order created")
                .with_template("tpl1")
                .subscribable(true),
        )
        .with_notification(NotificationDefinition::new("order.cancelled", "Order cancelled"));

    Arc::new(DefinitionCatalog::builder().group(group).unwrap().build())
}

struct Pipeline {
    dispatcher: NotificationDispatcher,
    projector: CatalogProjector,
    sender: Arc<RecordingSender>,
}

fn pipeline() -> Pipeline {
    let catalog = order_catalog();
    let sender = Arc::new(RecordingSender::default());
    let translator = Arc::new(ResourceTranslator::new("en").with_resource(
        "zh-Hans",
        [("Orders", "订单"), ("Order created", "订单已创建")],
    ));

    Pipeline {
        dispatcher: NotificationDispatcher::new(catalog.clone(), sender.clone()),
        projector: CatalogProjector::new(catalog, translator),
        sender,
    }
}

fn caller() -> CallerContext {
    CallerContext::new("en")
        .with_user(Some("Jane Doe".to_string()), Some("jdoe".to_string()))
        .with_tenant(Some(Uuid::nil()))
}

#[tokio::test]
async fn test_template_send_forwards_template_payload() {
    let p = pipeline();
    let request = SendRequest::builder("order.created")
        .template("tpl1")
        .field("orderId", 42)
        .build();

    tokio_test::assert_ok!(p.dispatcher.send(request, &caller()).await);

    let calls = p.sender.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].name, "order.created");
    assert_eq!(calls[0].target, None);
    assert_eq!(calls[0].tenant, Some(TenantScope(Uuid::nil())));
    assert_eq!(calls[0].severity, Severity::Info);

    match &calls[0].payload {
        ComposedPayload::Template(payload) => {
            assert_eq!(payload.definition_name, "order.created");
            assert_eq!(payload.culture, "en");
            assert_eq!(payload.from_user.as_deref(), Some("Jane Doe"));
            assert_eq!(payload.data.get("orderId"), Some(&json!(42)));
        }
        other => panic!("expected template payload, got {:?}", other),
    }
}

#[tokio::test]
async fn test_template_on_definition_without_template_is_rejected() {
    let p = pipeline();
    let request = SendRequest::builder("order.cancelled")
        .template("anything")
        .build();

    let err = tokio_test::assert_err!(p.dispatcher.send(request, &caller()).await);

    assert!(matches!(
        err,
        NotificationError::TemplateNotRegistered { ref template_name } if template_name == "anything"
    ));
    assert!(p.sender.calls().is_empty());
}

#[tokio::test]
async fn test_unknown_definition_is_rejected() {
    let p = pipeline();

    let err = tokio_test::assert_err!(
        p.dispatcher
            .send(SendRequest::builder("missing.def").build(), &caller())
            .await
    );

    assert!(matches!(
        err,
        NotificationError::DefinitionNotFound { ref name } if name == "missing.def"
    ));
    assert!(p.sender.calls().is_empty());
}

#[tokio::test]
async fn test_structured_send_to_user() {
    let p = pipeline();
    let user = Uuid::new_v4();
    let request: SendRequest = serde_json::from_value(json!({
        "name": "order.cancelled",
        "toUserId": user,
        "toUserName": "bob",
        "templateName": "  ",
        "severity": "Warn",
        "data": {"Subject": "Cancelled", "body": 7, "orderId": 42}
    }))
    .unwrap();

    tokio_test::assert_ok!(p.dispatcher.send(request, &caller()).await);

    let calls = p.sender.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].target,
        Some(TargetIdentity {
            user_id: user,
            user_name: Some("bob".to_string()),
        })
    );
    assert_eq!(calls[0].severity, Severity::Warn);

    let ComposedPayload::Structured(payload) = &calls[0].payload else {
        panic!("expected structured payload");
    };
    assert_eq!(payload.fields.get("title"), Some(&json!("Cancelled")));
    assert_eq!(payload.fields.get("message"), Some(&json!("7")));
    assert_eq!(payload.fields.get("orderId"), Some(&json!(42)));
    assert!(payload.fields.get("Subject").is_none());
}

#[tokio::test]
async fn test_assignable_views_follow_subscription_flags() {
    let p = pipeline();

    let groups = p.projector.assignable_notifiers("zh-Hans").await.unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].display_name, "订单");
    let names: Vec<&str> = groups[0]
        .notifications
        .iter()
        .map(|n| n.name.as_str())
        .collect();
    assert_eq!(names, vec!["order.created"]);

    let templates = p.projector.assignable_templates("en").await.unwrap();
    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0].name, "order.created");
    assert_eq!(templates[0].culture, "en");
    assert_eq!(templates[0].title, "Order created");
}
