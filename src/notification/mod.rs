//! Notification composition and dispatching.
//!
//! A [`SendRequest`] is resolved against the definition catalog by the
//! [`PayloadComposer`], which produces either a template payload or a
//! standardized structured payload. The [`NotificationDispatcher`] adds the
//! recipient and tenant and forwards the result to a [`NotificationSender`].

mod address;
mod composer;
mod data;
mod dispatcher;
mod error;
mod sender;
mod types;

pub use address::resolve_target;
pub use composer::PayloadComposer;
pub use data::NotificationData;
pub use dispatcher::NotificationDispatcher;
pub use error::NotificationError;
pub use sender::{LoggingSender, NotificationSender};
pub use types::{
    CallerContext, ComposedPayload, SendRequest, SendRequestBuilder, Severity, StructuredPayload,
    TargetIdentity, TemplatePayload, TenantScope,
};
