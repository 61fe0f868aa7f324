use std::sync::Arc;

use crate::catalog::{DefinitionCatalog, NotificationDefinition};

use super::{
    CallerContext, ComposedPayload, NotificationData, NotificationError, SendRequest,
    StructuredPayload, TemplatePayload,
};

/// Turns a send request into exactly one payload shape.
///
/// Template mode is chosen solely by the presence of a template name on the
/// request; it is only valid for definitions that carry a template.
/// Otherwise the request data is normalized into a structured payload.
#[derive(Debug, Clone)]
pub struct PayloadComposer {
    catalog: Arc<DefinitionCatalog>,
}

impl PayloadComposer {
    pub fn new(catalog: Arc<DefinitionCatalog>) -> Self {
        Self { catalog }
    }

    /// Resolve the request's definition and build its payload
    #[tracing::instrument(
        name = "composer.compose",
        skip(self, request, ctx),
        fields(notification = %request.name)
    )]
    pub fn compose(
        &self,
        request: &SendRequest,
        ctx: &CallerContext,
    ) -> Result<ComposedPayload, NotificationError> {
        // lookup by name only fails for unregistered names
        let definition = self.catalog.get_by_name(&request.name).map_err(|_| {
            NotificationError::DefinitionNotFound {
                name: request.name.clone(),
            }
        })?;

        match request.requested_template() {
            Some(template_name) => compose_template(definition, template_name, request, ctx),
            None => Ok(compose_structured(request)),
        }
    }
}

fn compose_template(
    definition: &NotificationDefinition,
    template_name: &str,
    request: &SendRequest,
    ctx: &CallerContext,
) -> Result<ComposedPayload, NotificationError> {
    if !definition.has_template() {
        tracing::debug!(
            notification = %definition.name,
            template_name = %template_name,
            "Template requested for a definition without template"
        );
        return Err(NotificationError::TemplateNotRegistered {
            template_name: template_name.to_string(),
        });
    }

    Ok(ComposedPayload::Template(TemplatePayload {
        definition_name: definition.name.clone(),
        culture: request
            .culture
            .clone()
            .unwrap_or_else(|| ctx.culture.clone()),
        from_user: ctx.from_user().map(str::to_string),
        data: request.data.clone(),
    }))
}

fn compose_structured(request: &SendRequest) -> ComposedPayload {
    let mut data = NotificationData::new();
    data.add_if_absent(request.data.clone());

    ComposedPayload::Structured(StructuredPayload {
        fields: data.standardize().into_properties(),
    })
}
