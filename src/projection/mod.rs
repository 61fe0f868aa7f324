//! Read-side views over the definition catalog: notifiers clients may
//! subscribe to, and notifications that can be sent from a template.

use std::sync::Arc;

use serde::Serialize;

use crate::catalog::{
    DefinitionCatalog, LocalizableText, NotificationContentType, NotificationDefinition,
    NotificationLifetime, NotificationType,
};
use crate::localization::Translator;
use crate::notification::NotificationError;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationGroupView {
    pub name: String,
    pub display_name: String,
    pub notifications: Vec<NotificationView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationView {
    pub name: String,
    pub display_name: String,
    /// Localized description, or the raw name when none is registered
    pub description: String,
    pub lifetime: NotificationLifetime,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub content_type: NotificationContentType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationTemplateView {
    pub name: String,
    pub culture: String,
    pub title: String,
    pub description: Option<String>,
}

/// Builds localized listings from the catalog
pub struct CatalogProjector {
    catalog: Arc<DefinitionCatalog>,
    translator: Arc<dyn Translator>,
}

impl CatalogProjector {
    pub fn new(catalog: Arc<DefinitionCatalog>, translator: Arc<dyn Translator>) -> Self {
        Self {
            catalog,
            translator,
        }
    }

    /// Groups and definitions clients may subscribe to.
    ///
    /// Filtering is per group and per definition; a subscribable group whose
    /// definitions are all filtered out is still listed with no entries.
    #[tracing::instrument(name = "projector.assignable_notifiers", skip(self))]
    pub async fn assignable_notifiers(
        &self,
        culture: &str,
    ) -> Result<Vec<NotificationGroupView>, NotificationError> {
        let mut groups = Vec::new();

        for group in self
            .catalog
            .groups()
            .iter()
            .filter(|g| g.allow_subscription_to_clients)
        {
            let mut notifications = Vec::new();

            for definition in group
                .notifications
                .iter()
                .filter(|d| d.allow_subscription_to_clients)
            {
                notifications.push(self.notifier_view(definition, culture).await?);
            }

            groups.push(NotificationGroupView {
                name: group.name.clone(),
                display_name: self.localize(&group.display_name, culture).await?,
                notifications,
            });
        }

        Ok(groups)
    }

    /// Every definition that carries a template
    #[tracing::instrument(name = "projector.assignable_templates", skip(self))]
    pub async fn assignable_templates(
        &self,
        culture: &str,
    ) -> Result<Vec<NotificationTemplateView>, NotificationError> {
        let mut templates = Vec::new();

        for definition in self.catalog.definitions().filter(|d| d.has_template()) {
            let description = match &definition.description {
                Some(text) => Some(self.localize(text, culture).await?),
                None => None,
            };

            templates.push(NotificationTemplateView {
                name: definition.name.clone(),
                culture: culture.to_string(),
                title: self.localize(&definition.display_name, culture).await?,
                description,
            });
        }

        Ok(templates)
    }

    async fn notifier_view(
        &self,
        definition: &NotificationDefinition,
        culture: &str,
    ) -> Result<NotificationView, NotificationError> {
        let description = match &definition.description {
            Some(text) => self.localize(text, culture).await?,
            None => definition.name.clone(),
        };

        Ok(NotificationView {
            name: definition.name.clone(),
            display_name: self.localize(&definition.display_name, culture).await?,
            description,
            lifetime: definition.lifetime,
            notification_type: definition.notification_type,
            content_type: definition.content_type,
        })
    }

    async fn localize(&self, text: &LocalizableText, culture: &str) -> Result<String, NotificationError> {
        self.translator
            .localize(text, culture)
            .await
            .map_err(NotificationError::Localization)
    }
}
