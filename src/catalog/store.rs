//! Read-only definition registry

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::CatalogConfig;

use super::types::{CatalogError, CatalogResult, NotificationDefinition, NotificationGroup};

const MAX_NAME_LEN: usize = 128;

/// Registry of notification groups and definitions.
///
/// Built once at startup and never mutated afterwards, so it can be shared
/// behind an `Arc` without locking.
#[derive(Debug, Default)]
pub struct DefinitionCatalog {
    groups: Vec<NotificationGroup>,
    /// definition name -> (group index, definition index)
    index: HashMap<String, (usize, usize)>,
}

impl DefinitionCatalog {
    /// Start registering groups
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Build a catalog from the `catalog` configuration section
    pub fn from_config(config: &CatalogConfig) -> CatalogResult<Self> {
        config
            .groups
            .iter()
            .cloned()
            .try_fold(Self::builder(), CatalogBuilder::group)
            .map(CatalogBuilder::build)
    }

    /// All groups in registration order
    pub fn groups(&self) -> &[NotificationGroup] {
        &self.groups
    }

    /// All definitions across groups, in registration order
    pub fn definitions(&self) -> impl Iterator<Item = &NotificationDefinition> {
        self.groups.iter().flat_map(|g| g.notifications.iter())
    }

    /// Look up a definition by its exact, case-sensitive name
    pub fn get_by_name(&self, name: &str) -> CatalogResult<&NotificationDefinition> {
        self.index
            .get(name)
            .map(|&(g, d)| &self.groups[g].notifications[d])
            .ok_or_else(|| CatalogError::DefinitionNotFound {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of registered definitions
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// Collects groups and validates names before the catalog is frozen
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    groups: Vec<NotificationGroup>,
    index: HashMap<String, (usize, usize)>,
}

impl CatalogBuilder {
    /// Register a group together with its definitions
    pub fn group(mut self, group: NotificationGroup) -> CatalogResult<Self> {
        validate_name(&group.name)?;

        if self.groups.iter().any(|g| g.name == group.name) {
            return Err(CatalogError::DuplicateGroup(group.name));
        }

        let group_idx = self.groups.len();
        let mut staged = HashMap::with_capacity(group.notifications.len());

        for (def_idx, definition) in group.notifications.iter().enumerate() {
            validate_name(&definition.name)?;

            if self.index.contains_key(&definition.name) || staged.contains_key(&definition.name) {
                return Err(CatalogError::DuplicateDefinition(definition.name.clone()));
            }

            staged.insert(definition.name.clone(), (group_idx, def_idx));
        }

        self.index.extend(staged);
        self.groups.push(group);

        Ok(self)
    }

    pub fn build(self) -> DefinitionCatalog {
        tracing::debug!(
            groups = self.groups.len(),
            definitions = self.index.len(),
            "Notification catalog built"
        );

        DefinitionCatalog {
            groups: self.groups,
            index: self.index,
        }
    }
}

fn validate_name(name: &str) -> CatalogResult<()> {
    if name.trim().is_empty() || name.len() > MAX_NAME_LEN {
        return Err(CatalogError::InvalidName(format!(
            "'{}' must be 1-{} characters",
            name, MAX_NAME_LEN
        )));
    }

    if name.trim() != name {
        return Err(CatalogError::InvalidName(format!(
            "'{}' must not have surrounding whitespace",
            name
        )));
    }

    Ok(())
}

/// Create an Arc-wrapped catalog from configuration
pub fn create_catalog(config: &CatalogConfig) -> CatalogResult<Arc<DefinitionCatalog>> {
    DefinitionCatalog::from_config(config).map(Arc::new)
}
