//! Translator abstraction and a resource-file backed implementation.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

use crate::catalog::LocalizableText;
use crate::config::LocalizationConfig;

use super::culture::culture_chain;

/// Errors raised while loading localization resources
#[derive(Debug, Error)]
pub enum LocalizationError {
    #[error("Failed to read localization resources: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid resource file {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Resolves localizable texts into display strings.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Localize `text` for `culture`.
    async fn localize(&self, text: &LocalizableText, culture: &str) -> anyhow::Result<String>;
}

/// Translator over in-memory key/value tables, one table per culture.
///
/// Lookup tries the requested culture, each of its parents, then the default
/// culture. Within a culture a resource-qualified key (`Resource:Key`) wins
/// over the bare key. When nothing matches the key itself is returned.
#[derive(Debug, Clone)]
pub struct ResourceTranslator {
    default_culture: String,
    resources: HashMap<String, HashMap<String, String>>,
}

impl ResourceTranslator {
    pub fn new(default_culture: impl Into<String>) -> Self {
        Self {
            default_culture: default_culture.into(),
            resources: HashMap::new(),
        }
    }

    /// Add (or extend) the table for a culture
    pub fn with_resource<I, K, V>(mut self, culture: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.resources
            .entry(culture.into())
            .or_default()
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Build from configuration, loading `<culture>.json` files when a
    /// resource directory is configured.
    pub fn from_config(config: &LocalizationConfig) -> Result<Self, LocalizationError> {
        let translator = Self::new(&config.default_culture);

        match &config.resource_path {
            Some(path) => translator.load_dir(path),
            None => Ok(translator),
        }
    }

    fn load_dir(mut self, dir: impl AsRef<Path>) -> Result<Self, LocalizationError> {
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            let Some(culture) = path.file_stem().and_then(|s| s.to_str()).map(str::to_string)
            else {
                continue;
            };

            let content = std::fs::read_to_string(&path)?;
            let entries: HashMap<String, String> =
                serde_json::from_str(&content).map_err(|source| LocalizationError::Parse {
                    file: path.display().to_string(),
                    source,
                })?;

            tracing::debug!(culture = %culture, entries = entries.len(), "Loaded localization resource");
            self = self.with_resource(culture, entries);
        }

        Ok(self)
    }

    pub fn default_culture(&self) -> &str {
        &self.default_culture
    }

    fn lookup(&self, text: &LocalizableText, culture: &str) -> Option<&str> {
        let qualified = text
            .resource
            .as_ref()
            .map(|resource| format!("{}:{}", resource, text.key));

        culture_chain(culture)
            .chain(std::iter::once(self.default_culture.as_str()))
            .filter_map(|c| self.resources.get(c))
            .find_map(|table| {
                qualified
                    .as_deref()
                    .and_then(|k| table.get(k))
                    .or_else(|| table.get(&text.key))
            })
            .map(String::as_str)
    }
}

#[async_trait]
impl Translator for ResourceTranslator {
    async fn localize(&self, text: &LocalizableText, culture: &str) -> anyhow::Result<String> {
        Ok(self
            .lookup(text, culture)
            .map(str::to_string)
            .unwrap_or_else(|| text.key.clone()))
    }
}
