//! Thread-safe template storage.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use serde::Deserialize;

use super::{CatalogError, Template, TemplateDefinition, TemplateSummary, defaults};
use crate::placeholder::PlaceholderRecord;

/// On-disk catalog layout.
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub templates: Vec<TemplateDefinition>,
}

/// In-memory template catalog.
///
/// Clones share the same storage. Listing order is insertion order.
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    inner: Arc<RwLock<CatalogInner>>,
}

#[derive(Debug, Default)]
struct CatalogInner {
    order: Vec<String>,
    templates: HashMap<String, Template>,
}

impl TemplateCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog populated with the built-in templates.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_definitions(defaults::builtin_templates())
    }

    /// Build a catalog from definitions, failing on the first invalid one.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = TemplateDefinition>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self::new();
        for def in definitions {
            catalog.insert(def)?;
        }
        Ok(catalog)
    }

    /// Parse a YAML catalog document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_yaml::from_str(yaml)?;
        Self::from_definitions(file.templates)
    }

    /// Load a YAML catalog file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_yaml_str(&content)?;
        tracing::info!(
            name: "catalog.loaded",
            path = %path.display(),
            templates = catalog.len(),
            "Template catalog loaded"
        );
        Ok(catalog)
    }

    /// Validate and add a template. Ids must be unique.
    pub fn insert(&self, definition: TemplateDefinition) -> Result<Template, CatalogError> {
        let template = Template::try_from(definition)?;
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if guard.templates.contains_key(&template.id) {
            return Err(CatalogError::DuplicateTemplate(template.id));
        }
        guard.order.push(template.id.clone());
        guard
            .templates
            .insert(template.id.clone(), template.clone());
        drop(guard);

        tracing::debug!(template_id = %template.id, "Template registered");
        Ok(template)
    }

    /// Look up a template by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Template> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .templates
            .get(id)
            .cloned()
    }

    /// Remove a template. Returns whether it existed.
    pub fn remove(&self, id: &str) -> bool {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if guard.templates.remove(id).is_none() {
            return false;
        }
        guard.order.retain(|existing| existing != id);
        true
    }

    /// Summaries of all templates, in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<TemplateSummary> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        guard
            .order
            .iter()
            .filter_map(|id| guard.templates.get(id))
            .map(Template::summary)
            .collect()
    }

    /// The placeholder sequence for a template.
    pub fn placeholders(&self, id: &str) -> Result<Vec<PlaceholderRecord>, CatalogError> {
        self.get(id)
            .map(|template| template.placeholders)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .templates
            .len()
    }

    /// Whether the catalog holds no templates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
