//! Template catalog.
//!
//! The catalog is where placeholder sequences come from. Templates are loaded
//! from YAML (or the built-in set), validated once on insert, and handed out
//! as clones so callers never observe a partially updated template.
//!
//! # Architecture
//!
//! - [`Template`]: a message body plus its ordered placeholders
//! - [`TemplateCatalog`]: thread-safe in-memory store, insertion ordered
//! - [`defaults`]: templates available when no catalog file is configured

pub mod defaults;
mod store;
mod template;

pub use store::{CatalogFile, TemplateCatalog};
pub use template::{Template, TemplateDefinition, TemplateSummary, extract_placeholders};

/// Errors raised while assembling or using templates.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// No template with this id.
    #[error("Template not found: {0}")]
    NotFound(String),

    /// A template with this id already exists.
    #[error("Template already exists: {0}")]
    DuplicateTemplate(String),

    /// Two placeholders in one template share a key.
    #[error("Template '{template}' declares placeholder key '{key}' more than once")]
    DuplicateKey {
        /// Offending template id.
        template: String,
        /// Repeated key.
        key: String,
    },

    /// Template definition is unusable.
    #[error("Invalid template: {0}")]
    Invalid(String),

    /// Filling a template without a value for one of its placeholders.
    #[error("Missing value for placeholder '{0}'")]
    MissingValue(String),

    /// Catalog file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file is not valid YAML for a catalog.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
