//! The placeholder record value type.

use serde::{Deserialize, Serialize};

/// A single substitution marker offered by a template.
///
/// `key` identifies the record inside one sequence and is never displayed.
/// `token` is shown verbatim, `description` explains what gets substituted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderRecord {
    /// Stable identifier, unique within one sequence.
    pub key: String,
    /// Display string, usually a braced marker such as `{username}`.
    pub token: String,
    /// Optional human-readable explanation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PlaceholderRecord {
    /// Create a record without a description.
    pub fn new(key: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            token: token.into(),
            description: None,
        }
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Build the conventional `{key}` record for a bare marker name.
    pub fn braced(name: &str) -> Self {
        Self::new(name, format!("{{{name}}}"))
    }
}
