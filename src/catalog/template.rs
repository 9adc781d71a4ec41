//! Templates and their definitions.

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::CatalogError;
use crate::placeholder::PlaceholderRecord;

/// A template as written in a catalog file or posted to the API.
///
/// `placeholders` may be omitted, in which case they are derived from the
/// `{name}` markers found in `body`.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub body: String,
    #[serde(default)]
    pub placeholders: Option<Vec<PlaceholderRecord>>,
}

/// A validated template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    /// Unique template identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional longer explanation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Message body containing the placeholder tokens.
    pub body: String,
    /// Ordered placeholders, keys unique.
    pub placeholders: Vec<PlaceholderRecord>,
}

/// Listing entry for a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateSummary {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub placeholder_count: usize,
}

impl TryFrom<TemplateDefinition> for Template {
    type Error = CatalogError;

    fn try_from(def: TemplateDefinition) -> Result<Self, Self::Error> {
        if def.id.trim().is_empty() {
            return Err(CatalogError::Invalid("template id cannot be empty".to_string()));
        }

        let placeholders = def
            .placeholders
            .unwrap_or_else(|| extract_placeholders(&def.body));

        let mut seen = HashSet::new();
        for record in &placeholders {
            if !seen.insert(record.key.as_str()) {
                return Err(CatalogError::DuplicateKey {
                    template: def.id.clone(),
                    key: record.key.clone(),
                });
            }
        }

        Ok(Self {
            id: def.id,
            name: def.name,
            description: def.description,
            body: def.body,
            placeholders,
        })
    }
}

impl Template {
    /// Summary used by listings.
    #[must_use]
    pub fn summary(&self) -> TemplateSummary {
        TemplateSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            placeholder_count: self.placeholders.len(),
        }
    }

    /// Substitute every placeholder token in the body with the value stored
    /// under its key. Values for unknown keys are ignored.
    ///
    /// The body is scanned once; substituted values are never rescanned, so
    /// a value that looks like another token is kept literally. Where tokens
    /// overlap the longest match wins.
    pub fn fill(&self, values: &HashMap<String, String>) -> Result<String, CatalogError> {
        let slots = self
            .placeholders
            .iter()
            .map(|record| {
                values
                    .get(&record.key)
                    .map(|value| (record.token.as_str(), value.as_str()))
                    .ok_or_else(|| CatalogError::MissingValue(record.key.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut filled = String::with_capacity(self.body.len());
        let mut rest = self.body.as_str();
        while let Some(ch) = rest.chars().next() {
            let hit = slots
                .iter()
                .filter(|&&(token, _)| !token.is_empty() && rest.starts_with(token))
                .min_by_key(|&&(token, _)| Reverse(token.len()));
            match hit {
                Some(&(token, value)) => {
                    filled.push_str(value);
                    rest = &rest[token.len()..];
                }
                None => {
                    filled.push(ch);
                    rest = &rest[ch.len_utf8()..];
                }
            }
        }
        Ok(filled)
    }
}

/// Derive placeholders from `{name}` markers, first occurrence wins.
///
/// Names are ASCII alphanumerics plus `_`, `-` and `.`; anything else between
/// braces is left alone.
pub fn extract_placeholders(body: &str) -> Vec<PlaceholderRecord> {
    let mut found: Vec<PlaceholderRecord> = Vec::new();
    let mut rest = body;

    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            break;
        };
        let name = &after[..close];
        if is_marker_name(name) {
            if !found.iter().any(|r| r.key == name) {
                found.push(PlaceholderRecord::braced(name));
            }
            rest = &after[close + 1..];
        } else {
            rest = after;
        }
    }

    found
}

fn is_marker_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
