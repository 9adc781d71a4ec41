//! Chip and inline-list rendering of placeholder sequences.
//!
//! Both modes are pure functions of the input slice. Duplicate keys are not
//! checked here; the catalog rejects them before a sequence gets this far.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::PlaceholderRecord;

/// Which presentation to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// One discrete element per record.
    #[default]
    Chips,
    /// A single punctuated sentence.
    Inline,
}

/// One chip: the record key paired with the label shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chip<'a> {
    /// Positional identity of the chip.
    pub key: &'a str,
    /// The token, verbatim.
    pub label: &'a str,
}

/// Punctuation that closes one inline segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// Any segment but the last.
    Comma,
    /// The final segment.
    Period,
}

impl Separator {
    /// The punctuation character as a string slice.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Comma => ",",
            Self::Period => ".",
        }
    }
}

impl Serialize for Separator {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// One record's share of the inline sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InlineSegment<'a> {
    /// The token, verbatim.
    pub token: &'a str,
    /// Parenthesized after the token when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    /// Closing punctuation.
    pub separator: Separator,
}

impl fmt::Display for InlineSegment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token)?;
        if let Some(description) = self.description {
            write!(f, " ({description})")?;
        }
        f.write_str(self.separator.as_str())
    }
}

/// Result of rendering a sequence in either mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Rendered<'a> {
    /// Chip mode output.
    Chips {
        /// Chips in input order.
        chips: Vec<Chip<'a>>,
    },
    /// Inline mode output.
    Inline {
        /// The composed sentence.
        text: String,
        /// Per-record pieces of `text`.
        segments: Vec<InlineSegment<'a>>,
    },
}

/// Chip mode: one chip per record, in input order.
pub fn chips(records: &[PlaceholderRecord]) -> Vec<Chip<'_>> {
    records
        .iter()
        .map(|record| Chip {
            key: &record.key,
            label: &record.token,
        })
        .collect()
}

/// Inline mode, segmented: commas after every record but the last, which
/// gets a period.
pub fn inline_segments(records: &[PlaceholderRecord]) -> Vec<InlineSegment<'_>> {
    let last = records.len().saturating_sub(1);
    records
        .iter()
        .enumerate()
        .map(|(index, record)| InlineSegment {
            token: &record.token,
            description: record.description.as_deref(),
            separator: if index == last {
                Separator::Period
            } else {
                Separator::Comma
            },
        })
        .collect()
}

/// Inline mode as a single string, segments joined by one space.
///
/// An empty slice yields an empty string.
pub fn inline_text(records: &[PlaceholderRecord]) -> String {
    join_segments(&inline_segments(records))
}

fn join_segments(segments: &[InlineSegment<'_>]) -> String {
    segments
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render `records` in the requested mode.
pub fn render(records: &[PlaceholderRecord], mode: RenderMode) -> Rendered<'_> {
    match mode {
        RenderMode::Chips => Rendered::Chips {
            chips: chips(records),
        },
        RenderMode::Inline => {
            let segments = inline_segments(records);
            Rendered::Inline {
                text: join_segments(&segments),
                segments,
            }
        }
    }
}
