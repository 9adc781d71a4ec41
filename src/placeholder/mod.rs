//! Placeholder records and their two presentation modes.
//!
//! A template exposes an ordered list of [`PlaceholderRecord`]s. This module
//! turns such a list into either discrete chips or a single inline sentence,
//! without touching the records themselves.
//!
//! # Example
//!
//! ```rust
//! use placard::placeholder::{PlaceholderRecord, inline_text};
//!
//! let records = vec![
//!     PlaceholderRecord::new("a", "{user}").with_description("username"),
//!     PlaceholderRecord::new("b", "{id}"),
//! ];
//!
//! assert_eq!(inline_text(&records), "{user} (username), {id}.");
//! ```

mod record;
mod render;

pub use record::PlaceholderRecord;
pub use render::{
    Chip, InlineSegment, RenderMode, Rendered, Separator, chips, inline_segments, inline_text,
    render,
};
