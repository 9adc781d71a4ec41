//! ShadCN-style reusable UI components.
//!
//! This module provides the composable primitives every page is built from,
//! rendered via Leptos SSR. Colors come exclusively from the semantic
//! classes defined by [`crate::theme`].
//!
//! # Components
//!
//! - [`Badge`]: Short label with a [`BadgeVariant`]
//! - [`Input`], [`Textarea`]: Form controls
//! - [`Skeleton`], [`SkeletonLines`]: Loading placeholders
//! - [`Card`], [`CardHeader`], [`CardContent`]: Card container
//! - [`PlaceholderChips`], [`PlaceholderList`]: Placeholder presentations

mod badge;
mod card;
mod input;
mod placeholder;
mod skeleton;

pub use badge::{Badge, BadgeVariant};
pub use card::{Card, CardContent, CardHeader};
pub use input::{Input, Textarea};
pub use placeholder::{PlaceholderChips, PlaceholderList};
pub use skeleton::{Skeleton, SkeletonLines};
