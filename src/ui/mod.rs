//! UI components and pages.
//!
//! This module provides Leptos SSR components for rendering the catalog
//! pages and HTMX fragments, following ShadCN-UI design principles.
//!
//! # Structure
//!
//! - [`components`]: Reusable ShadCN-style UI components
//! - [`pages`]: Full documents and fragments served by the router

pub mod components;
pub mod pages;

use leptos::prelude::*;

/// Render a view to an HTML string inside a fresh reactive owner.
///
/// # Example
///
/// ```rust
/// use leptos::prelude::*;
/// use placard::ui::{components::Badge, render_html};
///
/// let html = render_html(|| view! { <Badge>"draft"</Badge> });
/// assert!(html.contains("draft"));
/// ```
pub fn render_html<F, V>(view: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    let owner = Owner::new();
    owner.with(|| view().to_html())
}
