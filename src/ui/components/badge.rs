//! Badge component for short labels and placeholder chips.

use leptos::prelude::*;

/// Badge visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Muted badge for secondary information.
    #[default]
    Neutral,
    /// Highlighted badge, used for placeholder chips.
    Accent,
}

impl BadgeVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Neutral => "border border-border bg-muted text-muted-foreground",
            Self::Accent => "border border-transparent bg-accent text-accent-foreground",
        }
    }
}

/// Badge component for displaying a label.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Badge>"3 placeholders"</Badge>
///     <Badge variant=BadgeVariant::Accent>"{username}"</Badge>
/// }
/// ```
#[component]
pub fn Badge(
    /// Badge variant.
    #[prop(default = BadgeVariant::Neutral)]
    variant: BadgeVariant,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Badge content.
    children: Children,
) -> impl IntoView {
    let base_classes = "inline-flex items-center rounded-md px-2.5 py-0.5 font-mono text-xs \
                        font-semibold transition-colors";

    let classes = format!("{} {} {}", base_classes, variant.classes(), class);

    view! {
        <span class=classes>
            {children()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render_html;

    #[test]
    fn variants_map_to_distinct_tokens() {
        assert!(BadgeVariant::Accent.classes().contains("bg-accent"));
        assert!(BadgeVariant::Neutral.classes().contains("bg-muted"));
        assert_eq!(BadgeVariant::default(), BadgeVariant::Neutral);
    }

    #[test]
    fn renders_span_with_variant_classes() {
        let html = render_html(|| {
            view! { <Badge variant=BadgeVariant::Accent class="ml-1">"new"</Badge> }
        });
        assert!(html.starts_with("<span"));
        assert!(html.contains("bg-accent text-accent-foreground ml-1"));
        assert!(html.contains("new"));
    }
}
