//! Placeholder chips and inline placeholder lists.

use leptos::prelude::*;

use super::{Badge, BadgeVariant};
use crate::placeholder::{PlaceholderRecord, chips, inline_segments};

/// One accent badge per placeholder, showing only the token.
///
/// Renders nothing for an empty sequence.
///
/// # Example
///
/// ```rust,ignore
/// view! { <PlaceholderChips placeholders=template.placeholders.clone()/> }
/// ```
#[component]
pub fn PlaceholderChips(
    /// Ordered placeholders, keys unique.
    placeholders: Vec<PlaceholderRecord>,
    /// Additional CSS classes for the wrapper.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let items: Vec<(String, String)> = chips(&placeholders)
        .into_iter()
        .map(|chip| (chip.key.to_owned(), chip.label.to_owned()))
        .collect();

    (!items.is_empty()).then(|| {
        let classes = format!("flex flex-wrap gap-1.5 {class}");
        let badges = items
            .into_iter()
            .map(|(key, label)| {
                view! {
                    <li data-placeholder-key=key>
                        <Badge variant=BadgeVariant::Accent>{label}</Badge>
                    </li>
                }
            })
            .collect_view();

        view! { <ul class=classes data-placeholder-chips="">{badges}</ul> }
    })
}

/// The placeholders as one sentence: `{user} (username), {id}.`
///
/// Renders nothing for an empty sequence.
#[component]
pub fn PlaceholderList(
    /// Ordered placeholders.
    placeholders: Vec<PlaceholderRecord>,
) -> impl IntoView {
    let items: Vec<(String, Option<String>, &'static str)> = inline_segments(&placeholders)
        .into_iter()
        .map(|segment| {
            (
                segment.token.to_owned(),
                segment.description.map(|d| format!(" ({d})")),
                segment.separator.as_str(),
            )
        })
        .collect();

    (!items.is_empty()).then(|| {
        let segments = items
            .into_iter()
            .enumerate()
            .map(|(index, (token, description, separator))| {
                let gap = (index > 0).then_some(" ");
                view! {
                    {gap}
                    <span class="whitespace-nowrap">
                        <code class="rounded bg-muted px-1 font-mono text-foreground">{token}</code>
                        {description}
                        {separator}
                    </span>
                }
            })
            .collect_view();

        view! {
            <p class="text-sm text-muted-foreground" data-placeholder-list="">
                {segments}
            </p>
        }
    })
}
