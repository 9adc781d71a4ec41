//! Skeleton loading placeholders.

use leptos::prelude::*;

/// A single pulsing block shown while content loads.
#[component]
pub fn Skeleton(
    /// Size and shape classes, e.g. `h-4 w-32`.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!("animate-pulse rounded-md bg-muted {class}");

    view! { <div class=classes aria-hidden="true"></div> }
}

/// Stacked text-line skeletons; the last line is shortened.
#[component]
pub fn SkeletonLines(
    /// Number of lines.
    #[prop(default = 3)]
    lines: usize,
) -> impl IntoView {
    let rows = (0..lines)
        .map(|index| {
            let width = if index + 1 == lines { "h-4 w-2/3" } else { "h-4 w-full" };
            view! { <Skeleton class=width/> }
        })
        .collect_view();

    view! {
        <div class="space-y-2" role="status" aria-label="Loading">
            {rows}
        </div>
    }
}
