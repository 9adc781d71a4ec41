//! Card container with header and content sections.

use leptos::prelude::*;

/// Card container component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Card>
///         <CardHeader>
///             <h3>"Welcome message"</h3>
///         </CardHeader>
///         <CardContent>
///             <PlaceholderList placeholders=records/>
///         </CardContent>
///     </Card>
/// }
/// ```
#[component]
pub fn Card(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Card content.
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "rounded-lg border border-border bg-background text-foreground shadow-sm {class}"
    );

    view! {
        <section class=classes>
            {children()}
        </section>
    }
}

/// Card header section.
#[component]
pub fn CardHeader(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Header content.
    children: Children,
) -> impl IntoView {
    let classes = format!("flex flex-col space-y-1.5 p-6 {class}");

    view! {
        <header class=classes>
            {children()}
        </header>
    }
}

/// Card content section.
#[component]
pub fn CardContent(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Content.
    children: Children,
) -> impl IntoView {
    let classes = format!("p-6 pt-0 {class}");

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}
