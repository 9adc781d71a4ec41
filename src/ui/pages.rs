//! Documents and HTMX fragments served by the router.

use leptos::prelude::*;

use super::components::{
    Badge, BadgeVariant, Card, CardContent, CardHeader, Input, PlaceholderChips, PlaceholderList,
    SkeletonLines, Textarea,
};
use super::render_html;
use crate::catalog::{Template, TemplateSummary};
use crate::placeholder::{PlaceholderRecord, RenderMode};

/// Document shell shared by every page.
#[component]
fn Shell(
    /// Document title, suffixed with the app name.
    title: String,
    /// Page body.
    children: Children,
) -> impl IntoView {
    view! {
        <!doctype html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{format!("{title} - Placard")}</title>

                // Optional: pages are complete without it, HTMX only adds swaps
                <script src="/static/vendor/htmx-2.0.8.min.js" defer=""></script>
                <link rel="stylesheet" href="/theme.css"/>
                <link rel="stylesheet" href="/static/app.css"/>
            </head>

            <body class="min-h-screen bg-background font-sans text-foreground antialiased">
                <header class="border-b border-border">
                    <nav class="container mx-auto flex h-14 max-w-4xl items-center px-4" hx-boost="true">
                        <a href="/" class="font-semibold">"Placard"</a>
                    </nav>
                </header>
                <main id="app" class="container mx-auto max-w-4xl space-y-6 px-4 py-6">
                    {children()}
                </main>
            </body>
        </html>
    }
}

/// Label paired with its control.
#[component]
fn Field(
    /// Label text.
    label: &'static str,
    /// `for` attribute.
    target: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label for=target class="text-sm font-medium">{label}</label>
            {children()}
        </div>
    }
}

fn count_label(count: usize) -> String {
    match count {
        1 => "1 placeholder".to_string(),
        n => format!("{n} placeholders"),
    }
}

/// Catalog overview.
#[must_use]
pub fn index_page(templates: Vec<TemplateSummary>) -> String {
    render_html(move || {
        let body = if templates.is_empty() {
            view! { <p class="text-muted-foreground">"No templates yet."</p> }.into_any()
        } else {
            templates
                .into_iter()
                .map(|summary| {
                    let TemplateSummary {
                        id,
                        name,
                        description,
                        placeholder_count,
                    } = summary;
                    let href = format!("/templates/{id}");
                    view! {
                        <Card>
                            <CardHeader class="flex-row items-center justify-between">
                                <a href=href class="text-lg font-semibold hover:underline">
                                    {name}
                                </a>
                                <Badge>{count_label(placeholder_count)}</Badge>
                            </CardHeader>
                            <CardContent>
                                <p class="text-sm text-muted-foreground">
                                    {description}
                                </p>
                            </CardContent>
                        </Card>
                    }
                })
                .collect_view()
                .into_any()
        };

        view! {
            <Shell title="Templates".to_string()>
                <h1 class="text-2xl font-bold">"Templates"</h1>
                {body}
            </Shell>
        }
    })
}

/// Template editor: name, body, placeholder chips and the inline summary.
///
/// The summary is rendered up front. With HTMX loaded, the mode links swap
/// it in place and the skeleton shows while a swap is in flight.
#[must_use]
pub fn template_page(template: Template) -> String {
    render_html(move || {
        let Template {
            id,
            name,
            description,
            body,
            placeholders,
        } = template;
        let fragment_url =
            |mode: &str| format!("/fragments/templates/{id}/placeholders?mode={mode}");
        let chips_url = fragment_url("chips");
        let inline_url = fragment_url("inline");
        let count = count_label(placeholders.len());
        let heading = name.clone();
        let summary = placeholders.clone();

        view! {
            <Shell title=name.clone()>
                <Card>
                    <CardHeader>
                        <div class="flex items-center justify-between">
                            <h1 class="text-2xl font-bold">{heading}</h1>
                            <Badge>{count}</Badge>
                        </div>
                        <p class="text-sm text-muted-foreground">{description}</p>
                    </CardHeader>
                    <CardContent class="space-y-4">
                        <Field label="Name" target="template-name">
                            <Input id="template-name" name="name" value=name/>
                        </Field>
                        <Field label="Body" target="template-body">
                            <Textarea id="template-body" name="body" rows=6 value=body/>
                        </Field>
                        <div class="space-y-2">
                            <h2 class="text-sm font-medium">"Placeholders"</h2>
                            <PlaceholderChips placeholders=placeholders/>
                        </div>
                        <div class="space-y-2">
                            <div class="flex items-center gap-3 text-sm">
                                <h2 class="font-medium">"Summary"</h2>
                                <a href=chips_url.clone() hx-get=chips_url hx-target="#placeholder-summary"
                                    hx-indicator="#summary-loading" class="underline">"Chips"</a>
                                <a href=inline_url.clone() hx-get=inline_url hx-target="#placeholder-summary"
                                    hx-indicator="#summary-loading" class="underline">"Inline"</a>
                            </div>
                            <div id="placeholder-summary">
                                <PlaceholderList placeholders=summary/>
                            </div>
                            <div id="summary-loading" class="htmx-indicator">
                                <SkeletonLines lines=2/>
                            </div>
                        </div>
                    </CardContent>
                </Card>
            </Shell>
        }
    })
}

/// A bare placeholder presentation for HTMX swaps.
#[must_use]
pub fn placeholder_fragment(placeholders: Vec<PlaceholderRecord>, mode: RenderMode) -> String {
    render_html(move || match mode {
        RenderMode::Chips => view! { <PlaceholderChips placeholders=placeholders/> }.into_any(),
        RenderMode::Inline => view! { <PlaceholderList placeholders=placeholders/> }.into_any(),
    })
}

/// Page shown for an unknown template id.
#[must_use]
pub fn not_found_page(id: &str) -> String {
    let id = id.to_string();
    render_html(move || {
        view! {
            <Shell title="Not found".to_string()>
                <p class="text-muted-foreground">
                    "No template named "
                    <Badge variant=BadgeVariant::Accent>{id}</Badge>
                </p>
                <a href="/" class="text-sm underline">"Back to templates"</a>
            </Shell>
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TemplateCatalog;

    #[test]
    fn index_lists_every_template() {
        let catalog = TemplateCatalog::builtin().unwrap();
        let html = index_page(catalog.list());

        assert!(html.to_lowercase().starts_with("<!doctype html>"));
        assert!(html.contains(r#"href="/templates/welcome""#));
        assert!(html.contains(r#"href="/templates/invite""#));
        assert!(html.contains("4 placeholders"));
    }

    #[test]
    fn index_without_templates_says_so() {
        let html = index_page(Vec::new());
        assert!(html.contains("No templates yet."));
    }

    #[test]
    fn template_page_renders_controls_and_chips() {
        let template = TemplateCatalog::builtin().unwrap().get("welcome").unwrap();
        let html = template_page(template);

        assert!(html.contains(r#"id="template-name""#));
        assert!(html.contains("<textarea"));
        assert!(html.contains(r#"data-placeholder-key="username""#));
        assert!(html.contains("data-placeholder-list"));
        assert!(html.contains("(workspace name)"));
        assert!(html.contains(r#"hx-get="/fragments/templates/welcome/placeholders?mode=inline""#));
        assert!(html.contains(r#"class="htmx-indicator""#));
        assert!(html.contains("animate-pulse"));
    }

    #[test]
    fn fragment_follows_mode() {
        let records = vec![PlaceholderRecord::braced("a")];
        let chips = placeholder_fragment(records.clone(), RenderMode::Chips);
        let inline = placeholder_fragment(records, RenderMode::Inline);

        assert!(chips.contains("data-placeholder-chips"));
        assert!(inline.contains("data-placeholder-list"));
        assert!(!inline.contains("<html"));
    }
}
