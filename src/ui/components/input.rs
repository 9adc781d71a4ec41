//! Input and textarea form controls.

use leptos::prelude::*;

const FIELD_CLASSES: &str = "flex w-full rounded-md border border-input bg-background px-3 py-2 \
                             text-sm text-foreground placeholder:text-muted-foreground \
                             focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring \
                             focus-visible:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50";

/// Text input component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Input
///         input_type="text"
///         placeholder="Template name"
///         name="name"
///         value=template.name.clone()
///     />
/// }
/// ```
#[component]
pub fn Input(
    /// Input type (text, email, password, etc.).
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text.
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input name attribute.
    #[prop(default = "")]
    name: &'static str,
    /// Input ID attribute.
    #[prop(default = "")]
    id: &'static str,
    /// Whether the input is disabled.
    #[prop(default = false)]
    disabled: bool,
    /// Whether the input is required.
    #[prop(default = false)]
    required: bool,
    /// Current value.
    #[prop(into, default = String::new())]
    value: String,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Autocomplete attribute.
    #[prop(default = "off")]
    autocomplete: &'static str,
) -> impl IntoView {
    let classes = format!("{FIELD_CLASSES} h-10 {class}");

    view! {
        <input
            type=input_type
            class=classes
            placeholder=placeholder
            name=name
            id=id
            disabled=disabled
            required=required
            value=value
            autocomplete=autocomplete
        />
    }
}

/// Textarea component for multi-line input such as template bodies.
#[component]
pub fn Textarea(
    /// Placeholder text.
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input name attribute.
    #[prop(default = "")]
    name: &'static str,
    /// Input ID attribute.
    #[prop(default = "")]
    id: &'static str,
    /// Number of rows.
    #[prop(default = 3)]
    rows: u32,
    /// Whether the input is disabled.
    #[prop(default = false)]
    disabled: bool,
    /// Whether the input is required.
    #[prop(default = false)]
    required: bool,
    /// Initial text content.
    #[prop(into, default = String::new())]
    value: String,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!("{FIELD_CLASSES} min-h-[80px] resize-y font-mono {class}");

    view! {
        <textarea
            class=classes
            placeholder=placeholder
            name=name
            id=id
            rows=rows
            disabled=disabled
            required=required
        >
            {value}
        </textarea>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render_html;

    #[test]
    fn input_carries_value_and_name() {
        let html = render_html(|| {
            view! { <Input name="name" value="Welcome" required=true/> }
        });
        assert!(html.starts_with("<input"));
        assert!(html.contains(r#"name="name""#));
        assert!(html.contains(r#"value="Welcome""#));
        assert!(html.contains("required"));
        assert!(html.contains("border-input"));
    }

    #[test]
    fn textarea_renders_value_as_content() {
        let html = render_html(|| {
            view! { <Textarea name="body" rows=6 value="Hello {username}"/> }
        });
        assert!(html.starts_with("<textarea"));
        assert!(html.contains(r#"rows="6""#));
        assert!(html.contains("Hello {username}"));
        assert!(html.ends_with("</textarea>"));
    }
}
