//! Typed Tailwind theme.
//!
//! Components only use semantic utility classes (`bg-accent`,
//! `text-muted-foreground`, `border-input`, ...). The concrete colors live
//! here as HSL triplets and reach the browser two ways:
//!
//! - [`Theme::css_variables`]: a `:root` block of CSS custom properties
//! - [`Theme::tailwind_config`]: the `theme.extend` object Tailwind needs to
//!   map the semantic names onto those properties
//!
//! Every field has a default, so a config file may override any subset:
//!
//! ```yaml
//! theme:
//!   radius: 0.75rem
//!   colors:
//!     accent: "262 83% 58%"
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// Semantic color palette, each value an HSL triplet without `hsl()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    pub background: String,
    pub foreground: String,
    pub muted: String,
    pub muted_foreground: String,
    pub accent: String,
    pub accent_foreground: String,
    pub border: String,
    pub input: String,
    pub ring: String,
    pub primary: String,
    pub primary_foreground: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            background: "240 10% 3.9%".to_string(),
            foreground: "0 0% 98%".to_string(),
            muted: "240 3.7% 15.9%".to_string(),
            muted_foreground: "240 5% 64.9%".to_string(),
            accent: "217 91% 60%".to_string(),
            accent_foreground: "0 0% 100%".to_string(),
            border: "240 3.7% 15.9%".to_string(),
            input: "240 3.7% 15.9%".to_string(),
            ring: "217 91% 60%".to_string(),
            primary: "0 0% 98%".to_string(),
            primary_foreground: "240 5.9% 10%".to_string(),
        }
    }
}

impl ThemeColors {
    /// `(css name, value)` pairs in a stable order.
    pub fn entries(&self) -> [(&'static str, &str); 11] {
        [
            ("background", &self.background),
            ("foreground", &self.foreground),
            ("muted", &self.muted),
            ("muted-foreground", &self.muted_foreground),
            ("accent", &self.accent),
            ("accent-foreground", &self.accent_foreground),
            ("border", &self.border),
            ("input", &self.input),
            ("ring", &self.ring),
            ("primary", &self.primary),
            ("primary-foreground", &self.primary_foreground),
        ]
    }
}

/// Theme tokens shared by every rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub colors: ThemeColors,
    /// Base corner radius, exposed as `--radius`.
    pub radius: String,
    /// Sans-serif font stack, first entry preferred.
    pub font_sans: Vec<String>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            colors: ThemeColors::default(),
            radius: "0.5rem".to_string(),
            font_sans: vec![
                "Inter".to_string(),
                "ui-sans-serif".to_string(),
                "system-ui".to_string(),
                "sans-serif".to_string(),
            ],
        }
    }
}

impl Theme {
    /// CSS custom properties for the palette and radius.
    #[must_use]
    pub fn css_variables(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.colors.entries() {
            css.push_str(&format!("  --{name}: {value};\n"));
        }
        css.push_str(&format!("  --radius: {};\n}}\n", self.radius));
        css
    }

    /// Tailwind configuration object wiring the semantic names to the CSS
    /// custom properties from [`Theme::css_variables`].
    #[must_use]
    pub fn tailwind_config(&self) -> Value {
        let colors: Map<String, Value> = self
            .colors
            .entries()
            .into_iter()
            .map(|(name, _)| (name.to_string(), json!(format!("hsl(var(--{name}))"))))
            .collect();

        json!({
            "darkMode": "class",
            "content": ["./src/**/*.rs", "./static/**/*.html"],
            "theme": {
                "extend": {
                    "colors": colors,
                    "borderRadius": {
                        "lg": "var(--radius)",
                        "md": "calc(var(--radius) - 2px)",
                        "sm": "calc(var(--radius) - 4px)",
                    },
                    "fontFamily": {
                        "sans": self.font_sans,
                    },
                },
            },
        })
    }
}
