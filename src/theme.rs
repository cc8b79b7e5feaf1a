//! Theme modes and the provider that applies them

use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Visual style variant selecting the colour palette
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            ThemeMode::Dark => Palette::DARK,
            ThemeMode::Light => Palette::LIGHT,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            other => Err(format!("unknown theme mode: {}", other)),
        }
    }
}

/// Colour tokens for one mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub bg_elevated: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border_default: &'static str,
    pub accent_primary: &'static str,
    pub accent_error: &'static str,
    pub accent_success: &'static str,
}

impl Palette {
    pub const DARK: Palette = Palette {
        bg_primary: "rgb(20, 21, 21)",
        bg_secondary: "hsl(220, 30%, 7%)",
        bg_elevated: "hsl(220, 25%, 12%)",
        text_primary: "hsl(0, 0%, 100%)",
        text_secondary: "hsl(220, 20%, 80%)",
        text_muted: "hsl(220, 15%, 60%)",
        border_default: "hsla(220, 20%, 40%, 0.3)",
        accent_primary: "hsl(210, 100%, 60%)",
        accent_error: "hsl(0, 85%, 60%)",
        accent_success: "hsl(140, 60%, 50%)",
    };

    pub const LIGHT: Palette = Palette {
        bg_primary: "hsl(0, 0%, 99%)",
        bg_secondary: "hsl(220, 35%, 97%)",
        bg_elevated: "hsl(0, 0%, 100%)",
        text_primary: "hsl(220, 30%, 6%)",
        text_secondary: "hsl(220, 20%, 35%)",
        text_muted: "hsl(220, 10%, 50%)",
        border_default: "hsla(220, 20%, 80%, 0.6)",
        accent_primary: "hsl(210, 98%, 42%)",
        accent_error: "hsl(0, 70%, 45%)",
        accent_success: "hsl(140, 60%, 35%)",
    };

    /// Inline `style` value declaring every token as a CSS custom property
    pub fn css_vars(&self) -> String {
        [
            ("--bg-primary", self.bg_primary),
            ("--bg-secondary", self.bg_secondary),
            ("--bg-elevated", self.bg_elevated),
            ("--text-primary", self.text_primary),
            ("--text-secondary", self.text_secondary),
            ("--text-muted", self.text_muted),
            ("--border-default", self.border_default),
            ("--accent-primary", self.accent_primary),
            ("--accent-error", self.accent_error),
            ("--accent-success", self.accent_success),
        ]
        .iter()
        .map(|(name, value)| format!("{}: {};", name, value))
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Current theme mode, readable by any descendant of [`ThemeProvider`]
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext(pub Signal<ThemeMode>);

/// Read the mode provided by the nearest [`ThemeProvider`], dark when there is none.
pub fn use_theme_mode() -> Signal<ThemeMode> {
    use_context::<ThemeContext>()
        .map(|ctx| ctx.0)
        .unwrap_or_else(|| Signal::derive(ThemeMode::default))
}

/// Applies a palette to everything rendered inside it
#[component]
pub fn ThemeProvider(
    /// Active mode
    #[prop(into)]
    mode: Signal<ThemeMode>,
    children: Children,
) -> impl IntoView {
    provide_context(ThemeContext(mode));

    view! {
        <div
            class="theme-root min-h-screen bg-[var(--bg-primary)] text-[var(--text-primary)] transition-colors"
            data-theme=move || mode.get().as_str()
            style=move || mode.get().palette().css_vars()
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }

    #[test]
    fn test_toggle_flips_and_returns() {
        assert_eq!(ThemeMode::Dark.toggle(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggle().toggle(), ThemeMode::Dark);
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!(" Light ".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert!("sepia".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
        let mode: ThemeMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(mode, ThemeMode::Light);
    }

    #[test]
    fn test_css_vars_cover_palette() {
        let vars = ThemeMode::Dark.palette().css_vars();
        assert!(vars.starts_with("--bg-primary: rgb(20, 21, 21);"));
        assert!(vars.contains("--accent-error:"));
        assert_eq!(vars.matches(';').count(), 10);
    }

    #[test]
    fn test_modes_have_distinct_palettes() {
        assert_ne!(ThemeMode::Dark.palette(), ThemeMode::Light.palette());
    }
}
