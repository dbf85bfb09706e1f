//! Local UI chrome state (theme, dark mode).
//!
//! DESIGN
//! ======
//! Keeps presentation preferences out of the session so switching themes
//! never touches auth state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state provided via context as an `RwSignal`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub theme: Theme,
}

/// Named colour theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Default,
    Healthcare,
    Finance,
    Startup,
    Corporate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeConfig {
    pub key: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub primary_color: &'static str,
    pub secondary_color: &'static str,
    /// Class applied to `<body>`; empty for the default theme.
    pub class_name: &'static str,
}

const ALL_THEMES: [Theme; 5] = [Theme::Default, Theme::Healthcare, Theme::Finance, Theme::Startup, Theme::Corporate];

impl Theme {
    #[must_use]
    pub fn all() -> &'static [Theme] {
        &ALL_THEMES
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        ALL_THEMES.iter().copied().find(|t| t.config().key == key)
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        self.config().key
    }

    /// Flip between the default theme and `alternate`.
    #[must_use]
    pub fn toggled(self, alternate: Theme) -> Self {
        if self == Self::Default { alternate } else { Self::Default }
    }

    #[must_use]
    pub fn config(self) -> ThemeConfig {
        match self {
            Self::Default => ThemeConfig {
                key: "default",
                display_name: "Maxxton",
                description: "Default theme with purple and blue gradients",
                primary_color: "#6366f1",
                secondary_color: "#a855f7",
                class_name: "",
            },
            Self::Healthcare => ThemeConfig {
                key: "healthcare",
                display_name: "Healthcare",
                description: "Medical theme with green and blue colors",
                primary_color: "#10b981",
                secondary_color: "#3b82f6",
                class_name: "theme-healthcare",
            },
            Self::Finance => ThemeConfig {
                key: "finance",
                display_name: "Finance",
                description: "Professional theme with blue and green colors",
                primary_color: "#1e40af",
                secondary_color: "#059669",
                class_name: "theme-finance",
            },
            Self::Startup => ThemeConfig {
                key: "startup",
                display_name: "Tech Startup",
                description: "Energetic theme with orange and purple colors",
                primary_color: "#f59e0b",
                secondary_color: "#8b5cf6",
                class_name: "theme-startup",
            },
            Self::Corporate => ThemeConfig {
                key: "corporate",
                display_name: "Corporate",
                description: "Professional theme with gray and red colors",
                primary_color: "#374151",
                secondary_color: "#dc2626",
                class_name: "theme-corporate",
            },
        }
    }
}
