//! Light/dark theme selection.
//!
//! DESIGN
//! ======
//! `Theme` is the single value the root component holds in a signal. The
//! textual form is the `data-theme` attribute value stylesheet selectors
//! match on.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Visual mode applied to the whole document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Attribute value for `data-theme`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Button caption offering the switch away from `self`.
    pub fn toggle_caption(self) -> &'static str {
        match self {
            Self::Light => "🌙 Dark",
            Self::Dark => "☀️ Light",
        }
    }

    /// Accessible label for the toggle button.
    pub fn toggle_label(self) -> String {
        format!("Switch to {} mode", self.toggled().as_str())
    }
}
