//! Mirrors the active theme onto the `<html>` element.
//!
//! Writes a `data-theme` attribute that stylesheet selectors key on. In the
//! browser the target is the document root; SSR and native test builds have
//! no document, so `apply` does nothing there.
//!
//! TRADE-OFFS
//! ==========
//! The attribute is the only document-global state in the app. Writes skip
//! when the attribute already holds the requested value, so re-applying the
//! same theme never mutates the DOM.

#[cfg(test)]
#[path = "document_theme_test.rs"]
mod document_theme_test;

use crate::state::theme::Theme;

/// Attribute name on the document root element.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Something that carries a `data-theme` attribute.
pub trait ThemeTarget {
    fn theme_attribute(&self) -> Option<String>;
    fn set_theme_attribute(&mut self, value: &str);
}

/// The `<html>` element of the current page.
#[cfg(feature = "hydrate")]
struct DocumentRoot(web_sys::Element);

#[cfg(feature = "hydrate")]
impl DocumentRoot {
    fn current() -> Option<Self> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .map(Self)
    }
}

#[cfg(feature = "hydrate")]
impl ThemeTarget for DocumentRoot {
    fn theme_attribute(&self) -> Option<String> {
        self.0.get_attribute(THEME_ATTRIBUTE)
    }

    fn set_theme_attribute(&mut self, value: &str) {
        let _ = self.0.set_attribute(THEME_ATTRIBUTE, value);
    }
}

fn needs_write(current: Option<&str>, theme: Theme) -> bool {
    current != Some(theme.as_str())
}

/// Write `theme` to `target` unless it already shows it.
///
/// Returns `true` when a write happened.
pub fn apply_to(target: &mut impl ThemeTarget, theme: Theme) -> bool {
    let write = needs_write(target.theme_attribute().as_deref(), theme);
    if write {
        target.set_theme_attribute(theme.as_str());
    }
    write
}

/// Flip `current`, write the result to `target`, and return it.
pub fn toggle_on(target: &mut impl ThemeTarget, current: Theme) -> Theme {
    let next = current.toggled();
    apply_to(target, next);
    next
}

/// Set `data-theme` on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(mut root) = DocumentRoot::current() {
            apply_to(&mut root, theme);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip `current` on the `<html>` element and return the new theme.
pub fn toggle(current: Theme) -> Theme {
    #[cfg(feature = "hydrate")]
    {
        if let Some(mut root) = DocumentRoot::current() {
            return toggle_on(&mut root, current);
        }
    }
    current.toggled()
}
