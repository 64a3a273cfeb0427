use super::*;

// =============================================================
// Defaults and toggling
// =============================================================

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn toggled_flips_between_variants() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn toggling_n_times_depends_only_on_parity() {
    for n in 0..32 {
        let theme = (0..n).fold(Theme::default(), |t, _| t.toggled());
        let expected = if n % 2 == 0 { Theme::Light } else { Theme::Dark };
        assert_eq!(theme, expected, "after {n} toggles");
    }
}

// =============================================================
// Text forms
// =============================================================

#[test]
fn as_str_matches_attribute_values() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
}

#[test]
fn toggle_caption_offers_the_other_mode() {
    assert_eq!(Theme::Light.toggle_caption(), "🌙 Dark");
    assert_eq!(Theme::Dark.toggle_caption(), "☀️ Light");
    assert_eq!(Theme::Light.toggle_label(), "Switch to dark mode");
    assert_eq!(Theme::Dark.toggle_label(), "Switch to light mode");
}
