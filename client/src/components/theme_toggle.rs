//! Light/dark switch shown above the sign-in card.

use leptos::prelude::*;

use crate::state::theme::Theme;
use crate::util::document_theme;

/// Button that flips the theme held in context.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();

    let on_click = move |_| {
        let next = document_theme::toggle(theme.get_untracked());
        theme.set(next);
    };

    view! {
        <button
            class="theme-toggle"
            type="button"
            on:click=on_click
            aria-label=move || theme.get().toggle_label()
        >
            {move || theme.get().toggle_caption()}
        </button>
    }
}
