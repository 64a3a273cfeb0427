//! Root application component and SSR shell.
//!
//! `App` owns the theme signal and renders the sign-in screen beneath the
//! theme switch. The two only share the page; they never talk to each other.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::theme_toggle::ThemeToggle;
use crate::pages::sign_in::SignIn;
use crate::state::sign_in::SignInSubmission;
use crate::state::theme::Theme;
use crate::util::document_theme;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `<html>` starts out with the default theme so the first paint is styled
/// before the WASM bundle takes over.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme={Theme::default().as_str()}>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the theme signal to children and keeps `data-theme` in sync with it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(Theme::default());
    provide_context(theme);

    // Runs once on mount and again after every change.
    Effect::new(move |_| document_theme::apply(theme.get()));

    let on_submit = Callback::new(|submission: SignInSubmission| {
        leptos::logging::log!("App received sign-in submit {submission:?}");
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/signin.css"/>
        <Title text="Sign In"/>

        <div class="app">
            <header class="app__header">
                <ThemeToggle/>
                <SignIn on_submit=on_submit/>
            </header>
        </div>
    }
}
