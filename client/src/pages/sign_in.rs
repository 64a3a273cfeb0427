//! Sign-in screen: email + password form, social tiles, and sign-up link.
//!
//! The page collects input and reports actions. What happens next is up to
//! the callbacks passed in; any left unset fall back to a log line.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;

use crate::components::social_tiles::SocialTiles;
use crate::state::sign_in::{SignInAction, SignInForm, SignInHandlers, SignInSubmission, SocialProvider};

/// Control on the page that the user pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SignInTrigger {
    Submit,
    ForgotPassword,
    Social(SocialProvider),
    SignUp,
}

/// Turn a press into its action and hand it to `handlers`.
///
/// Only `Submit` reads `form`, taking a snapshot at press time. No trigger
/// writes to it.
pub(crate) fn handle_trigger(form: RwSignal<SignInForm>, handlers: SignInHandlers, trigger: SignInTrigger) -> bool {
    let action = match trigger {
        SignInTrigger::Submit => SignInAction::Submit(form.with_untracked(SignInForm::snapshot)),
        SignInTrigger::ForgotPassword => SignInAction::ForgotPassword,
        SignInTrigger::Social(provider) => SignInAction::Social(provider),
        SignInTrigger::SignUp => SignInAction::NavigateToSignUp,
    };
    handlers.dispatch(action)
}

#[component]
pub fn SignIn(
    #[prop(optional)] on_submit: Option<Callback<SignInSubmission>>,
    #[prop(optional)] on_forgot_password: Option<Callback<()>>,
    #[prop(optional)] on_social_click: Option<Callback<SocialProvider>>,
    #[prop(optional)] on_navigate_to_sign_up: Option<Callback<()>>,
) -> impl IntoView {
    let handlers = SignInHandlers { on_submit, on_forgot_password, on_social_click, on_navigate_to_sign_up };
    let form = RwSignal::new(SignInForm::default());

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        handle_trigger(form, handlers, SignInTrigger::Submit);
    };
    let on_forgot = move |_| {
        handle_trigger(form, handlers, SignInTrigger::ForgotPassword);
    };
    let on_sign_up = move |_| {
        handle_trigger(form, handlers, SignInTrigger::SignUp);
    };
    let on_social = Callback::new(move |provider: SocialProvider| {
        handle_trigger(form, handlers, SignInTrigger::Social(provider));
    });

    view! {
        <section class="sign-in sign-in__card" role="main" aria-label="Sign In screen">
            <div class="sign-in__status-bar" aria-hidden="true">
                <span class="sign-in__status-time">"19:27"</span>
                <span class="sign-in__status-icons"></span>
            </div>

            <header class="sign-in__header">
                <h1 class="sign-in__hello">"Hello,"</h1>
                <p class="sign-in__welcome">"Welcome Back!"</p>
            </header>

            <form class="sign-in__form" on:submit=on_form_submit>
                <div class="sign-in__field">
                    <label class="sign-in__label" for="signin-email">"Email"</label>
                    <input
                        id="signin-email"
                        name="email"
                        type="email"
                        class="sign-in__input"
                        placeholder="Enter Email"
                        autocomplete="email"
                        required
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </div>

                <div class="sign-in__field">
                    <label class="sign-in__label" for="signin-password">"Enter Password"</label>
                    <input
                        id="signin-password"
                        name="password"
                        type="password"
                        class="sign-in__input"
                        placeholder="Enter Password"
                        autocomplete="current-password"
                        required
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                </div>

                <button type="button" class="sign-in__forgot" aria-label="Forgot Password" on:click=on_forgot>
                    "Forgot Password?"
                </button>

                <button id="btn-sign-in" type="submit" class="sign-in__primary" aria-label="Sign In">
                    <span>"Sign In"</span>
                    <span class="sign-in__primary-icon" aria-hidden="true"></span>
                </button>

                <div class="sign-in__divider">
                    <span class="sign-in__divider-line"></span>
                    <span class="sign-in__divider-text">"Or Sign in With"</span>
                    <span class="sign-in__divider-line"></span>
                </div>

                <SocialTiles on_select=on_social/>
            </form>

            <footer class="sign-in__footer">
                <span class="sign-in__footer-text">"Don’t have an account? "</span>
                <button type="button" class="sign-in__sign-up" on:click=on_sign_up>
                    "Sign up"
                </button>
            </footer>

            <div class="sign-in__home-indicator" aria-hidden="true"></div>
        </section>
    }
}
