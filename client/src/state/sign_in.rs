//! Sign-in form fields, submission snapshot, and collaborator callbacks.
//!
//! DESIGN
//! ======
//! The form only collects input. Every user action is turned into a
//! `SignInAction` and handed to `SignInHandlers`, which forwards it to the
//! matching callback prop or, when that prop is absent, writes a single
//! diagnostic log line. Authentication, navigation, and social login belong
//! to whoever supplies the callbacks.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use std::fmt;

use leptos::prelude::*;
use serde::Serialize;

/// Live field values, updated on every keystroke.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    /// Immutable copy of the current values for `on_submit`.
    pub fn snapshot(&self) -> SignInSubmission {
        SignInSubmission { email: self.email.clone(), password: self.password.clone() }
    }
}

/// Credentials captured at submit time.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SignInSubmission {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for SignInSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInSubmission")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Third-party identity providers offered as tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialProvider {
    Google,
    Facebook,
}

impl SocialProvider {
    pub const ALL: [Self; 2] = [Self::Google, Self::Facebook];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Facebook => "facebook",
        }
    }

    /// Accessible label for the provider tile.
    pub fn tile_label(self) -> &'static str {
        match self {
            Self::Google => "Sign in with Google",
            Self::Facebook => "Sign in with Facebook",
        }
    }
}

impl fmt::Display for SocialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One user interaction on the sign-in screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignInAction {
    Submit(SignInSubmission),
    ForgotPassword,
    Social(SocialProvider),
    NavigateToSignUp,
}

impl SignInAction {
    /// Log line written when no collaborator handles this action.
    pub fn fallback_message(&self) -> String {
        match self {
            Self::Submit(submission) => format!("Sign In submit {submission:?}"),
            Self::ForgotPassword => "Forgot Password clicked".to_owned(),
            Self::Social(provider) => format!("{provider} sign-in clicked"),
            Self::NavigateToSignUp => "Navigate to Sign up".to_owned(),
        }
    }
}

/// Optional collaborator callbacks, one per action.
#[derive(Clone, Copy, Default)]
pub struct SignInHandlers {
    pub on_submit: Option<Callback<SignInSubmission>>,
    pub on_forgot_password: Option<Callback<()>>,
    pub on_social_click: Option<Callback<SocialProvider>>,
    pub on_navigate_to_sign_up: Option<Callback<()>>,
}

impl SignInHandlers {
    /// Route `action` to exactly one callback, or log it if that callback is unset.
    ///
    /// Returns `true` when a collaborator handled the action.
    pub fn dispatch(&self, action: SignInAction) -> bool {
        let handled = match &action {
            SignInAction::Submit(submission) => run_if_set(self.on_submit, submission.clone()),
            SignInAction::ForgotPassword => run_if_set(self.on_forgot_password, ()),
            SignInAction::Social(provider) => run_if_set(self.on_social_click, *provider),
            SignInAction::NavigateToSignUp => run_if_set(self.on_navigate_to_sign_up, ()),
        };
        if !handled {
            leptos::logging::log!("{}", action.fallback_message());
        }
        handled
    }
}

fn run_if_set<T: 'static>(callback: Option<Callback<T>>, payload: T) -> bool {
    match callback {
        Some(cb) => {
            cb.run(payload);
            true
        }
        None => false,
    }
}
