use std::sync::{Arc, Mutex};

use super::*;

fn recorder<T: Clone + Send + Sync + 'static>() -> (Callback<T>, Arc<Mutex<Vec<T>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let cb = Callback::new(move |value: T| sink.lock().unwrap().push(value));
    (cb, calls)
}

fn filled_form() -> SignInForm {
    SignInForm { email: "a@b.com".to_owned(), password: "secret".to_owned() }
}

struct Recorded {
    handlers: SignInHandlers,
    submits: Arc<Mutex<Vec<SignInSubmission>>>,
    forgots: Arc<Mutex<Vec<()>>>,
    socials: Arc<Mutex<Vec<SocialProvider>>>,
    sign_ups: Arc<Mutex<Vec<()>>>,
}

fn recorded_handlers() -> Recorded {
    let (on_submit, submits) = recorder();
    let (on_forgot_password, forgots) = recorder();
    let (on_social_click, socials) = recorder();
    let (on_navigate_to_sign_up, sign_ups) = recorder();
    Recorded {
        handlers: SignInHandlers {
            on_submit: Some(on_submit),
            on_forgot_password: Some(on_forgot_password),
            on_social_click: Some(on_social_click),
            on_navigate_to_sign_up: Some(on_navigate_to_sign_up),
        },
        submits,
        forgots,
        socials,
        sign_ups,
    }
}

// =============================================================
// Submit
// =============================================================

#[test]
fn submit_sends_current_field_values_once() {
    let owner = Owner::new();
    owner.set();
    let rec = recorded_handlers();
    let form = RwSignal::new(SignInForm::default());

    form.update(|f| f.email = "a@b.com".to_owned());
    form.update(|f| f.password = "secret".to_owned());
    assert!(handle_trigger(form, rec.handlers, SignInTrigger::Submit));

    assert_eq!(*rec.submits.lock().unwrap(), vec![filled_form().snapshot()]);
    assert!(rec.forgots.lock().unwrap().is_empty());
    assert!(rec.socials.lock().unwrap().is_empty());
    assert!(rec.sign_ups.lock().unwrap().is_empty());
}

#[test]
fn submit_snapshot_ignores_later_edits() {
    let owner = Owner::new();
    owner.set();
    let rec = recorded_handlers();
    let form = RwSignal::new(filled_form());

    handle_trigger(form, rec.handlers, SignInTrigger::Submit);
    form.update(|f| f.email = "c@d.com".to_owned());

    assert_eq!(rec.submits.lock().unwrap()[0].email, "a@b.com");
}

#[test]
fn submit_leaves_fields_in_place() {
    let owner = Owner::new();
    owner.set();
    let rec = recorded_handlers();
    let form = RwSignal::new(filled_form());

    handle_trigger(form, rec.handlers, SignInTrigger::Submit);

    assert_eq!(form.get_untracked(), filled_form());
}

// =============================================================
// Auxiliary controls
// =============================================================

#[test]
fn forgot_password_neither_submits_nor_edits_fields() {
    let owner = Owner::new();
    owner.set();
    let rec = recorded_handlers();
    let form = RwSignal::new(filled_form());

    assert!(handle_trigger(form, rec.handlers, SignInTrigger::ForgotPassword));

    assert_eq!(form.get_untracked(), filled_form());
    assert!(rec.submits.lock().unwrap().is_empty());
    assert_eq!(rec.forgots.lock().unwrap().len(), 1);
}

#[test]
fn sign_up_neither_submits_nor_edits_fields() {
    let owner = Owner::new();
    owner.set();
    let rec = recorded_handlers();
    let form = RwSignal::new(filled_form());

    assert!(handle_trigger(form, rec.handlers, SignInTrigger::SignUp));

    assert_eq!(form.get_untracked(), filled_form());
    assert!(rec.submits.lock().unwrap().is_empty());
    assert_eq!(rec.sign_ups.lock().unwrap().len(), 1);
}

#[test]
fn social_tiles_report_provider_without_editing_fields() {
    let owner = Owner::new();
    owner.set();
    let rec = recorded_handlers();
    let form = RwSignal::new(filled_form());

    handle_trigger(form, rec.handlers, SignInTrigger::Social(SocialProvider::Google));
    handle_trigger(form, rec.handlers, SignInTrigger::Social(SocialProvider::Facebook));

    assert_eq!(*rec.socials.lock().unwrap(), vec![SocialProvider::Google, SocialProvider::Facebook]);
    assert_eq!(form.get_untracked(), filled_form());
    assert!(rec.submits.lock().unwrap().is_empty());
}

#[test]
fn unset_callbacks_fall_back_for_every_trigger() {
    let owner = Owner::new();
    owner.set();
    let form = RwSignal::new(filled_form());
    let handlers = SignInHandlers::default();

    for trigger in [
        SignInTrigger::Submit,
        SignInTrigger::ForgotPassword,
        SignInTrigger::Social(SocialProvider::Google),
        SignInTrigger::SignUp,
    ] {
        assert!(!handle_trigger(form, handlers, trigger), "{trigger:?} should fall back");
    }
    assert_eq!(form.get_untracked(), filled_form());
}
