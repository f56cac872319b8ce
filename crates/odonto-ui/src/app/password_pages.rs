//! The three password pages share one shape: a small form, an error
//! banner from the auth slice, and a success banner when the matching
//! outcome is present.

use odonto_core::auth::AuthOutcomeKind;
use odonto_core::forms::{
    ChangePasswordDraft, ChangePasswordErrors, validate_change_password, validate_forgot_email,
    validate_reset_password,
};
use yew::{
    Callback, Html, Properties, TargetCast, UseReducerHandle, function_component, html, use_state,
};

use crate::components::FieldError;
use crate::ops;
use crate::store::Auth;

fn banners(auth: &UseReducerHandle<Auth>, success_kind: AuthOutcomeKind) -> Html {
    let success = auth
        .0
        .outcome
        .as_ref()
        .filter(|outcome| outcome.kind == success_kind)
        .map(|outcome| outcome.message.clone());

    html! {
        <>
            {
                match &auth.0.error {
                    Some(message) => html! { <div class="banner error">{ message }</div> },
                    None => html! {},
                }
            }
            {
                match success {
                    Some(message) => html! { <div class="banner success">{ message }</div> },
                    None => html! {},
                }
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct ChangePasswordPageProps {
    pub auth: UseReducerHandle<Auth>,
}

#[function_component(ChangePasswordPage)]
pub fn change_password_page(props: &ChangePasswordPageProps) -> Html {
    let draft = use_state(ChangePasswordDraft::default);
    let errors = use_state(ChangePasswordErrors::default);
    let is_loading = props.auth.0.loading;

    let on_old_input = {
        let draft = draft.clone();
        Callback::from(move |e: web_sys::InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut current = (*draft).clone();
            current.old_password = input.value();
            draft.set(current);
        })
    };

    let on_new_input = {
        let draft = draft.clone();
        Callback::from(move |e: web_sys::InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut current = (*draft).clone();
            current.new_password = input.value();
            draft.set(current);
        })
    };

    let onsubmit = {
        let auth = props.auth.clone();
        let draft = draft.clone();
        let errors = errors.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            let current = (*draft).clone();
            let checked = validate_change_password(&current);
            if checked.is_clean() {
                ops::auth::change_password(
                    auth.clone(),
                    current.old_password,
                    current.new_password,
                );
            }
            errors.set(checked);
        })
    };

    html! {
        <div class="panel auth-form">
            <div class="header">{ "Change password" }</div>
            { banners(&props.auth, AuthOutcomeKind::PasswordChanged) }
            <form {onsubmit}>
                <label>{ "Current password" }
                    <input
                        type="password"
                        value={draft.old_password.clone()}
                        oninput={on_old_input}
                    />
                </label>
                <FieldError error={errors.old_password.clone()} />
                <label>{ "New password" }
                    <input
                        type="password"
                        value={draft.new_password.clone()}
                        oninput={on_new_input}
                    />
                </label>
                <FieldError error={errors.new_password.clone()} />
                <button class="btn primary" type="submit" disabled={is_loading}>
                    { "Change password" }
                </button>
            </form>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ForgotPasswordPageProps {
    pub auth: UseReducerHandle<Auth>,
}

#[function_component(ForgotPasswordPage)]
pub fn forgot_password_page(props: &ForgotPasswordPageProps) -> Html {
    let email = use_state(String::new);
    let error = use_state(|| None::<String>);
    let is_loading = props.auth.0.loading;

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: web_sys::InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let auth = props.auth.clone();
        let email = email.clone();
        let error = error.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            let checked = validate_forgot_email(&email);
            if checked.is_none() {
                ops::auth::forgot_password(auth.clone(), (*email).clone());
            }
            error.set(checked);
        })
    };

    html! {
        <div class="panel auth-form">
            <div class="header">{ "Forgot password" }</div>
            { banners(&props.auth, AuthOutcomeKind::ResetEmailSent) }
            <form {onsubmit}>
                <label>{ "Email" }
                    <input type="email" value={(*email).clone()} oninput={on_email_input} />
                </label>
                <FieldError error={(*error).clone()} />
                <button class="btn primary" type="submit" disabled={is_loading}>
                    { "Send reset email" }
                </button>
            </form>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResetPasswordPageProps {
    pub auth: UseReducerHandle<Auth>,
    pub token: String,
}

#[function_component(ResetPasswordPage)]
pub fn reset_password_page(props: &ResetPasswordPageProps) -> Html {
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let is_loading = props.auth.0.loading;

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: web_sys::InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let onsubmit = {
        let auth = props.auth.clone();
        let token = props.token.clone();
        let password = password.clone();
        let error = error.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            let checked = validate_reset_password(&password);
            if checked.is_none() {
                ops::auth::reset_password(auth.clone(), token.clone(), (*password).clone());
            }
            error.set(checked);
        })
    };

    html! {
        <div class="panel auth-form">
            <div class="header">{ "Reset password" }</div>
            { banners(&props.auth, AuthOutcomeKind::PasswordReset) }
            <form {onsubmit}>
                <label>{ "New password" }
                    <input
                        type="password"
                        value={(*password).clone()}
                        oninput={on_password_input}
                    />
                </label>
                <FieldError error={(*error).clone()} />
                <button class="btn primary" type="submit" disabled={is_loading}>
                    { "Reset password" }
                </button>
            </form>
        </div>
    }
}
