use odonto_core::forms::{LoginDraft, LoginErrors, validate_login};
use yew::{
    Callback, Html, Properties, TargetCast, UseReducerHandle, function_component, html, use_state,
};
use yew_router::prelude::Link;

use super::Route;
use crate::components::FieldError;
use crate::ops;
use crate::store::Auth;

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub auth: UseReducerHandle<Auth>,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let draft = use_state(LoginDraft::default);
    let errors = use_state(LoginErrors::default);
    let is_loading = props.auth.0.loading;

    let on_email_input = {
        let draft = draft.clone();
        Callback::from(move |e: web_sys::InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut current = (*draft).clone();
            current.email = input.value();
            draft.set(current);
        })
    };

    let on_password_input = {
        let draft = draft.clone();
        Callback::from(move |e: web_sys::InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut current = (*draft).clone();
            current.password = input.value();
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
            let checked = validate_login(&current);
            if checked.is_clean() {
                ops::auth::login(auth.clone(), current.email, current.password);
            }
            errors.set(checked);
        })
    };

    html! {
        <div class="panel auth-form">
            <div class="header">{ "Log in" }</div>
            {
                match &props.auth.0.error {
                    Some(message) => html! { <div class="banner error">{ message }</div> },
                    None => html! {},
                }
            }
            <form {onsubmit}>
                <label>{ "Email" }
                    <input type="email" value={draft.email.clone()} oninput={on_email_input} />
                </label>
                <FieldError error={errors.email.clone()} />
                <label>{ "Password" }
                    <input
                        type="password"
                        value={draft.password.clone()}
                        oninput={on_password_input}
                    />
                </label>
                <FieldError error={errors.password.clone()} />
                <button class="btn primary" type="submit" disabled={is_loading}>
                    { if is_loading { "Signing in…" } else { "Log in" } }
                </button>
            </form>
            <div class="auth-links">
                <Link<Route> to={Route::ForgotPassword}>{ "Forgot password?" }</Link<Route>>
                <Link<Route> to={Route::Register}>{ "Create an account" }</Link<Route>>
            </div>
        </div>
    }
}
