use odonto_core::forms::{RegisterDraft, RegisterErrors, validate_register};
use yew::{
    Callback, Html, Properties, TargetCast, UseReducerHandle, function_component, html, use_state,
};
use yew_router::prelude::Link;

use super::Route;
use crate::components::FieldError;
use crate::ops;
use crate::store::Auth;

#[derive(Properties, PartialEq)]
pub struct RegisterPageProps {
    pub auth: UseReducerHandle<Auth>,
}

#[function_component(RegisterPage)]
pub fn register_page(props: &RegisterPageProps) -> Html {
    let draft = use_state(RegisterDraft::default);
    let errors = use_state(RegisterErrors::default);
    let is_loading = props.auth.0.loading;

    let field_input = |apply: fn(&mut RegisterDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |e: web_sys::InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut current = (*draft).clone();
            apply(&mut current, input.value());
            draft.set(current);
        })
    };

    let on_name_input = field_input(|d, v| d.name = v);
    let on_email_input = field_input(|d, v| d.email = v);
    let on_password_input = field_input(|d, v| d.password = v);
    let on_confirm_input = field_input(|d, v| d.confirm_password = v);

    let onsubmit = {
        let auth = props.auth.clone();
        let draft = draft.clone();
        let errors = errors.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            let current = (*draft).clone();
            let checked = validate_register(&current);
            if checked.is_clean() {
                ops::auth::register(auth.clone(), current.email, current.password);
            }
            errors.set(checked);
        })
    };

    html! {
        <div class="panel auth-form">
            <div class="header">{ "Create an account" }</div>
            {
                match &props.auth.0.error {
                    Some(message) => html! { <div class="banner error">{ message }</div> },
                    None => html! {},
                }
            }
            <form {onsubmit}>
                <label>{ "Name (optional)" }
                    <input value={draft.name.clone()} oninput={on_name_input} />
                </label>
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
                <label>{ "Confirm password" }
                    <input
                        type="password"
                        value={draft.confirm_password.clone()}
                        oninput={on_confirm_input}
                    />
                </label>
                <FieldError error={errors.confirm_password.clone()} />
                <button class="btn primary" type="submit" disabled={is_loading}>
                    { if is_loading { "Creating…" } else { "Register" } }
                </button>
            </form>
            <div class="auth-links">
                <Link<Route> to={Route::Login}>{ "Already have an account?" }</Link<Route>>
            </div>
        </div>
    }
}
