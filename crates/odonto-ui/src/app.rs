mod dental_page;
mod home_page;
mod login_page;
mod password_pages;
mod register_page;
mod tasks_page;

use odonto_core::auth::{AuthAction, AuthOutcomeKind};
use yew::{
    Callback, Html, Properties, UseReducerHandle, function_component, html, use_effect_with,
    use_reducer,
};
use yew_router::prelude::{BrowserRouter, Link, Routable, Switch, use_navigator};

use crate::ops;
use crate::storage;
use crate::store::{Auth, Consultation, Tasks};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/change-password")]
    ChangePassword,
    #[at("/forgot-password")]
    ForgotPassword,
    #[at("/reset-password/:token")]
    ResetPassword { token: String },
    #[at("/tasks")]
    Tasks,
    #[at("/dental")]
    Dental,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    let auth = use_reducer(Auth::default);
    let tasks = use_reducer(Tasks::default);
    let consultation = use_reducer(Consultation::seeded);

    // Restore the persisted session once on mount.
    {
        let auth = auth.clone();
        use_effect_with((), move |_| {
            auth.dispatch(AuthAction::SessionLoaded(storage::load_user()));
            || ()
        });
    }

    let render = {
        let auth = auth.clone();
        let tasks = tasks.clone();
        let consultation = consultation.clone();
        move |route: Route| match route {
            Route::Home => html! { <home_page::HomePage auth={auth.clone()} /> },
            Route::Login => html! { <login_page::LoginPage auth={auth.clone()} /> },
            Route::Register => html! { <register_page::RegisterPage auth={auth.clone()} /> },
            Route::ChangePassword => {
                html! { <password_pages::ChangePasswordPage auth={auth.clone()} /> }
            }
            Route::ForgotPassword => {
                html! { <password_pages::ForgotPasswordPage auth={auth.clone()} /> }
            }
            Route::ResetPassword { token } => {
                html! { <password_pages::ResetPasswordPage auth={auth.clone()} token={token} /> }
            }
            Route::Tasks => html! { <tasks_page::TasksPage tasks={tasks.clone()} /> },
            Route::Dental => {
                html! { <dental_page::DentalPage consultation={consultation.clone()} /> }
            }
            Route::NotFound => html! {
                <div class="panel">
                    <div class="header">{ "Page not found" }</div>
                    <Link<Route> to={Route::Home}>{ "Back to the dashboard" }</Link<Route>>
                </div>
            },
        }
    };

    html! {
        <BrowserRouter>
            <AuthNavigator auth={auth.clone()} />
            <div class="app-shell">
                <NavBar auth={auth.clone()} />
                <Switch<Route> render={render} />
            </div>
        </BrowserRouter>
    }
}

#[derive(Properties, PartialEq)]
struct AuthNavigatorProps {
    auth: UseReducerHandle<Auth>,
}

/// Routes on finished auth operations, keyed on the outcome kind
/// rather than the message text.
#[function_component(AuthNavigator)]
fn auth_navigator(props: &AuthNavigatorProps) -> Html {
    let navigator = use_navigator();
    let auth = props.auth.clone();

    use_effect_with(auth.0.outcome.clone(), move |outcome| {
        if let (Some(outcome), Some(navigator)) = (outcome.clone(), navigator) {
            tracing::debug!(message = %outcome.message, "auth outcome observed");
            match outcome.kind {
                AuthOutcomeKind::LoggedIn => {
                    navigator.push(&Route::Home);
                    auth.dispatch(AuthAction::OutcomeConsumed);
                }
                AuthOutcomeKind::Registered | AuthOutcomeKind::LoggedOut => {
                    navigator.push(&Route::Login);
                    auth.dispatch(AuthAction::OutcomeConsumed);
                }
                // Non-navigating outcomes stay put so their page can
                // show the message; the next operation clears them.
                AuthOutcomeKind::PasswordChanged
                | AuthOutcomeKind::ResetEmailSent
                | AuthOutcomeKind::PasswordReset => {}
            }
        }
        || ()
    });

    html! {}
}

#[derive(Properties, PartialEq)]
struct NavBarProps {
    auth: UseReducerHandle<Auth>,
}

#[function_component(NavBar)]
fn nav_bar(props: &NavBarProps) -> Html {
    let auth = props.auth.clone();
    let on_logout = Callback::from(move |_| ops::auth::logout(auth.clone()));

    html! {
        <nav class="navbar">
            <span class="brand">{ "Odonto" }</span>
            <Link<Route> to={Route::Home}>{ "Home" }</Link<Route>>
            <Link<Route> to={Route::Tasks}>{ "Tasks" }</Link<Route>>
            <Link<Route> to={Route::Dental}>{ "Dental" }</Link<Route>>
            <div class="session">
                {
                    match &props.auth.0.user {
                        Some(user) => html! {
                            <>
                                <span class="email">{ &user.email }</span>
                                <Link<Route> to={Route::ChangePassword}>{ "Password" }</Link<Route>>
                                <button class="btn" onclick={on_logout}>{ "Log out" }</button>
                            </>
                        },
                        None => html! {
                            <>
                                <Link<Route> to={Route::Login}>{ "Log in" }</Link<Route>>
                                <Link<Route> to={Route::Register}>{ "Register" }</Link<Route>>
                            </>
                        },
                    }
                }
            </div>
        </nav>
    }
}
