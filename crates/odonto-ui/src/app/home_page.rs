use yew::{Html, Properties, UseReducerHandle, function_component, html};
use yew_router::prelude::Link;

use super::Route;
use crate::store::Auth;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub auth: UseReducerHandle<Auth>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let greeting = match &props.auth.0.user {
        Some(user) => match &user.name {
            Some(name) => format!("Welcome back, {name}"),
            None => format!("Welcome back, {}", user.email),
        },
        None => "Welcome to Odonto".to_string(),
    };

    html! {
        <div class="panel home">
            <div class="header">{ greeting }</div>
            <div class="cards">
                <Link<Route> to={Route::Tasks} classes="card">
                    <div class="title">{ "Tasks" }</div>
                    <div class="task-subtitle">{ "Plan and track clinic work" }</div>
                </Link<Route>>
                <Link<Route> to={Route::Dental} classes="card">
                    <div class="title">{ "Dental consultation" }</div>
                    <div class="task-subtitle">{ "Case threads and scans" }</div>
                </Link<Route>>
            </div>
            {
                if props.auth.0.user.is_none() {
                    html! {
                        <div class="hint">
                            { "Sign in to sync tasks with the clinic backend." }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
