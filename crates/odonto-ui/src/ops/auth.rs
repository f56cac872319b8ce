use odonto_core::auth::{AuthAction, AuthOutcomeKind};
use odonto_shared::{
    AuthResponse, ChangePasswordArgs, Credentials, ForgotPasswordArgs, MessageResponse,
    ResetPasswordArgs,
};
use yew::UseReducerHandle;

use crate::api;
use crate::storage;
use crate::store::Auth;

fn or_fallback(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

pub fn login(auth: UseReducerHandle<Auth>, email: String, password: String) {
    auth.dispatch(AuthAction::Started);
    wasm_bindgen_futures::spawn_local(async move {
        let body = Credentials { email, password };
        match api::public_post::<AuthResponse, _>("/user/login", &body).await {
            Ok(mut response) => {
                storage::save_token(&response.token);
                storage::save_user(&response.user);
                response.message = or_fallback(response.message, "Login successful");
                auth.dispatch(AuthAction::LoginSucceeded(response));
            }
            Err(error) => auth.dispatch(AuthAction::Failed(error)),
        }
    });
}

pub fn register(auth: UseReducerHandle<Auth>, email: String, password: String) {
    auth.dispatch(AuthAction::Started);
    wasm_bindgen_futures::spawn_local(async move {
        let body = Credentials { email, password };
        match api::public_post::<MessageResponse, _>("/user/register", &body).await {
            Ok(response) => auth.dispatch(AuthAction::Succeeded(
                AuthOutcomeKind::Registered,
                or_fallback(response.message, "Registration successful"),
            )),
            Err(error) => auth.dispatch(AuthAction::Failed(error)),
        }
    });
}

/// The local session is torn down no matter what the backend says; a
/// dead server must not keep the user signed in.
pub fn logout(auth: UseReducerHandle<Auth>) {
    auth.dispatch(AuthAction::Started);
    wasm_bindgen_futures::spawn_local(async move {
        let result = api::authed_post_empty::<MessageResponse>("/user/logout").await;
        storage::clear_session();

        let message = match result {
            Ok(response) => or_fallback(response.message, "Logout successful"),
            Err(error) => {
                tracing::warn!(error = %error, "logout call failed; session cleared locally");
                "Logout successful".to_string()
            }
        };
        auth.dispatch(AuthAction::LoggedOut(message));
    });
}

pub fn change_password(auth: UseReducerHandle<Auth>, old_password: String, new_password: String) {
    auth.dispatch(AuthAction::Started);
    wasm_bindgen_futures::spawn_local(async move {
        let body = ChangePasswordArgs {
            old_password,
            new_password,
        };
        match api::authed_post::<MessageResponse, _>("/user/change_password", &body).await {
            Ok(response) => auth.dispatch(AuthAction::Succeeded(
                AuthOutcomeKind::PasswordChanged,
                or_fallback(response.message, "Password changed"),
            )),
            Err(error) => auth.dispatch(AuthAction::Failed(error)),
        }
    });
}

pub fn forgot_password(auth: UseReducerHandle<Auth>, email: String) {
    auth.dispatch(AuthAction::Started);
    wasm_bindgen_futures::spawn_local(async move {
        let body = ForgotPasswordArgs { email };
        match api::public_post::<MessageResponse, _>("/user/forgot_password", &body).await {
            Ok(response) => auth.dispatch(AuthAction::Succeeded(
                AuthOutcomeKind::ResetEmailSent,
                or_fallback(response.message, "Reset email sent"),
            )),
            Err(error) => auth.dispatch(AuthAction::Failed(error)),
        }
    });
}

pub fn reset_password(auth: UseReducerHandle<Auth>, token: String, password: String) {
    auth.dispatch(AuthAction::Started);
    wasm_bindgen_futures::spawn_local(async move {
        let body = ResetPasswordArgs { token, password };
        match api::public_post::<MessageResponse, _>("/user/reset_password", &body).await {
            Ok(response) => auth.dispatch(AuthAction::Succeeded(
                AuthOutcomeKind::PasswordReset,
                or_fallback(response.message, "Password reset"),
            )),
            Err(error) => auth.dispatch(AuthAction::Failed(error)),
        }
    });
}
