use odonto_shared::{AuthResponse, UserDto};

/// What an auth operation amounted to, independent of the message text
/// the backend attached to it.
///
/// Navigation keys on the kind; the message is display-only, so a copy
/// change on the server cannot break routing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthOutcome {
    pub kind: AuthOutcomeKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcomeKind {
    LoggedIn,
    Registered,
    LoggedOut,
    PasswordChanged,
    ResetEmailSent,
    PasswordReset,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserDto>,
    pub loading: bool,
    pub error: Option<String>,
    /// Set by a finished operation, consumed once the navigation
    /// effect has acted on it.
    pub outcome: Option<AuthOutcome>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    /// An async operation left the station.
    Started,
    /// Login (or register-with-session) came back with a token.
    LoginSucceeded(AuthResponse),
    /// Any other operation finished cleanly.
    Succeeded(AuthOutcomeKind, String),
    Failed(String),
    /// The persisted user was read back from storage on mount.
    SessionLoaded(Option<UserDto>),
    /// Local session teardown; also used after a 401.
    LoggedOut(String),
    OutcomeConsumed,
}

pub fn reduce(state: &AuthState, action: AuthAction) -> AuthState {
    match action {
        AuthAction::Started => AuthState {
            loading: true,
            error: None,
            outcome: None,
            user: state.user.clone(),
        },
        AuthAction::LoginSucceeded(response) => {
            tracing::info!(email = %response.user.email, "login succeeded");
            AuthState {
                user: Some(response.user),
                loading: false,
                error: None,
                outcome: Some(AuthOutcome {
                    kind: AuthOutcomeKind::LoggedIn,
                    message: response.message,
                }),
            }
        }
        AuthAction::Succeeded(kind, message) => AuthState {
            user: state.user.clone(),
            loading: false,
            error: None,
            outcome: Some(AuthOutcome { kind, message }),
        },
        AuthAction::Failed(error) => {
            tracing::warn!(error = %error, "auth operation failed");
            AuthState {
                user: state.user.clone(),
                loading: false,
                error: Some(error),
                outcome: None,
            }
        }
        AuthAction::SessionLoaded(user) => AuthState {
            user,
            ..state.clone()
        },
        AuthAction::LoggedOut(message) => AuthState {
            user: None,
            loading: false,
            error: None,
            outcome: Some(AuthOutcome {
                kind: AuthOutcomeKind::LoggedOut,
                message,
            }),
        },
        AuthAction::OutcomeConsumed => AuthState {
            outcome: None,
            ..state.clone()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logged_in_state() -> AuthState {
        AuthState {
            user: Some(UserDto {
                id: "u-1".to_string(),
                email: "dr.smith@example.com".to_string(),
                name: None,
            }),
            loading: false,
            error: None,
            outcome: None,
        }
    }

    #[test]
    fn started_clears_error_and_outcome() {
        let state = AuthState {
            error: Some("boom".to_string()),
            outcome: Some(AuthOutcome {
                kind: AuthOutcomeKind::Registered,
                message: "Registration successful".to_string(),
            }),
            ..AuthState::default()
        };

        let next = reduce(&state, AuthAction::Started);
        assert!(next.loading);
        assert_eq!(next.error, None);
        assert_eq!(next.outcome, None);
    }

    #[test]
    fn failure_keeps_current_user() {
        let state = logged_in_state();
        let next = reduce(&state, AuthAction::Failed("network down".to_string()));

        assert_eq!(next.user, state.user);
        assert!(!next.loading);
        assert_eq!(next.error.as_deref(), Some("network down"));
    }

    #[test]
    fn login_success_stores_user_and_outcome() {
        let response = AuthResponse {
            token: "tok".to_string(),
            user: UserDto {
                id: "u-2".to_string(),
                email: "new@example.com".to_string(),
                name: Some("New".to_string()),
            },
            message: "Login successful".to_string(),
        };

        let next = reduce(&AuthState::default(), AuthAction::LoginSucceeded(response));
        assert_eq!(next.user.as_ref().map(|u| u.email.as_str()), Some("new@example.com"));

        let outcome = next.outcome.expect("outcome");
        assert_eq!(outcome.kind, AuthOutcomeKind::LoggedIn);
        assert_eq!(outcome.message, "Login successful");
    }

    #[test]
    fn logout_drops_user_and_reports_outcome() {
        let next = reduce(
            &logged_in_state(),
            AuthAction::LoggedOut("Logout successful".to_string()),
        );

        assert_eq!(next.user, None);
        assert_eq!(
            next.outcome.map(|o| o.kind),
            Some(AuthOutcomeKind::LoggedOut)
        );
    }

    #[test]
    fn outcome_is_consumed_without_touching_the_rest() {
        let state = reduce(
            &logged_in_state(),
            AuthAction::Succeeded(
                AuthOutcomeKind::PasswordChanged,
                "Password changed".to_string(),
            ),
        );

        let next = reduce(&state, AuthAction::OutcomeConsumed);
        assert_eq!(next.outcome, None);
        assert_eq!(next.user, state.user);
    }
}
