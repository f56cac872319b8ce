use odonto_core::auth::{self, AuthAction, AuthOutcomeKind, AuthState};
use odonto_core::consultation::{self, ConsultationAction, ConsultationState};
use odonto_core::tasks::{self, TasksAction, TasksState};
use odonto_shared::{AuthResponse, TaskDto, TaskPriority, UserDto};
use uuid::Uuid;

#[test]
fn login_then_task_day_then_consultation() {
    // Login round trip.
    let auth_state = auth::reduce(&AuthState::default(), AuthAction::Started);
    assert!(auth_state.loading);

    let auth_state = auth::reduce(
        &auth_state,
        AuthAction::LoginSucceeded(AuthResponse {
            token: "tok-1".to_string(),
            user: UserDto {
                id: "u-1".to_string(),
                email: "dr.smith@example.com".to_string(),
                name: Some("Dr. Smith".to_string()),
            },
            message: "Login successful".to_string(),
        }),
    );
    assert_eq!(
        auth_state.outcome.as_ref().map(|o| o.kind),
        Some(AuthOutcomeKind::LoggedIn)
    );

    let auth_state = auth::reduce(&auth_state, AuthAction::OutcomeConsumed);
    assert!(auth_state.user.is_some());
    assert!(auth_state.outcome.is_none());

    // A refreshed task list, one toggle, one delete.
    let first = TaskDto {
        id: Uuid::new_v4(),
        title: "Review panoramic X-ray".to_string(),
        description: String::new(),
        completed: false,
        priority: TaskPriority::High,
    };
    let second = TaskDto {
        id: Uuid::new_v4(),
        title: "Invoice insurance".to_string(),
        description: String::new(),
        completed: false,
        priority: TaskPriority::Low,
    };

    let task_state = tasks::reduce(
        &TasksState::default(),
        TasksAction::Loaded(vec![first.clone(), second.clone()]),
    );
    let task_state = tasks::reduce(&task_state, TasksAction::Toggled(first.id));
    let task_state = tasks::reduce(&task_state, TasksAction::Removed(second.id));

    let counts = tasks::stats(&task_state.tasks);
    assert_eq!(counts.total, 1);
    assert_eq!(counts.completed, 1);
    assert_eq!(counts.high, 1);

    // A consultation exchange on the seeded data.
    let mut consult = ConsultationState::seeded("2025-04-02");
    consult.draft = "Patient reports sensitivity on 14".to_string();
    let consult = consultation::reduce(
        &consult,
        ConsultationAction::SendMessage {
            timestamp: "3:10 PM".to_string(),
        },
    );

    let active = consult.active_thread().expect("active thread");
    assert_eq!(active.id, "thread-2");
    assert_eq!(active.messages.len(), 5);
    assert_eq!(
        active.messages.last().map(|m| m.body.text()),
        Some("Patient reports sensitivity on 14")
    );

    // Logout clears the user again.
    let auth_state = auth::reduce(
        &auth_state,
        AuthAction::LoggedOut("Logout successful".to_string()),
    );
    assert_eq!(auth_state.user, None);
}
