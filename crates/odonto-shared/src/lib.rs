//! Wire types shared between the Odonto UI and the walker backend.
//!
//! Everything here is a plain serde struct; behavior lives in
//! `odonto_core`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserDto {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Payload for both login and register.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserDto,
    #[serde(default)]
    pub message: String,
}

/// Generic `{ "message": ... }` reply used by logout and the password
/// operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangePasswordArgs {
    pub old_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForgotPasswordArgs {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResetPasswordArgs {
    pub token: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskDto {
    pub id: Uuid,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub completed: bool,
    pub priority: TaskPriority,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskCreate {
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
}

/// Partial update; absent fields are left untouched by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_priority_uses_lowercase_wire_names() {
        let encoded = serde_json::to_string(&TaskPriority::High).unwrap();
        assert_eq!(encoded, "\"high\"");

        let decoded: TaskPriority = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(decoded, TaskPriority::Medium);
    }

    #[test]
    fn task_dto_round_trips() {
        let task = TaskDto {
            id: Uuid::new_v4(),
            title: "Order zirconia samples".to_string(),
            description: "For the implant tray".to_string(),
            completed: false,
            priority: TaskPriority::Low,
        };

        let encoded = serde_json::to_string(&task).unwrap();
        let decoded: TaskDto = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, task);
    }

    #[test]
    fn task_patch_skips_absent_fields() {
        let patch = TaskPatch {
            completed: Some(true),
            ..TaskPatch::default()
        };

        let encoded = serde_json::to_string(&patch).unwrap();
        assert_eq!(encoded, "{\"completed\":true}");
    }

    #[test]
    fn auth_response_tolerates_missing_message() {
        let raw = r#"{"token":"tok-1","user":{"id":"u-1","email":"a@b.c"}}"#;
        let decoded: AuthResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(decoded.token, "tok-1");
        assert_eq!(decoded.user.email, "a@b.c");
        assert_eq!(decoded.user.name, None);
        assert!(decoded.message.is_empty());
    }
}
