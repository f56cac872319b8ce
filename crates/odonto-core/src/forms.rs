//! Draft + validation pairs for the dashboard forms.
//!
//! Validation is a pure function from a draft to per-field errors;
//! the UI renders each error next to its field and blocks submit
//! while any is present.

use odonto_shared::TaskPriority;

const MIN_PASSWORD_LEN: usize = 8;

fn email_error(email: &str) -> Option<String> {
    let email = email.trim();
    if email.is_empty() {
        Some("Email is required".to_string())
    } else if !email.contains('@') {
        Some("Enter a valid email address".to_string())
    } else {
        None
    }
}

fn password_error(password: &str) -> Option<String> {
    if password.is_empty() {
        Some("Password is required".to_string())
    } else if password.len() < MIN_PASSWORD_LEN {
        Some(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        ))
    } else {
        None
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginErrors {
    pub fn is_clean(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

pub fn validate_login(draft: &LoginDraft) -> LoginErrors {
    LoginErrors {
        email: email_error(&draft.email),
        password: password_error(&draft.password),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterErrors {
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

impl RegisterErrors {
    pub fn is_clean(&self) -> bool {
        self.email.is_none() && self.password.is_none() && self.confirm_password.is_none()
    }
}

pub fn validate_register(draft: &RegisterDraft) -> RegisterErrors {
    let confirm_password = if draft.confirm_password != draft.password {
        Some("Passwords do not match".to_string())
    } else {
        None
    };

    RegisterErrors {
        email: email_error(&draft.email),
        password: password_error(&draft.password),
        confirm_password,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangePasswordDraft {
    pub old_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangePasswordErrors {
    pub old_password: Option<String>,
    pub new_password: Option<String>,
}

impl ChangePasswordErrors {
    pub fn is_clean(&self) -> bool {
        self.old_password.is_none() && self.new_password.is_none()
    }
}

pub fn validate_change_password(draft: &ChangePasswordDraft) -> ChangePasswordErrors {
    let old_password = if draft.old_password.is_empty() {
        Some("Current password is required".to_string())
    } else {
        None
    };

    ChangePasswordErrors {
        old_password,
        new_password: password_error(&draft.new_password),
    }
}

pub fn validate_forgot_email(email: &str) -> Option<String> {
    email_error(email)
}

pub fn validate_reset_password(password: &str) -> Option<String> {
    password_error(password)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            priority: TaskPriority::Medium,
        }
    }
}

pub fn validate_task(draft: &TaskDraft) -> Option<String> {
    if draft.title.trim().is_empty() {
        Some("Title is required".to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_rejects_bad_email_and_short_password() {
        let errors = validate_login(&LoginDraft {
            email: "not-an-email".to_string(),
            password: "short".to_string(),
        });

        assert_eq!(errors.email.as_deref(), Some("Enter a valid email address"));
        assert_eq!(
            errors.password.as_deref(),
            Some("Password must be at least 8 characters")
        );
        assert!(!errors.is_clean());
    }

    #[test]
    fn login_accepts_a_valid_draft() {
        let errors = validate_login(&LoginDraft {
            email: "dr.smith@example.com".to_string(),
            password: "hunter222".to_string(),
        });
        assert!(errors.is_clean());
    }

    #[test]
    fn register_requires_matching_passwords() {
        let errors = validate_register(&RegisterDraft {
            name: String::new(),
            email: "dr.smith@example.com".to_string(),
            password: "hunter222".to_string(),
            confirm_password: "hunter223".to_string(),
        });

        assert_eq!(
            errors.confirm_password.as_deref(),
            Some("Passwords do not match")
        );
        assert_eq!(errors.email, None);
    }

    #[test]
    fn empty_fields_are_reported_as_required() {
        let errors = validate_login(&LoginDraft::default());
        assert_eq!(errors.email.as_deref(), Some("Email is required"));
        assert_eq!(errors.password.as_deref(), Some("Password is required"));
    }

    #[test]
    fn change_password_checks_both_fields() {
        let errors = validate_change_password(&ChangePasswordDraft {
            old_password: String::new(),
            new_password: "longenough".to_string(),
        });

        assert_eq!(
            errors.old_password.as_deref(),
            Some("Current password is required")
        );
        assert_eq!(errors.new_password, None);
    }

    #[test]
    fn task_draft_needs_a_title() {
        assert_eq!(
            validate_task(&TaskDraft::default()).as_deref(),
            Some("Title is required")
        );

        let draft = TaskDraft {
            title: "Book follow-up".to_string(),
            ..TaskDraft::default()
        };
        assert_eq!(validate_task(&draft), None);
        assert_eq!(draft.priority, TaskPriority::Medium);
    }
}
