//! Local-only state for the dental consultation workspace.
//!
//! Threads and messages never touch the backend; the workspace ships
//! with sample cases and every transition is an in-memory append.

/// Sender-tagged message payload. The image slot only exists on the
/// variants that can legally carry one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBody {
    User { text: String, image: Option<String> },
    Assistant { text: String },
    System { text: String, image: Option<String> },
}

impl MessageBody {
    pub fn text(&self) -> &str {
        match self {
            MessageBody::User { text, .. } => text,
            MessageBody::Assistant { text } => text,
            MessageBody::System { text, .. } => text,
        }
    }

    pub fn image(&self) -> Option<&str> {
        match self {
            MessageBody::User { image, .. } => image.as_deref(),
            MessageBody::System { image, .. } => image.as_deref(),
            MessageBody::Assistant { .. } => None,
        }
    }

    pub fn sender_label(&self) -> &'static str {
        match self {
            MessageBody::User { .. } => "user",
            MessageBody::Assistant { .. } => "assistant",
            MessageBody::System { .. } => "system",
        }
    }
}

/// Message ids are sequential within their thread (`next = len + 1`),
/// not globally unique, and reset with the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseMessage {
    pub id: u32,
    pub body: MessageBody,
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadIcon {
    Folder,
    Tooth,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseThread {
    pub id: String,
    pub title: String,
    pub patient_name: String,
    pub date: String,
    pub case_type: String,
    pub icon: ThreadIcon,
    pub messages: Vec<CaseMessage>,
}

impl CaseThread {
    fn next_message_id(&self) -> u32 {
        self.messages.len() as u32 + 1
    }
}

/// Draft for the add-case modal. None of the fields are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCaseDraft {
    pub title: String,
    pub patient_name: String,
    pub date: String,
    pub case_type: String,
}

impl NewCaseDraft {
    pub fn for_date(today: &str) -> Self {
        Self {
            title: String::new(),
            patient_name: String::new(),
            date: today.to_string(),
            case_type: "Consultation".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewCaseField {
    Title,
    PatientName,
    Date,
    CaseType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsultationState {
    pub threads: Vec<CaseThread>,
    pub active_thread_id: String,
    pub draft: String,
    pub pending_image: Option<String>,
    pub new_case: NewCaseDraft,
}

impl ConsultationState {
    pub fn seeded(today: &str) -> Self {
        Self {
            threads: seed_threads(),
            active_thread_id: "thread-2".to_string(),
            draft: String::new(),
            pending_image: None,
            new_case: NewCaseDraft::for_date(today),
        }
    }

    /// The selected thread, falling back to the first one when the
    /// selection points nowhere.
    pub fn active_thread(&self) -> Option<&CaseThread> {
        self.threads
            .iter()
            .find(|thread| thread.id == self.active_thread_id)
            .or_else(|| self.threads.first())
    }

    pub fn composing(&self) -> bool {
        !self.draft.trim().is_empty() || self.pending_image.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsultationAction {
    SelectThread(String),
    InputChanged(String),
    ImageSelected(String),
    ImageCleared,
    /// Send whatever is in the composer. Blank draft with no attached
    /// image is a no-op.
    SendMessage { timestamp: String },
    /// A scan file finished reading. `thread_id` was captured when the
    /// read started, so the message lands on that thread even if the
    /// user switched cases while the read was in flight.
    ScanUploaded {
        thread_id: String,
        data_uri: String,
        timestamp: String,
    },
    NewCaseFieldChanged(NewCaseField, String),
    /// Append a thread from the add-case draft, activate it, and reset
    /// the draft to its defaults for `today`.
    AddCase { today: String },
}

pub fn reduce(state: &ConsultationState, action: ConsultationAction) -> ConsultationState {
    match action {
        ConsultationAction::SelectThread(id) => ConsultationState {
            active_thread_id: id,
            ..state.clone()
        },
        ConsultationAction::InputChanged(draft) => ConsultationState {
            draft,
            ..state.clone()
        },
        ConsultationAction::ImageSelected(data_uri) => ConsultationState {
            pending_image: Some(data_uri),
            ..state.clone()
        },
        ConsultationAction::ImageCleared => ConsultationState {
            pending_image: None,
            ..state.clone()
        },
        ConsultationAction::SendMessage { timestamp } => {
            if !state.composing() {
                return state.clone();
            }
            let Some(target) = state.active_thread().map(|t| t.id.clone()) else {
                return state.clone();
            };

            let mut next = state.clone();
            for thread in &mut next.threads {
                if thread.id == target {
                    thread.messages.push(CaseMessage {
                        id: thread.next_message_id(),
                        body: MessageBody::User {
                            text: state.draft.clone(),
                            image: state.pending_image.clone(),
                        },
                        timestamp,
                    });
                    break;
                }
            }
            next.draft.clear();
            next.pending_image = None;
            next
        }
        ConsultationAction::ScanUploaded {
            thread_id,
            data_uri,
            timestamp,
        } => {
            let mut next = state.clone();
            let Some(thread) = next.threads.iter_mut().find(|t| t.id == thread_id) else {
                tracing::warn!(thread_id = %thread_id, "scan finished for a thread that no longer exists");
                return state.clone();
            };
            thread.messages.push(CaseMessage {
                id: thread.next_message_id(),
                body: MessageBody::System {
                    text: "Scan Uploaded".to_string(),
                    image: Some(data_uri),
                },
                timestamp,
            });
            next
        }
        ConsultationAction::NewCaseFieldChanged(field, value) => {
            let mut next = state.clone();
            match field {
                NewCaseField::Title => next.new_case.title = value,
                NewCaseField::PatientName => next.new_case.patient_name = value,
                NewCaseField::Date => next.new_case.date = value,
                NewCaseField::CaseType => next.new_case.case_type = value,
            }
            next
        }
        ConsultationAction::AddCase { today } => {
            let mut next = state.clone();
            let id = format!("thread-{}", next.threads.len() + 1);
            next.threads.push(CaseThread {
                id: id.clone(),
                title: state.new_case.title.clone(),
                patient_name: state.new_case.patient_name.clone(),
                date: state.new_case.date.clone(),
                case_type: state.new_case.case_type.clone(),
                icon: ThreadIcon::Folder,
                messages: Vec::new(),
            });
            next.active_thread_id = id;
            next.new_case = NewCaseDraft::for_date(&today);
            next
        }
    }
}

fn assistant(id: u32, text: &str, timestamp: &str) -> CaseMessage {
    CaseMessage {
        id,
        body: MessageBody::Assistant {
            text: text.to_string(),
        },
        timestamp: timestamp.to_string(),
    }
}

fn user(id: u32, text: &str, timestamp: &str) -> CaseMessage {
    CaseMessage {
        id,
        body: MessageBody::User {
            text: text.to_string(),
            image: None,
        },
        timestamp: timestamp.to_string(),
    }
}

fn seed_threads() -> Vec<CaseThread> {
    vec![
        CaseThread {
            id: "thread-1".to_string(),
            title: "Case 1".to_string(),
            patient_name: "John Smith".to_string(),
            date: "2025-03-28".to_string(),
            case_type: "Implant Consultation".to_string(),
            icon: ThreadIcon::Folder,
            messages: vec![
                user(1, "Initial consultation for dental implants", "9:30 AM"),
                assistant(2, "Patient has good bone density in the lower jaw", "9:32 AM"),
            ],
        },
        CaseThread {
            id: "thread-2".to_string(),
            title: "Case 2".to_string(),
            patient_name: "Sarah Johnson".to_string(),
            date: "2025-04-01".to_string(),
            case_type: "Low Bone Density".to_string(),
            icon: ThreadIcon::Folder,
            messages: vec![
                user(
                    1,
                    "What are the latest dental implant options for patients who have issues with low bone density",
                    "10:24 AM",
                ),
                assistant(2, "New research shows that implants made out of ....", "10:25 AM"),
                CaseMessage {
                    id: 3,
                    body: MessageBody::System {
                        text: "Scan Uploaded".to_string(),
                        image: None,
                    },
                    timestamp: "10:26 AM".to_string(),
                },
                user(
                    4,
                    "What are the potential risks or challenges on using that kind of implant on the number 14 tooth",
                    "10:28 AM",
                ),
            ],
        },
        CaseThread {
            id: "thread-3".to_string(),
            title: "Latest Implants".to_string(),
            patient_name: "Research".to_string(),
            date: "2025-03-15".to_string(),
            case_type: "Research".to_string(),
            icon: ThreadIcon::Tooth,
            messages: vec![
                user(1, "What are the latest advancements in dental implant materials?", "2:15 PM"),
                assistant(
                    2,
                    "Recent advancements include zirconia implants, which offer better biocompatibility and aesthetic results compared to traditional titanium implants.",
                    "2:16 PM",
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> ConsultationState {
        ConsultationState::seeded("2025-04-02")
    }

    #[test]
    fn seeds_start_on_the_second_case() {
        let state = seeded();
        assert_eq!(state.threads.len(), 3);

        let active = state.active_thread().expect("active thread");
        assert_eq!(active.id, "thread-2");
        assert_eq!(active.messages.len(), 4);
    }

    #[test]
    fn unknown_selection_falls_back_to_the_first_thread() {
        let state = reduce(
            &seeded(),
            ConsultationAction::SelectThread("thread-99".to_string()),
        );

        let active = state.active_thread().expect("active thread");
        assert_eq!(active.id, "thread-1");
    }

    #[test]
    fn send_appends_one_user_message_and_clears_the_composer() {
        let mut state = seeded();
        state.draft = "hello".to_string();

        let before = state.active_thread().expect("active").messages.len();
        let next = reduce(
            &state,
            ConsultationAction::SendMessage {
                timestamp: "10:30 AM".to_string(),
            },
        );

        let active = next.active_thread().expect("active");
        assert_eq!(active.messages.len(), before + 1);

        let last = active.messages.last().expect("last message");
        assert_eq!(last.id, before as u32 + 1);
        assert_eq!(last.body.text(), "hello");
        assert_eq!(last.body.sender_label(), "user");
        assert!(next.draft.is_empty());
        assert_eq!(next.pending_image, None);
    }

    #[test]
    fn blank_send_with_no_image_is_a_no_op() {
        let mut state = seeded();
        state.draft = "   ".to_string();

        let next = reduce(
            &state,
            ConsultationAction::SendMessage {
                timestamp: "10:30 AM".to_string(),
            },
        );
        assert_eq!(next, state);
    }

    #[test]
    fn image_only_send_goes_through() {
        let mut state = seeded();
        state.pending_image = Some("data:image/png;base64,AAAA".to_string());

        let next = reduce(
            &state,
            ConsultationAction::SendMessage {
                timestamp: "10:31 AM".to_string(),
            },
        );

        let last = next
            .active_thread()
            .and_then(|t| t.messages.last())
            .expect("last message");
        assert_eq!(last.body.image(), Some("data:image/png;base64,AAAA"));
        assert_eq!(next.pending_image, None);
    }

    #[test]
    fn scan_lands_on_the_thread_captured_at_read_start() {
        let state = seeded();
        // User switches cases while the file read is still running.
        let switched = reduce(
            &state,
            ConsultationAction::SelectThread("thread-3".to_string()),
        );

        let next = reduce(
            &switched,
            ConsultationAction::ScanUploaded {
                thread_id: "thread-2".to_string(),
                data_uri: "data:image/png;base64,BBBB".to_string(),
                timestamp: "10:40 AM".to_string(),
            },
        );

        let target = next
            .threads
            .iter()
            .find(|t| t.id == "thread-2")
            .expect("thread-2");
        assert_eq!(target.messages.len(), 5);

        let last = target.messages.last().expect("last message");
        assert_eq!(last.body.sender_label(), "system");
        assert_eq!(last.body.text(), "Scan Uploaded");
        assert_eq!(last.body.image(), Some("data:image/png;base64,BBBB"));

        let other = next
            .threads
            .iter()
            .find(|t| t.id == "thread-3")
            .expect("thread-3");
        assert_eq!(other.messages.len(), 2);
    }

    #[test]
    fn scan_for_a_missing_thread_is_dropped() {
        let state = seeded();
        let next = reduce(
            &state,
            ConsultationAction::ScanUploaded {
                thread_id: "thread-42".to_string(),
                data_uri: "data:image/png;base64,CCCC".to_string(),
                timestamp: "10:41 AM".to_string(),
            },
        );
        assert_eq!(next, state);
    }

    #[test]
    fn add_case_appends_activates_and_resets_the_draft() {
        let mut state = seeded();
        state.new_case.title = "Case 4".to_string();
        state.new_case.patient_name = "Ana Diaz".to_string();

        let next = reduce(
            &state,
            ConsultationAction::AddCase {
                today: "2025-04-02".to_string(),
            },
        );

        assert_eq!(next.threads.len(), 4);
        let created = next.active_thread().expect("active thread");
        assert_eq!(created.id, "thread-4");
        assert_eq!(created.title, "Case 4");
        assert_eq!(created.patient_name, "Ana Diaz");
        assert!(created.messages.is_empty());

        assert_eq!(next.new_case, NewCaseDraft::for_date("2025-04-02"));
    }

    #[test]
    fn message_ids_stay_locally_monotonic() {
        let mut state = seeded();
        for n in 0..3 {
            state.draft = format!("note {n}");
            state = reduce(
                &state,
                ConsultationAction::SendMessage {
                    timestamp: "11:00 AM".to_string(),
                },
            );
        }

        let ids: Vec<u32> = state
            .active_thread()
            .expect("active")
            .messages
            .iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }
}
