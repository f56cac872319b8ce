use odonto_shared::{TaskDto, TaskPriority};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TasksState {
    pub tasks: Vec<TaskDto>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Slice actions mirror the backend responses: the local list is
/// updated when a call resolves, never optimistically.
#[derive(Debug, Clone, PartialEq)]
pub enum TasksAction {
    Started,
    Loaded(Vec<TaskDto>),
    Added(TaskDto),
    Updated(TaskDto),
    Removed(Uuid),
    Toggled(Uuid),
    Failed(String),
}

pub fn reduce(state: &TasksState, action: TasksAction) -> TasksState {
    match action {
        TasksAction::Started => TasksState {
            tasks: state.tasks.clone(),
            loading: true,
            error: None,
        },
        TasksAction::Loaded(tasks) => {
            tracing::debug!(total = tasks.len(), "task list refreshed");
            TasksState {
                tasks,
                loading: false,
                error: None,
            }
        }
        TasksAction::Added(task) => {
            let mut tasks = state.tasks.clone();
            tasks.push(task);
            TasksState {
                tasks,
                loading: false,
                error: None,
            }
        }
        TasksAction::Updated(updated) => TasksState {
            tasks: state
                .tasks
                .iter()
                .map(|task| {
                    if task.id == updated.id {
                        updated.clone()
                    } else {
                        task.clone()
                    }
                })
                .collect(),
            loading: false,
            error: None,
        },
        TasksAction::Removed(id) => TasksState {
            tasks: state
                .tasks
                .iter()
                .filter(|task| task.id != id)
                .cloned()
                .collect(),
            loading: false,
            error: None,
        },
        TasksAction::Toggled(id) => TasksState {
            tasks: state
                .tasks
                .iter()
                .map(|task| {
                    if task.id == id {
                        let mut flipped = task.clone();
                        flipped.completed = !flipped.completed;
                        flipped
                    } else {
                        task.clone()
                    }
                })
                .collect(),
            loading: false,
            error: None,
        },
        TasksAction::Failed(error) => {
            tracing::warn!(error = %error, "task operation failed");
            TasksState {
                tasks: state.tasks.clone(),
                loading: false,
                error: Some(error),
            }
        }
    }
}

/// Derived counters, recomputed from the list on every read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

pub fn stats(tasks: &[TaskDto]) -> TaskStats {
    let total = tasks.len();
    let active = tasks.iter().filter(|t| !t.completed).count();

    TaskStats {
        total,
        active,
        completed: total - active,
        high: by_priority(tasks, TaskPriority::High),
        medium: by_priority(tasks, TaskPriority::Medium),
        low: by_priority(tasks, TaskPriority::Low),
    }
}

fn by_priority(tasks: &[TaskDto], priority: TaskPriority) -> usize {
    tasks.iter().filter(|t| t.priority == priority).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(title: &str, completed: bool, priority: TaskPriority) -> TaskDto {
        TaskDto {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: String::new(),
            completed,
            priority,
        }
    }

    fn sample_state() -> TasksState {
        TasksState {
            tasks: vec![
                task("Sterilize tray", false, TaskPriority::High),
                task("Order brackets", true, TaskPriority::Medium),
                task("Call lab", false, TaskPriority::Low),
            ],
            loading: false,
            error: None,
        }
    }

    #[test]
    fn toggle_flips_only_the_targeted_task() {
        let state = sample_state();
        let target = state.tasks[1].id;

        let next = reduce(&state, TasksAction::Toggled(target));

        assert!(!next.tasks[0].completed);
        assert!(!next.tasks[1].completed, "target flips true -> false");
        assert!(!next.tasks[2].completed);

        let again = reduce(&next, TasksAction::Toggled(target));
        assert!(again.tasks[1].completed);
    }

    #[test]
    fn toggle_of_unknown_id_changes_nothing() {
        let state = sample_state();
        let next = reduce(&state, TasksAction::Toggled(Uuid::new_v4()));
        assert_eq!(next.tasks, state.tasks);
    }

    #[test]
    fn removed_drops_exactly_one_task() {
        let state = sample_state();
        let target = state.tasks[0].id;

        let next = reduce(&state, TasksAction::Removed(target));
        assert_eq!(next.tasks.len(), 2);
        assert!(next.tasks.iter().all(|t| t.id != target));
    }

    #[test]
    fn updated_replaces_the_matching_task() {
        let state = sample_state();
        let mut edited = state.tasks[2].clone();
        edited.title = "Call the other lab".to_string();
        edited.priority = TaskPriority::High;

        let next = reduce(&state, TasksAction::Updated(edited.clone()));
        assert_eq!(next.tasks[2], edited);
        assert_eq!(next.tasks[0], state.tasks[0]);
    }

    #[test]
    fn failure_preserves_the_list() {
        let state = sample_state();
        let next = reduce(&state, TasksAction::Failed("503".to_string()));

        assert_eq!(next.tasks, state.tasks);
        assert_eq!(next.error.as_deref(), Some("503"));
    }

    #[test]
    fn stats_count_by_completion_and_priority() {
        let state = sample_state();
        let counts = stats(&state.tasks);

        assert_eq!(counts.total, 3);
        assert_eq!(counts.active, 2);
        assert_eq!(counts.completed, 1);
        assert_eq!(counts.high, 1);
        assert_eq!(counts.medium, 1);
        assert_eq!(counts.low, 1);
    }
}
