use odonto_core::forms::{TaskDraft, validate_task};
use odonto_core::tasks;
use odonto_shared::{TaskCreate, TaskPatch};
use uuid::Uuid;
use yew::{
    Callback, Html, MouseEvent, Properties, UseReducerHandle, function_component, html,
    use_effect_with, use_state,
};

use crate::components::{StatsBar, TaskList, TaskModal, TaskModalMode, TaskModalState};
use crate::ops;
use crate::store::Tasks;

#[derive(Properties, PartialEq)]
pub struct TasksPageProps {
    pub tasks: UseReducerHandle<Tasks>,
}

#[function_component(TasksPage)]
pub fn tasks_page(props: &TasksPageProps) -> Html {
    let modal_state = use_state(|| None::<TaskModalState>);

    // Initial fetch.
    {
        let tasks = props.tasks.clone();
        use_effect_with((), move |_| {
            ops::tasks::refresh(tasks);
            || ()
        });
    }

    let stats = tasks::stats(&props.tasks.0.tasks);

    let on_add_click = {
        let modal_state = modal_state.clone();
        Callback::from(move |_: MouseEvent| modal_state.set(Some(TaskModalState::add())))
    };

    let on_edit = {
        let tasks = props.tasks.clone();
        let modal_state = modal_state.clone();
        Callback::from(move |id: Uuid| {
            if let Some(task) = tasks.0.tasks.iter().find(|t| t.id == id) {
                let draft = TaskDraft {
                    title: task.title.clone(),
                    description: task.description.clone(),
                    priority: task.priority,
                };
                modal_state.set(Some(TaskModalState::edit(id, draft)));
            }
        })
    };

    let on_toggle = {
        let tasks = props.tasks.clone();
        Callback::from(move |id: Uuid| ops::tasks::toggle(tasks.clone(), id))
    };

    let on_delete = {
        let tasks = props.tasks.clone();
        Callback::from(move |id: Uuid| ops::tasks::remove(tasks.clone(), id))
    };

    let on_modal_close = {
        let modal_state = modal_state.clone();
        Callback::from(move |_: MouseEvent| modal_state.set(None))
    };

    let on_modal_submit = {
        let tasks = props.tasks.clone();
        let modal_state = modal_state.clone();
        Callback::from(move |mut state: TaskModalState| {
            if let Some(message) = validate_task(&state.draft) {
                state.error = Some(message);
                modal_state.set(Some(state));
                return;
            }

            match state.mode {
                TaskModalMode::Add => ops::tasks::create(
                    tasks.clone(),
                    TaskCreate {
                        title: state.draft.title,
                        description: state.draft.description,
                        priority: state.draft.priority,
                    },
                ),
                TaskModalMode::Edit(id) => ops::tasks::update(
                    tasks.clone(),
                    id,
                    TaskPatch {
                        title: Some(state.draft.title),
                        description: Some(state.draft.description),
                        priority: Some(state.draft.priority),
                        completed: None,
                    },
                ),
            }
            modal_state.set(None);
        })
    };

    html! {
        <div class="workspace tasks">
            <div class="toolbar">
                <StatsBar stats={stats} />
                <button class="btn primary" onclick={on_add_click}>{ "Add task" }</button>
            </div>
            {
                match &props.tasks.0.error {
                    Some(message) => html! { <div class="banner error">{ message }</div> },
                    None => html! {},
                }
            }
            <TaskList
                tasks={props.tasks.0.tasks.clone()}
                on_toggle={on_toggle}
                on_edit={on_edit}
                on_delete={on_delete}
            />
            <TaskModal
                modal_state={modal_state}
                modal_busy={props.tasks.0.loading}
                on_submit={on_modal_submit}
                on_close={on_modal_close}
            />
        </div>
    }
}
