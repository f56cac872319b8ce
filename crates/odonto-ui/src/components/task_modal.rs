use odonto_core::forms::TaskDraft;
use odonto_shared::TaskPriority;
use uuid::Uuid;
use yew::{
    Callback, Html, MouseEvent, Properties, TargetCast, UseStateHandle, function_component, html,
};

#[derive(Clone, PartialEq)]
pub enum TaskModalMode {
    Add,
    Edit(Uuid),
}

#[derive(Clone, PartialEq)]
pub struct TaskModalState {
    pub mode: TaskModalMode,
    pub draft: TaskDraft,
    pub error: Option<String>,
}

impl TaskModalState {
    pub fn add() -> Self {
        Self {
            mode: TaskModalMode::Add,
            draft: TaskDraft::default(),
            error: None,
        }
    }

    pub fn edit(id: Uuid, draft: TaskDraft) -> Self {
        Self {
            mode: TaskModalMode::Edit(id),
            draft,
            error: None,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TaskModalProps {
    pub modal_state: UseStateHandle<Option<TaskModalState>>,
    pub modal_busy: bool,
    pub on_submit: Callback<TaskModalState>,
    pub on_close: Callback<MouseEvent>,
}

#[function_component(TaskModal)]
pub fn task_modal(props: &TaskModalProps) -> Html {
    let modal_state = props.modal_state.clone();
    let Some(state) = (*modal_state).clone() else {
        return html! {};
    };

    let is_busy = props.modal_busy;
    let submit_state = state.clone();

    let on_save_click = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| on_submit.emit(submit_state.clone()))
    };

    let on_title_input = {
        let modal_state = modal_state.clone();
        Callback::from(move |e: web_sys::InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            if let Some(mut current) = (*modal_state).clone() {
                current.draft.title = input.value();
                current.error = None;
                modal_state.set(Some(current));
            }
        })
    };

    let on_description_input = {
        let modal_state = modal_state.clone();
        Callback::from(move |e: web_sys::InputEvent| {
            let area: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            if let Some(mut current) = (*modal_state).clone() {
                current.draft.description = area.value();
                modal_state.set(Some(current));
            }
        })
    };

    let on_priority_change = {
        let modal_state = modal_state.clone();
        Callback::from(move |e: web_sys::Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let priority = match select.value().as_str() {
                "high" => TaskPriority::High,
                "low" => TaskPriority::Low,
                _ => TaskPriority::Medium,
            };
            if let Some(mut current) = (*modal_state).clone() {
                current.draft.priority = priority;
                modal_state.set(Some(current));
            }
        })
    };

    let heading = match state.mode {
        TaskModalMode::Add => "Add task",
        TaskModalMode::Edit(_) => "Edit task",
    };
    let priority_value = match state.draft.priority {
        TaskPriority::High => "high",
        TaskPriority::Medium => "medium",
        TaskPriority::Low => "low",
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="header">{ heading }</div>
                <label>{ "Title" }
                    <input value={state.draft.title.clone()} oninput={on_title_input} />
                </label>
                <label>{ "Description" }
                    <textarea
                        value={state.draft.description.clone()}
                        oninput={on_description_input}
                    />
                </label>
                <label>{ "Priority" }
                    <select onchange={on_priority_change}>
                        {
                            for ["low", "medium", "high"].iter().map(|level| html! {
                                <option value={*level} selected={priority_value == *level}>
                                    { *level }
                                </option>
                            })
                        }
                    </select>
                </label>
                {
                    match &state.error {
                        Some(message) => html! { <div class="field-error">{ message }</div> },
                        None => html! {},
                    }
                }
                <div class="actions">
                    <button class="btn" onclick={props.on_close.clone()}>{ "Cancel" }</button>
                    <button class="btn primary" disabled={is_busy} onclick={on_save_click}>
                        { "Save" }
                    </button>
                </div>
            </div>
        </div>
    }
}
