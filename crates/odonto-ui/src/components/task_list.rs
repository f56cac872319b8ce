use odonto_shared::{TaskDto, TaskPriority};
use uuid::Uuid;
use yew::{Callback, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
    pub tasks: Vec<TaskDto>,
    pub on_toggle: Callback<Uuid>,
    pub on_edit: Callback<Uuid>,
    pub on_delete: Callback<Uuid>,
}

#[function_component(TaskList)]
pub fn task_list(props: &TaskListProps) -> Html {
    html! {
        <div class="panel list">
            <div class="header">{ "Tasks" }</div>
            {
                for props.tasks.iter().map(|task| html! {
                    <TaskListRow
                        task={task.clone()}
                        on_toggle={props.on_toggle.clone()}
                        on_edit={props.on_edit.clone()}
                        on_delete={props.on_delete.clone()}
                    />
                })
            }
            {
                if props.tasks.is_empty() {
                    html! { <div class="empty">{ "Nothing here yet" }</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TaskListRowProps {
    task: TaskDto,
    on_toggle: Callback<Uuid>,
    on_edit: Callback<Uuid>,
    on_delete: Callback<Uuid>,
}

#[function_component(TaskListRow)]
fn task_list_row(props: &TaskListRowProps) -> Html {
    let id = props.task.id;
    let class = if props.task.completed { "row done" } else { "row" };
    let priority_class = match props.task.priority {
        TaskPriority::High => "badge priority high",
        TaskPriority::Medium => "badge priority medium",
        TaskPriority::Low => "badge priority low",
    };
    let priority_label = match props.task.priority {
        TaskPriority::High => "high",
        TaskPriority::Medium => "medium",
        TaskPriority::Low => "low",
    };

    let on_toggle = props.on_toggle.clone();
    let on_edit = props.on_edit.clone();
    let on_delete = props.on_delete.clone();
    let has_description = !props.task.description.trim().is_empty();

    html! {
        <div class={class}>
            <input
                type="checkbox"
                checked={props.task.completed}
                onchange={move |_| on_toggle.emit(id)}
            />
            <div>
                <div>{ &props.task.title }</div>
                {
                    if has_description {
                        html! { <div class="task-subtitle">{ &props.task.description }</div> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <span class={priority_class}>{ priority_label }</span>
            <button class="btn" onclick={move |_| on_edit.emit(id)}>{ "Edit" }</button>
            <button class="btn danger" onclick={move |_| on_delete.emit(id)}>{ "Delete" }</button>
        </div>
    }
}
