use odonto_core::tasks::TasksAction;
use odonto_shared::{TaskCreate, TaskDto, TaskPatch};
use uuid::Uuid;
use yew::UseReducerHandle;

use crate::api;
use crate::store::Tasks;

pub fn refresh(tasks: UseReducerHandle<Tasks>) {
    tasks.dispatch(TasksAction::Started);
    wasm_bindgen_futures::spawn_local(async move {
        match api::authed_post_empty::<Vec<TaskDto>>("/walker/tasks").await {
            Ok(list) => tasks.dispatch(TasksAction::Loaded(list)),
            Err(error) => tasks.dispatch(TasksAction::Failed(error)),
        }
    });
}

pub fn create(tasks: UseReducerHandle<Tasks>, draft: TaskCreate) {
    tasks.dispatch(TasksAction::Started);
    wasm_bindgen_futures::spawn_local(async move {
        match api::authed_post::<TaskDto, _>("/walker/tasks", &draft).await {
            Ok(created) => tasks.dispatch(TasksAction::Added(created)),
            Err(error) => tasks.dispatch(TasksAction::Failed(error)),
        }
    });
}

pub fn update(tasks: UseReducerHandle<Tasks>, id: Uuid, patch: TaskPatch) {
    tasks.dispatch(TasksAction::Started);
    wasm_bindgen_futures::spawn_local(async move {
        let path = format!("/walker/tasks/{id}");
        match api::authed_post::<TaskDto, _>(&path, &patch).await {
            Ok(updated) => tasks.dispatch(TasksAction::Updated(updated)),
            Err(error) => tasks.dispatch(TasksAction::Failed(error)),
        }
    });
}

pub fn remove(tasks: UseReducerHandle<Tasks>, id: Uuid) {
    tasks.dispatch(TasksAction::Started);
    wasm_bindgen_futures::spawn_local(async move {
        let path = format!("/walker/tasks/{id}");
        match api::authed_delete(&path).await {
            Ok(()) => tasks.dispatch(TasksAction::Removed(id)),
            Err(error) => tasks.dispatch(TasksAction::Failed(error)),
        }
    });
}

pub fn toggle(tasks: UseReducerHandle<Tasks>, id: Uuid) {
    tasks.dispatch(TasksAction::Started);
    wasm_bindgen_futures::spawn_local(async move {
        let path = format!("/walker/tasks/{id}/toggle");
        match api::authed_post_unit(&path).await {
            Ok(()) => tasks.dispatch(TasksAction::Toggled(id)),
            Err(error) => tasks.dispatch(TasksAction::Failed(error)),
        }
    });
}
