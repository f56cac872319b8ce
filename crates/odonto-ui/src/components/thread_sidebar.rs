use odonto_core::consultation::{CaseThread, ThreadIcon};
use yew::{Callback, Html, MouseEvent, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct ThreadSidebarProps {
    pub threads: Vec<CaseThread>,
    pub active_id: String,
    pub on_select: Callback<String>,
    pub on_add_case: Callback<MouseEvent>,
}

#[function_component(ThreadSidebar)]
pub fn thread_sidebar(props: &ThreadSidebarProps) -> Html {
    html! {
        <div class="panel sidebar">
            <div class="header">
                { "Cases" }
                <button class="btn add-case" onclick={props.on_add_case.clone()}>{ "+ New case" }</button>
            </div>
            {
                for props.threads.iter().map(|thread| {
                    let id = thread.id.clone();
                    let active = props.active_id == id;
                    let class = if active { "item active" } else { "item" };
                    let glyph = match thread.icon {
                        ThreadIcon::Folder => "📁",
                        ThreadIcon::Tooth => "🦷",
                    };
                    let on_select = props.on_select.clone();
                    html! {
                        <div class={class} onclick={move |_| on_select.emit(id.clone())}>
                            <span class="icon">{ glyph }</span>
                            <div>
                                <div class="title">{ &thread.title }</div>
                                <div class="thread-subtitle">
                                    { format!("{} · {}", thread.patient_name, thread.date) }
                                </div>
                                <div class="thread-type">{ &thread.case_type }</div>
                            </div>
                        </div>
                    }
                })
            }
        </div>
    }
}
