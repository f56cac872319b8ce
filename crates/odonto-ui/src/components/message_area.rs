use odonto_core::consultation::CaseThread;
use yew::{Callback, Html, Properties, TargetCast, function_component, html};

#[derive(Properties, PartialEq)]
pub struct MessageAreaProps {
    pub thread: CaseThread,
    /// Fired with a scan file picked from the header control; the page
    /// owns the read and the resulting system message.
    pub on_scan_selected: Callback<web_sys::File>,
}

#[function_component(MessageArea)]
pub fn message_area(props: &MessageAreaProps) -> Html {
    let on_scan_change = {
        let on_scan_selected = props.on_scan_selected.clone();
        Callback::from(move |e: web_sys::Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                on_scan_selected.emit(file);
            }
            input.set_value("");
        })
    };

    html! {
        <div class="panel messages">
            <div class="header">
                <div>
                    <div class="title">{ &props.thread.title }</div>
                    <div class="thread-subtitle">
                        { format!("{} · {} · {}", props.thread.patient_name, props.thread.date, props.thread.case_type) }
                    </div>
                </div>
                <label class="btn upload-scan">
                    { "Upload scan" }
                    <input
                        type="file"
                        accept="image/*"
                        style="display:none"
                        onchange={on_scan_change}
                    />
                </label>
            </div>
            <div class="message-list">
                {
                    for props.thread.messages.iter().map(|message| {
                        let class = format!("bubble {}", message.body.sender_label());
                        html! {
                            <div class={class}>
                                <div class="content">{ message.body.text() }</div>
                                {
                                    match message.body.image() {
                                        Some(data_uri) => html! {
                                            <img class="attachment" src={data_uri.to_string()} alt="attached scan" />
                                        },
                                        None => html! {},
                                    }
                                }
                                <div class="timestamp">{ &message.timestamp }</div>
                            </div>
                        }
                    })
                }
                {
                    if props.thread.messages.is_empty() {
                        html! { <div class="empty">{ "No messages yet" }</div> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}
