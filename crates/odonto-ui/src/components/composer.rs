use yew::{Callback, Html, MouseEvent, Properties, TargetCast, function_component, html};

#[derive(Properties, PartialEq)]
pub struct ComposerProps {
    pub draft: String,
    pub pending_image: Option<String>,
    pub on_input: Callback<String>,
    pub on_send: Callback<()>,
    pub on_image_selected: Callback<web_sys::File>,
    pub on_image_cleared: Callback<MouseEvent>,
}

#[function_component(Composer)]
pub fn composer(props: &ComposerProps) -> Html {
    let on_text_input = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: web_sys::InputEvent| {
            let area: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            on_input.emit(area.value());
        })
    };

    // Enter sends, Shift+Enter inserts a newline.
    let on_keydown = {
        let on_send = props.on_send.clone();
        Callback::from(move |e: web_sys::KeyboardEvent| {
            if e.key() == "Enter" && !e.shift_key() {
                e.prevent_default();
                on_send.emit(());
            }
        })
    };

    let on_send_click = {
        let on_send = props.on_send.clone();
        Callback::from(move |_: MouseEvent| on_send.emit(()))
    };

    let on_image_change = {
        let on_image_selected = props.on_image_selected.clone();
        Callback::from(move |e: web_sys::Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                on_image_selected.emit(file);
            }
            input.set_value("");
        })
    };

    let send_disabled = props.draft.trim().is_empty() && props.pending_image.is_none();

    html! {
        <div class="composer">
            {
                match &props.pending_image {
                    Some(data_uri) => html! {
                        <div class="preview">
                            <img src={data_uri.clone()} alt="selected image" />
                            <button class="btn remove" onclick={props.on_image_cleared.clone()}>{ "✕" }</button>
                        </div>
                    },
                    None => html! {},
                }
            }
            <div class="controls">
                <label class="btn attach">
                    { "📎" }
                    <input
                        type="file"
                        accept="image/*"
                        style="display:none"
                        onchange={on_image_change}
                    />
                </label>
                <textarea
                    placeholder="Type a message…"
                    value={props.draft.clone()}
                    oninput={on_text_input}
                    onkeydown={on_keydown}
                />
                <button class="btn send" disabled={send_disabled} onclick={on_send_click}>
                    { "Send" }
                </button>
            </div>
        </div>
    }
}
