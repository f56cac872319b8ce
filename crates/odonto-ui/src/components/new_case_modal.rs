use odonto_core::consultation::{NewCaseDraft, NewCaseField};
use yew::{Callback, Html, MouseEvent, Properties, TargetCast, function_component, html};

#[derive(Properties, PartialEq)]
pub struct NewCaseModalProps {
    pub open: bool,
    pub draft: NewCaseDraft,
    pub on_field: Callback<(NewCaseField, String)>,
    pub on_submit: Callback<MouseEvent>,
    pub on_close: Callback<MouseEvent>,
}

/// Add-case form. None of the fields are required; submit always goes
/// through with whatever is in the draft.
#[function_component(NewCaseModal)]
pub fn new_case_modal(props: &NewCaseModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    let text_input = |field: NewCaseField| {
        let on_field = props.on_field.clone();
        Callback::from(move |e: web_sys::InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_field.emit((field, input.value()));
        })
    };

    let on_type_change = {
        let on_field = props.on_field.clone();
        Callback::from(move |e: web_sys::Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            on_field.emit((NewCaseField::CaseType, select.value()));
        })
    };

    let case_types = ["Consultation", "Implant Consultation", "Low Bone Density", "Research"];

    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="header">{ "New case" }</div>
                <label>{ "Title" }
                    <input
                        value={props.draft.title.clone()}
                        oninput={text_input(NewCaseField::Title)}
                    />
                </label>
                <label>{ "Patient name" }
                    <input
                        value={props.draft.patient_name.clone()}
                        oninput={text_input(NewCaseField::PatientName)}
                    />
                </label>
                <label>{ "Date" }
                    <input
                        type="date"
                        value={props.draft.date.clone()}
                        oninput={text_input(NewCaseField::Date)}
                    />
                </label>
                <label>{ "Type" }
                    <select onchange={on_type_change}>
                        {
                            for case_types.iter().map(|case_type| html! {
                                <option
                                    value={*case_type}
                                    selected={props.draft.case_type == *case_type}
                                >
                                    { *case_type }
                                </option>
                            })
                        }
                    </select>
                </label>
                <div class="actions">
                    <button class="btn" onclick={props.on_close.clone()}>{ "Cancel" }</button>
                    <button class="btn primary" onclick={props.on_submit.clone()}>{ "Create" }</button>
                </div>
            </div>
        </div>
    }
}
