use odonto_core::consultation::{ConsultationAction, NewCaseField};
use odonto_core::datetime;
use yew::{
    Callback, Html, MouseEvent, Properties, UseReducerHandle, function_component, html,
    use_mut_ref, use_state,
};

use crate::components::{Composer, MessageArea, NewCaseModal, ThreadSidebar};
use crate::store::Consultation;

#[derive(Properties, PartialEq)]
pub struct DentalPageProps {
    pub consultation: UseReducerHandle<Consultation>,
}

#[function_component(DentalPage)]
pub fn dental_page(props: &DentalPageProps) -> Html {
    let consultation = props.consultation.clone();
    let add_case_open = use_state(|| false);
    // Keeps in-flight file reads alive until their callback fires.
    let readers = use_mut_ref(Vec::<gloo::file::callbacks::FileReader>::new);

    let on_select = {
        let consultation = consultation.clone();
        Callback::from(move |id: String| {
            consultation.dispatch(ConsultationAction::SelectThread(id));
        })
    };

    let on_input = {
        let consultation = consultation.clone();
        Callback::from(move |draft: String| {
            consultation.dispatch(ConsultationAction::InputChanged(draft));
        })
    };

    let on_send = {
        let consultation = consultation.clone();
        Callback::from(move |(): ()| {
            consultation.dispatch(ConsultationAction::SendMessage {
                timestamp: datetime::now_clock_label(),
            });
        })
    };

    let on_image_cleared = {
        let consultation = consultation.clone();
        Callback::from(move |_: MouseEvent| {
            consultation.dispatch(ConsultationAction::ImageCleared);
        })
    };

    // Composer attachment: the data URI becomes the pending image and
    // goes out with the next send.
    let on_image_selected = {
        let consultation = consultation.clone();
        let readers = readers.clone();
        Callback::from(move |web_file: web_sys::File| {
            let consultation = consultation.clone();
            let file = gloo::file::File::from(web_file);
            let reader = gloo::file::callbacks::read_as_data_url(&file, move |result| {
                match result {
                    Ok(data_uri) => {
                        consultation.dispatch(ConsultationAction::ImageSelected(data_uri));
                    }
                    Err(error) => tracing::error!(%error, "image read failed"),
                }
            });
            readers.borrow_mut().push(reader);
        })
    };

    // Scan upload: the target thread is pinned before the read starts,
    // so a case switch mid-read cannot misfile the system message.
    let on_scan_selected = {
        let consultation = consultation.clone();
        let readers = readers.clone();
        Callback::from(move |web_file: web_sys::File| {
            let Some(thread_id) = consultation.0.active_thread().map(|t| t.id.clone()) else {
                return;
            };
            let consultation = consultation.clone();
            let file = gloo::file::File::from(web_file);
            let reader = gloo::file::callbacks::read_as_data_url(&file, move |result| {
                match result {
                    Ok(data_uri) => {
                        consultation.dispatch(ConsultationAction::ScanUploaded {
                            thread_id,
                            data_uri,
                            timestamp: datetime::now_clock_label(),
                        });
                    }
                    Err(error) => tracing::error!(%error, "scan read failed"),
                }
            });
            readers.borrow_mut().push(reader);
        })
    };

    let on_add_case_click = {
        let add_case_open = add_case_open.clone();
        Callback::from(move |_: MouseEvent| add_case_open.set(true))
    };

    let on_case_field = {
        let consultation = consultation.clone();
        Callback::from(move |(field, value): (NewCaseField, String)| {
            consultation.dispatch(ConsultationAction::NewCaseFieldChanged(field, value));
        })
    };

    let on_case_submit = {
        let consultation = consultation.clone();
        let add_case_open = add_case_open.clone();
        Callback::from(move |_: MouseEvent| {
            consultation.dispatch(ConsultationAction::AddCase {
                today: datetime::today_ymd(),
            });
            add_case_open.set(false);
        })
    };

    let on_case_close = {
        let add_case_open = add_case_open.clone();
        Callback::from(move |_: MouseEvent| add_case_open.set(false))
    };

    let state = &props.consultation.0;
    let active_thread = state.active_thread().cloned();

    html! {
        <div class="workspace dental">
            <ThreadSidebar
                threads={state.threads.clone()}
                active_id={state.active_thread_id.clone()}
                on_select={on_select}
                on_add_case={on_add_case_click}
            />
            <div class="chat-column">
                {
                    match active_thread {
                        Some(thread) => html! {
                            <MessageArea thread={thread} on_scan_selected={on_scan_selected} />
                        },
                        None => html! { <div class="panel empty">{ "No cases" }</div> },
                    }
                }
                <Composer
                    draft={state.draft.clone()}
                    pending_image={state.pending_image.clone()}
                    on_input={on_input}
                    on_send={on_send}
                    on_image_selected={on_image_selected}
                    on_image_cleared={on_image_cleared}
                />
            </div>
            <NewCaseModal
                open={*add_case_open}
                draft={state.new_case.clone()}
                on_field={on_case_field}
                on_submit={on_case_submit}
                on_close={on_case_close}
            />
        </div>
    }
}
