use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct FieldErrorProps {
    pub error: Option<String>,
}

/// Inline validation message rendered directly under a form field.
#[function_component(FieldError)]
pub fn field_error(props: &FieldErrorProps) -> Html {
    match &props.error {
        Some(message) => html! { <div class="field-error">{ message }</div> },
        None => html! {},
    }
}
