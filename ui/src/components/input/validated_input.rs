use dioxus::prelude::*;

use crate::utils::validation::input_class;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum InputType {
    Text,
    Email,
    Date,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Date => "date",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub name: String,
    pub value: String,
    #[props(default)]
    pub placeholder: String,
    #[props(default = InputType::Text)]
    pub input_type: InputType,
    #[props(default)]
    pub error: Option<String>,
    #[props(default)]
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

/// Controlled input that turns red and shows its message when `error` is set
#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    let class = input_class(props.error.is_some());

    rsx! {
        input {
            class: "{class}",
            name: "{props.name}",
            r#type: "{props.input_type.as_str()}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            disabled: props.disabled,
            oninput: move |event| props.on_change.call(event.value())
        }
        if let Some(message) = props.error {
            FieldError { message }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct FieldErrorProps {
    pub message: String,
}

#[component]
pub fn FieldError(props: FieldErrorProps) -> Element {
    rsx! {
        div {
            class: "invalid-feedback",
            "{props.message}"
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct FieldLabelProps {
    pub text: String,
    #[props(default = true)]
    pub required: bool,
}

#[component]
pub fn FieldLabel(props: FieldLabelProps) -> Element {
    rsx! {
        label {
            class: "form-label",
            "{props.text}"
            if props.required {
                span { class: "text-danger", "*" }
            }
        }
    }
}
