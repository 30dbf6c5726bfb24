use dioxus::prelude::*;

use crate::components::input::{FieldLabel, InputType, ValidatedInput};
use crate::form::{ErrorKey, FormAction, FormField, FormState};

#[derive(Props, PartialEq, Clone)]
pub struct PersonalDetailsFormProps {
    pub state: Signal<FormState>,
    pub dispatch: EventHandler<FormAction>,
    pub minimum_age: u32,
}

#[component]
pub fn PersonalDetailsForm(props: PersonalDetailsFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let update = move |field: FormField| {
        move |value: String| dispatch.call(FormAction::UpdateField(field, value))
    };

    rsx! {
        div {
            class: "col-md-6",
            FieldLabel { text: "First Name".to_string() }
            ValidatedInput {
                name: FormField::FirstName.name().to_string(),
                value: state().first_name,
                placeholder: "Enter your first name here..".to_string(),
                error: state().errors.message(ErrorKey::FirstName),
                on_change: update(FormField::FirstName)
            }
        }
        div {
            class: "col-md-6",
            FieldLabel { text: "Last Name".to_string() }
            ValidatedInput {
                name: FormField::LastName.name().to_string(),
                value: state().last_name,
                placeholder: "Enter your last name here..".to_string(),
                error: state().errors.message(ErrorKey::LastName),
                on_change: update(FormField::LastName)
            }
        }
        div {
            class: "col-md-6",
            FieldLabel { text: "E-mail".to_string() }
            ValidatedInput {
                name: FormField::Email.name().to_string(),
                value: state().email,
                placeholder: "ex: myname@example.com".to_string(),
                input_type: InputType::Email,
                error: state().errors.message(ErrorKey::Email),
                on_change: update(FormField::Email)
            }
        }
        div {
            class: "col-md-6",
            FieldLabel { text: "Date of Birth".to_string() }
            ValidatedInput {
                name: FormField::Dob.name().to_string(),
                value: state().dob,
                input_type: InputType::Date,
                error: state().errors.message(ErrorKey::Dob),
                on_change: update(FormField::Dob)
            }
            p {
                class: "text-muted",
                "(Min. age should be {props.minimum_age} years)"
            }
        }
    }
}
