use dioxus::prelude::*;

use crate::components::input::{FieldLabel, ValidatedInput};
use crate::form::{AddressLine, ErrorKey, FormAction, FormField, FormState};

#[derive(Props, PartialEq, Clone)]
pub struct AddressFormProps {
    pub state: Signal<FormState>,
    pub dispatch: EventHandler<FormAction>,
}

/// Residential address, the "same address" toggle and the permanent address.
/// Permanent inputs are disabled and mirror the residential values while the toggle is on.
#[component]
pub fn AddressForm(props: AddressFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let update = move |field: FormField| {
        move |value: String| dispatch.call(FormAction::UpdateField(field, value))
    };
    let same_address = state().same_address;

    rsx! {
        label { class: "section-label", "Residential Address" }
        div {
            class: "col-md-6",
            FieldLabel { text: "Street 1".to_string() }
            ValidatedInput {
                name: FormField::Residential(AddressLine::Street1).name().to_string(),
                value: state().residential_address.street1,
                error: state().errors.message(ErrorKey::ResidentialStreet1),
                on_change: update(FormField::Residential(AddressLine::Street1))
            }
        }
        div {
            class: "col-md-6",
            FieldLabel { text: "Street 2".to_string() }
            ValidatedInput {
                name: FormField::Residential(AddressLine::Street2).name().to_string(),
                value: state().residential_address.street2,
                error: state().errors.message(ErrorKey::ResidentialStreet2),
                on_change: update(FormField::Residential(AddressLine::Street2))
            }
        }

        div {
            class: "form-check",
            input {
                class: "form-check-input",
                r#type: "checkbox",
                id: "sameAddress",
                name: FormField::SameAddress.name(),
                checked: same_address,
                onchange: move |event| dispatch.call(FormAction::SetSameAddress(event.checked()))
            }
            label {
                class: "form-check-label",
                r#for: "sameAddress",
                "Same as Residential Address"
            }
        }

        label { class: "section-label", "Permanent Address" }
        div {
            class: "col-md-6",
            FieldLabel { text: "Street 1".to_string(), required: !same_address }
            ValidatedInput {
                name: FormField::Permanent(AddressLine::Street1).name().to_string(),
                value: state().permanent_address.street1,
                error: state().errors.message(ErrorKey::PermanentStreet1),
                disabled: same_address,
                on_change: update(FormField::Permanent(AddressLine::Street1))
            }
        }
        div {
            class: "col-md-6",
            FieldLabel { text: "Street 2".to_string(), required: !same_address }
            ValidatedInput {
                name: FormField::Permanent(AddressLine::Street2).name().to_string(),
                value: state().permanent_address.street2,
                error: state().errors.message(ErrorKey::PermanentStreet2),
                disabled: same_address,
                on_change: update(FormField::Permanent(AddressLine::Street2))
            }
        }
    }
}
