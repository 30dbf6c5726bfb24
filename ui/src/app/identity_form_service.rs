use std::rc::Rc;

use chrono::Local;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::components::display::{LoadingIndicator, NotificationToast};
use crate::components::forms::{AddressForm, DocumentsForm, PersonalDetailsForm};
use crate::form::{completion_action, deliver, FormAction, FormState, SubmitOutcome};
use crate::services::client::HttpFormSubmitter;
use crate::services::config::get_global_config;
use crate::{console_error, console_info};

const IDENTITY_FORM_CSS: Asset = asset!("/assets/styling/identity_form.css");

/// Dismiss the current notification once its display time is over
fn schedule_dismiss(state: Signal<FormState>, dispatch: EventHandler<FormAction>, duration_ms: u32) {
    let Some(id) = state.peek().notification.as_ref().map(|n| n.id) else {
        return;
    };
    spawn(async move {
        TimeoutFuture::new(duration_ms).await;
        dispatch.call(FormAction::DismissNotification(id));
    });
}

#[component]
pub fn IdentityFormService() -> Element {
    let config = use_hook(get_global_config);
    let submitter = use_hook(|| Rc::new(HttpFormSubmitter::new(&get_global_config())));
    let mut state = use_signal(FormState::default);

    // Dispatch function for actions - in-place reduction keeps Signal reactivity
    let dispatch = EventHandler::new(move |action: FormAction| {
        state.with_mut(|s| s.reduce_in_place(action));
    });

    let minimum_age = config.minimum_age;
    let notification_ms = config.notification_duration_ms;
    let on_submit = move |_: MouseEvent| {
        let today = Local::now().date_naive();
        let started = state.with_mut(|s| s.begin_submission(&config, today));

        match started {
            Ok(payload) => {
                console_info!(
                    "[Identity Form] Submitting {} document(s) to {}",
                    payload.files().count(),
                    submitter.endpoint()
                );
                let submitter = submitter.clone();
                spawn(async move {
                    let result = deliver(submitter.as_ref(), payload).await;
                    if let Err(e) = &result {
                        console_error!("[Identity Form] Error submitting form: {}", e);
                    }
                    dispatch.call(completion_action(&result));
                    schedule_dismiss(state, dispatch, notification_ms);
                });
            }
            Err(SubmitOutcome::Invalid) => {
                console_info!(
                    "[Identity Form] Validation failed with {} error(s)",
                    state.peek().errors.len()
                );
            }
            Err(SubmitOutcome::Failed(e)) => {
                console_error!("[Identity Form] Could not build submission: {}", e);
                schedule_dismiss(state, dispatch, notification_ms);
            }
            Err(SubmitOutcome::AlreadySubmitting) | Err(SubmitOutcome::Submitted) => {}
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: IDENTITY_FORM_CSS }

        div {
            class: "container identity-form-container",

            h1 {
                class: "form-title",
                "Identity Verification"
            }

            div {
                class: "row g-4 my-3 mx-auto identity-form",

                PersonalDetailsForm {
                    state: state,
                    dispatch: dispatch,
                    minimum_age: minimum_age
                }

                AddressForm {
                    state: state,
                    dispatch: dispatch
                }

                DocumentsForm {
                    state: state,
                    dispatch: dispatch
                }

                div {
                    class: "row text-center",
                    div {
                        class: "py-5",
                        button {
                            class: "submit-button",
                            r#type: "button",
                            disabled: state().is_submitting(),
                            onclick: on_submit,
                            if state().is_submitting() {
                                "Submitting..."
                            } else {
                                "Submit"
                            }
                        }
                        LoadingIndicator {
                            message: "Sending your details...".to_string(),
                            visible: state().is_submitting()
                        }
                    }
                }
            }

            NotificationToast {
                notification: state().notification,
                on_dismiss: move |id| dispatch.call(FormAction::DismissNotification(id))
            }
        }
    }
}
