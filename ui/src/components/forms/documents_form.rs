use dioxus::prelude::*;

use super::DocumentTypeSelector;
use crate::components::input::{FieldError, FieldLabel};
use crate::form::{DocumentEntry, ErrorKey, FormAction, FormState, UploadedFile};
use crate::utils::file_types::{format_file_size, ACCEPTED_EXTENSIONS};
use crate::utils::validation::input_class;
use crate::{console_debug, console_warn};

#[derive(Props, PartialEq, Clone)]
pub struct DocumentsFormProps {
    pub state: Signal<FormState>,
    pub dispatch: EventHandler<FormAction>,
}

/// Upload list. The first row adds entries, every other row can be removed.
#[component]
pub fn DocumentsForm(props: DocumentsFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let documents = state().documents;

    rsx! {
        label { class: "section-label", "Upload Documents" }
        for (index, document) in documents.into_iter().enumerate() {
            DocumentRow {
                key: "{document.id}",
                index: index,
                document: document,
                state: state,
                dispatch: dispatch
            }
        }
        if let Some(message) = state().errors.message(ErrorKey::Documents) {
            div { class: "text-danger", "{message}" }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct DocumentRowProps {
    pub index: usize,
    pub document: DocumentEntry,
    pub state: Signal<FormState>,
    pub dispatch: EventHandler<FormAction>,
}

#[component]
pub fn DocumentRow(props: DocumentRowProps) -> Element {
    let index = props.index;
    let state = props.state;
    let dispatch = props.dispatch;
    let errors = state().errors;
    let name_error = errors.message(ErrorKey::DocumentFileName(index));
    let type_error = errors.message(ErrorKey::DocumentFileType(index));
    let file_error = errors.message(ErrorKey::DocumentFile(index));
    let name_class = input_class(name_error.is_some());
    let file_class = input_class(file_error.is_some());

    rsx! {
        div {
            class: "row gy-3 document-row",
            div {
                class: "col-md-3",
                FieldLabel { text: "File Name".to_string() }
                input {
                    class: "{name_class}",
                    r#type: "text",
                    name: "fileName",
                    value: "{props.document.file_name}",
                    oninput: move |evt| dispatch.call(FormAction::SetDocumentName(index, evt.value()))
                }
                if let Some(message) = name_error {
                    FieldError { message }
                }
            }
            div {
                class: "col-md-3",
                FieldLabel { text: "Type of File".to_string() }
                DocumentTypeSelector {
                    selected: props.document.file_type,
                    has_error: type_error.is_some(),
                    on_change: move |kind| dispatch.call(FormAction::SetDocumentType(index, kind))
                }
                p { class: "text-muted", "(image, pdf.)" }
                if let Some(message) = type_error {
                    FieldError { message }
                }
            }
            div {
                class: "col-md-3",
                FieldLabel { text: "Upload File".to_string() }
                input {
                    class: "{file_class}",
                    r#type: "file",
                    name: "file",
                    accept: ACCEPTED_EXTENSIONS,
                    onchange: move |evt: FormEvent| async move {
                        let Some(engine) = evt.files() else {
                            dispatch.call(FormAction::SetDocumentFile(index, None));
                            return;
                        };
                        let Some(file_name) = engine.files().into_iter().next() else {
                            dispatch.call(FormAction::SetDocumentFile(index, None));
                            return;
                        };

                        match engine.read_file(&file_name).await {
                            Some(bytes) => {
                                let file = UploadedFile::new(file_name, bytes);
                                console_debug!(
                                    "[Documents] Row {} picked {} ({}, {})",
                                    index,
                                    file.name,
                                    file.content_type,
                                    format_file_size(file.size())
                                );
                                dispatch.call(FormAction::SetDocumentFile(index, Some(file)));
                            }
                            None => {
                                console_warn!("[Documents] Could not read {}", file_name);
                                dispatch.call(FormAction::SetDocumentFile(index, None));
                            }
                        }
                    }
                }
                if let Some(file) = &props.document.file {
                    small {
                        class: "text-muted",
                        "{file.name} · {format_file_size(file.size())}"
                    }
                }
                if let Some(message) = file_error {
                    FieldError { message }
                }
            }
            div {
                class: "col-md-3 document-action",
                if index == 0 {
                    button {
                        class: "add-document",
                        r#type: "button",
                        title: "Add document",
                        onclick: move |_| dispatch.call(FormAction::AddDocument),
                        "+"
                    }
                } else {
                    button {
                        class: "remove-document",
                        r#type: "button",
                        title: "Remove document",
                        onclick: move |_| dispatch.call(FormAction::RemoveDocument(index)),
                        "🗑"
                    }
                }
            }
        }
    }
}
