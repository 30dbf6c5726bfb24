use dioxus::prelude::*;

use crate::form::DocumentType;
use crate::utils::validation::select_class;

#[derive(Props, PartialEq, Clone)]
pub struct DocumentTypeSelectorProps {
    pub selected: Option<DocumentType>,
    #[props(default)]
    pub has_error: bool,
    pub on_change: EventHandler<Option<DocumentType>>,
}

#[component]
pub fn DocumentTypeSelector(props: DocumentTypeSelectorProps) -> Element {
    let selected = props.selected;
    let on_change = props.on_change;
    let class = select_class(props.has_error);
    let current = selected.map(|kind| kind.extension()).unwrap_or_default();

    rsx! {
        select {
            class: "{class}",
            name: "fileType",
            value: "{current}",
            onchange: move |evt| {
                on_change.call(evt.value().parse::<DocumentType>().ok());
            },
            option {
                value: "",
                selected: selected.is_none(),
                "Select File Type"
            }
            for kind in DocumentType::ALL {
                option {
                    value: "{kind.extension()}",
                    selected: selected == Some(kind),
                    "{kind.label()}"
                }
            }
        }
    }
}
