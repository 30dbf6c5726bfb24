use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct LoadingIndicatorProps {
    pub message: String,
    #[props(default)]
    pub visible: bool,
}

#[component]
pub fn LoadingIndicator(props: LoadingIndicatorProps) -> Element {
    if !props.visible {
        return rsx! {};
    }

    rsx! {
        div {
            class: "loading-indicator",
            role: "status",
            "⏳ {props.message}"
        }
    }
}
