use dioxus::prelude::*;

use crate::form::{Notification, NotificationKind};

pub fn toast_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "toast toast-success",
        NotificationKind::Error => "toast toast-error",
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct NotificationToastProps {
    pub notification: Option<Notification>,
    pub on_dismiss: EventHandler<u64>,
}

/// Single transient notice shown after a submission attempt; click to dismiss
#[component]
pub fn NotificationToast(props: NotificationToastProps) -> Element {
    let Some(notification) = props.notification else {
        return rsx! {};
    };
    let on_dismiss = props.on_dismiss;
    let id = notification.id;
    let icon = match notification.kind {
        NotificationKind::Success => "✓",
        NotificationKind::Error => "✗",
    };

    rsx! {
        div {
            class: "{toast_class(notification.kind)}",
            role: "alert",
            onclick: move |_| on_dismiss.call(id),
            span { class: "toast-icon", "{icon}" }
            span { class: "toast-message", "{notification.message}" }
        }
    }
}
