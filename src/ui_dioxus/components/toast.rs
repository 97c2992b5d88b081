use dioxus::prelude::*;

use crate::domain::notification::Notification;

#[component]
pub fn Toast(notification: Notification) -> Element {
    let (class, icon) = if notification.is_error() {
        ("toast error", "✕")
    } else {
        ("toast success", "✓")
    };

    rsx! {
        div {
            class: "{class}",
            span { class: "toast-icon", "{icon}" }
            span { "{notification.message}" }
        }
    }
}
