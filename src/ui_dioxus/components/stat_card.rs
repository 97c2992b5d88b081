use dioxus::prelude::*;

#[component]
pub fn StatCard(label: &'static str, value: usize) -> Element {
    rsx! {
        div {
            class: "stat-card",
            div { class: "stat-value", "{value}" }
            div { class: "stat-label", "{label}" }
        }
    }
}
