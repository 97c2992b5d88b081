use dioxus::prelude::*;
use tracing::error;

use crate::config::AppConfig;
use crate::services::Backend;
use crate::ui_dioxus::router::Route;
use crate::ui_dioxus::styles::STYLES;

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();

    // Connect to the configured backend once
    let backend = use_resource(move || {
        let config = config.clone();
        async move {
            Backend::connect(&config).await.map_err(|e| {
                error!(error = %e, "Failed to connect backend");
                e.to_string()
            })
        }
    });

    match &*backend.read_unchecked() {
        Some(Ok(backend)) => rsx! {
            style { {STYLES} }
            Session { backend: backend.clone() }
        },
        Some(Err(message)) => rsx! {
            style { {STYLES} }
            div {
                class: "center-screen",
                h2 { "Could not start Rolodex" }
                p { class: "muted", "{message}" }
            }
        },
        None => rsx! {
            style { {STYLES} }
            div { class: "center-screen muted", "Loading…" }
        },
    }
}

/// Provides the connected backend and book settings to every route.
#[component]
fn Session(backend: Backend) -> Element {
    let config = use_context::<AppConfig>();
    use_context_provider(|| backend.clone());
    use_context_provider(|| config.book_settings());

    rsx! {
        Router::<Route> {}
    }
}
