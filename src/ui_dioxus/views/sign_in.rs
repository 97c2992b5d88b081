use dioxus::prelude::*;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::services::{Backend, SessionService};
use crate::ui_dioxus::router::Route;

#[component]
pub fn SignIn() -> Element {
    let backend = use_context::<Backend>();
    let config = use_context::<AppConfig>();
    let nav = navigator();
    let mut loading = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    let handle_sign_in = move |_| {
        let backend = backend.clone();
        let provider = config.oauth_provider.clone();
        let redirect_to = config.redirect_to.clone();

        spawn(async move {
            loading.set(true);
            error_message.set(None);

            match SessionService::new(&backend)
                .start_sign_in(&provider, &redirect_to)
                .await
            {
                Ok(url) => {
                    info!(%provider, %url, "Sign-in started");
                    nav.push(Route::Dashboard {});
                }
                Err(e) => {
                    error!(%provider, error = %e, "Sign-in could not start");
                    error_message.set(Some(format!("Could not sign in: {}", e)));
                }
            }

            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "center-screen",

            div {
                class: "sign-in-card",
                div { class: "brand-mark", "R" }
                h1 { "Rolodex" }
                p { class: "muted", "Your people, in one place." }

                button {
                    class: "btn-primary btn-wide",
                    disabled: loading(),
                    onclick: handle_sign_in,
                    if loading() { "Redirecting…" } else { "Sign in with Google" }
                }

                if let Some(message) = error_message() {
                    p { class: "error-text", "{message}" }
                }
            }
        }
    }
}
