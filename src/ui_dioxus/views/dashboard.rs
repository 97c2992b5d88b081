use dioxus::prelude::*;
use tracing::error;

use crate::services::{Backend, BookSettings, Bootstrap, ContactBook, Navigation, SessionService};
use crate::ui_dioxus::components::{
    ContactCard, EditCard, NewContactForm, SearchBar, StatCard, Toast,
};
use crate::ui_dioxus::router::Route;

#[component]
pub fn Dashboard() -> Element {
    let backend = use_context::<Backend>();
    let settings = use_context::<BookSettings>();
    let nav = navigator();

    // Look up the identity once and load that user's contacts
    let book = use_resource(move || {
        let backend = backend.clone();
        async move {
            match SessionService::new(&backend).bootstrap().await {
                Bootstrap::SignedOut => Ok(None),
                Bootstrap::Ready { identity, contacts } => {
                    ContactBook::new(identity, contacts, &backend, settings)
                        .map(Some)
                        .map_err(|e| {
                            error!(error = %e, "Failed to open contact book");
                            e.to_string()
                        })
                }
            }
        }
    });

    use_effect(move || {
        if matches!(&*book.read(), Some(Ok(None))) {
            nav.replace(Route::SignIn {});
        }
    });

    match &*book.read_unchecked() {
        Some(Ok(Some(book))) => rsx! {
            BookScreen { book: book.clone() }
        },
        Some(Err(message)) => rsx! {
            div {
                class: "center-screen",
                p { class: "error-text", "{message}" }
            }
        },
        _ => rsx! {
            div { class: "center-screen muted", "Loading…" }
        },
    }
}

#[component]
fn BookScreen(book: ContactBook) -> Element {
    let nav = navigator();
    let mut view = use_signal(|| book.view());

    // Re-render whenever the book reports a change
    use_future({
        let book = book.clone();
        move || {
            let book = book.clone();
            async move {
                let mut changes = book.subscribe();
                while changes.changed().await.is_ok() {
                    view.set(book.view());
                }
            }
        }
    });

    let handle_sign_out = {
        let book = book.clone();
        move |_| {
            let book = book.clone();
            spawn(async move {
                if book.sign_out().await == Navigation::SignIn {
                    nav.replace(Route::SignIn {});
                }
            });
        }
    };

    let handle_toggle_add = {
        let book = book.clone();
        move |_| book.toggle_adding()
    };

    let v = view();
    let (empty_title, empty_hint) = v.empty_state();

    rsx! {
        div {
            class: "dashboard",

            header {
                class: "topbar",

                div {
                    class: "brand",
                    div { class: "brand-mark", "R" }
                    span { "Rolodex" }
                }

                div {
                    class: "topbar-user",
                    div {
                        class: "user-dot",
                        title: "{v.identity.email}",
                        "{v.identity.badge()}"
                    }
                    button {
                        class: if v.signing_out { "btn-signout loading" } else { "btn-signout" },
                        disabled: v.signing_out,
                        onclick: handle_sign_out,
                        if v.signing_out { "Signing out…" } else { "Sign out" }
                    }
                }
            }

            main {
                class: "content",

                div {
                    class: "page-head",
                    div {
                        h1 { "Contacts" }
                        p { class: "muted", "{v.count_label()}" }
                    }
                    button {
                        class: "btn-primary",
                        onclick: handle_toggle_add,
                        if v.adding { "Close" } else { "+ Add Contact" }
                    }
                }

                div {
                    class: "stats",
                    StatCard { label: "Total", value: v.stats.total }
                    StatCard { label: "With phone", value: v.stats.with_phone }
                    StatCard { label: "With address", value: v.stats.with_address }
                }

                SearchBar { book: book.clone(), raw: v.search_raw.clone() }

                if v.adding {
                    NewContactForm { book: book.clone(), draft: v.new_draft.clone() }
                }

                h2 { class: "section-title", "{v.results_heading()}" }

                if v.visible.is_empty() {
                    div {
                        class: "empty-state",
                        h3 { "{empty_title}" }
                        p { class: "muted", "{empty_hint}" }
                    }
                } else {
                    div {
                        class: "grid",
                        for contact in v.visible.iter() {
                            if let Some(draft) = v.edit_draft.as_ref().filter(|d| d.target == Some(contact.id)) {
                                EditCard {
                                    key: "{contact.id}",
                                    book: book.clone(),
                                    draft: draft.clone(),
                                }
                            } else {
                                ContactCard {
                                    key: "{contact.id}",
                                    book: book.clone(),
                                    contact: contact.clone(),
                                    deleting: v.is_deleting(contact.id),
                                }
                            }
                        }
                    }
                }
            }

            if let Some(notification) = v.toast.clone() {
                Toast { notification }
            }
        }
    }
}
