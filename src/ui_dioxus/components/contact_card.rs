use dioxus::prelude::*;

use crate::domain::contact::Contact;
use crate::services::ContactBook;

#[component]
pub fn ContactCard(book: ContactBook, contact: Contact, deleting: bool) -> Element {
    let id = contact.id;
    let avatar_style = format!("background: {};", contact.avatar_color());
    let initials = contact.initials();
    let phone = contact.phone.clone();
    let address = contact.address.clone();

    let copy_phone = {
        let book = book.clone();
        let phone = phone.clone();
        move |_| book.copy(&phone)
    };

    let copy_address = {
        let book = book.clone();
        let address = address.clone();
        move |_| book.copy(&address)
    };

    let handle_edit = {
        let book = book.clone();
        move |_| {
            book.start_edit(id);
        }
    };

    let handle_delete = move |_| {
        let book = book.clone();
        spawn(async move {
            book.delete_contact(id).await;
        });
    };

    rsx! {
        div {
            class: if deleting { "contact-card deleting" } else { "contact-card" },

            div {
                class: "card-head",
                div { class: "avatar", style: "{avatar_style}", "{initials}" }
                div { class: "contact-name", "{contact.name}" }
            }

            div {
                class: "card-body",
                if contact.has_phone() {
                    div {
                        class: "contact-detail",
                        title: "Click to copy",
                        onclick: copy_phone,
                        span { class: "detail-icon", "☎" }
                        span { "{phone}" }
                    }
                }
                if contact.has_address() {
                    div {
                        class: "contact-detail",
                        title: "Click to copy",
                        onclick: copy_address,
                        span { class: "detail-icon", "⌂" }
                        span { "{address}" }
                    }
                }
                if !contact.has_details() {
                    div { class: "contact-detail muted", "No details saved" }
                }
            }

            div {
                class: "card-actions",
                button {
                    class: "card-action-btn",
                    title: "Edit contact",
                    onclick: handle_edit,
                    "Edit"
                }
                button {
                    class: "card-action-btn danger",
                    title: "Delete contact",
                    disabled: deleting,
                    onclick: handle_delete,
                    if deleting { "Deleting…" } else { "Delete" }
                }
            }
        }
    }
}
