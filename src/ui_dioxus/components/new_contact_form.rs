use dioxus::prelude::*;

use crate::domain::contact::Field;
use crate::services::validation::InputValidator;
use crate::services::{ContactBook, Draft};

const FIELDS: [(Field, &str, &str); 3] = [
    (Field::Name, "Name", "Jane Smith"),
    (Field::Phone, "Phone", "+1 555 000 0000"),
    (Field::Address, "Address", "123 Main St, City"),
];

#[component]
pub fn NewContactForm(book: ContactBook, draft: Draft) -> Element {
    let can_save = draft.can_save();

    let save = {
        let book = book.clone();
        move || {
            let book = book.clone();
            spawn(async move {
                book.save_new().await;
            });
        }
    };

    let handle_save = {
        let save = save.clone();
        move |_| save()
    };

    // Enter in any field submits the form
    let handle_key = {
        let save = save.clone();
        move |evt: KeyboardEvent| {
            if InputValidator::is_confirm_key(&evt.key().to_string()) {
                save();
            }
        }
    };

    let handle_cancel = {
        let book = book.clone();
        move |_| book.cancel_new()
    };

    rsx! {
        div {
            class: "new-contact-form",
            onkeydown: handle_key,

            div {
                class: "form-head",
                h3 { "New Contact" }
                button { class: "btn-ghost", onclick: handle_cancel.clone(), "✕" }
            }

            div {
                class: "form-fields",
                for (field, caption, placeholder) in FIELDS {
                    label {
                        key: "{caption}",
                        class: "field",
                        span { class: "field-label", "{caption}" }
                        input {
                            class: "field-input",
                            placeholder: "{placeholder}",
                            autofocus: field == Field::Name,
                            value: "{draft.fields.get(field)}",
                            oninput: {
                                let book = book.clone();
                                move |evt: FormEvent| book.set_new_field(field, evt.value())
                            },
                        }
                    }
                }
            }

            div {
                class: "form-actions",
                button { class: "btn-secondary", onclick: handle_cancel, "Cancel" }
                button {
                    class: "btn-primary",
                    disabled: !can_save,
                    onclick: handle_save,
                    if draft.saving { "Saving…" } else { "Save Contact" }
                }
            }
        }
    }
}
