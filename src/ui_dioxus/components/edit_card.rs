use dioxus::prelude::*;

use crate::domain::contact::Field;
use crate::services::validation::InputValidator;
use crate::services::{ContactBook, Draft};

#[component]
pub fn EditCard(book: ContactBook, draft: Draft) -> Element {
    let can_save = draft.can_save();

    let save = {
        let book = book.clone();
        move || {
            let book = book.clone();
            spawn(async move {
                book.save_edit().await;
            });
        }
    };

    let handle_save = {
        let save = save.clone();
        move |_| save()
    };

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
        move |_| book.cancel_edit()
    };

    rsx! {
        div {
            class: "contact-card editing",
            onkeydown: handle_key,

            for (field, caption) in [(Field::Name, "Name"), (Field::Phone, "Phone"), (Field::Address, "Address")] {
                label {
                    key: "{caption}",
                    class: "field",
                    span { class: "field-label", "{caption}" }
                    input {
                        class: "field-input",
                        value: "{draft.fields.get(field)}",
                        oninput: {
                            let book = book.clone();
                            move |evt: FormEvent| book.set_edit_field(field, evt.value())
                        },
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
                    if draft.saving { "Saving…" } else { "Save Changes" }
                }
            }
        }
    }
}
