use dioxus::prelude::*;

use crate::services::ContactBook;

#[component]
pub fn SearchBar(book: ContactBook, raw: String) -> Element {
    let handle_input = {
        let book = book.clone();
        move |evt: FormEvent| book.set_search(evt.value())
    };

    let handle_clear = move |_| book.clear_search();

    rsx! {
        div {
            class: "search-bar",
            span { class: "search-icon", "⌕" }
            input {
                class: "search-input",
                placeholder: "Search contacts…",
                value: "{raw}",
                oninput: handle_input,
            }
            if !raw.is_empty() {
                button { class: "btn-ghost", onclick: handle_clear, "Clear" }
            }
        }
    }
}
