use dioxus::prelude::*;

use crate::ui_dioxus::views::{Dashboard, SignIn};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    SignIn {},

    #[route("/dashboard")]
    Dashboard {},
}
