// Dioxus desktop UI
pub mod app;
pub mod components;
pub mod router;
pub mod styles;
pub mod views;

pub use app::App;
pub use router::Route;
