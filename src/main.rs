use anyhow::Result;
use dioxus_desktop::{Config, WindowBuilder};
use std::any::Any;
use tracing::info;

use rolodex::config::AppConfig;
use rolodex::ui_dioxus::App;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = AppConfig::load()?;
    info!(backend = ?config.backend, "Starting Rolodex");

    let window = WindowBuilder::new()
        .with_title("Rolodex")
        .with_inner_size(dioxus_desktop::LogicalSize::new(1100.0, 780.0));

    // Launch the Dioxus desktop app with the loaded config as root context
    dioxus_desktop::launch::launch(
        App,
        vec![Box::new(move || Box::new(config.clone()) as Box<dyn Any>)],
        Config::default().with_window(window),
    );

    Ok(())
}
