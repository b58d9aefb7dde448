#![allow(non_snake_case)]

mod app;
mod bridge;
mod components;
pub mod context;
mod storage;
mod theme;

use dioxus::logger::tracing::Level;

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    tracing::info!("Starting portfolio");

    dioxus::LaunchBuilder::web().launch(app::App);
}
