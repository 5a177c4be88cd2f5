//! Clinic UX-audit dashboard (web frontend)

mod app;
mod components;

use dioxus_logger::tracing::Level;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(app::App);
}
