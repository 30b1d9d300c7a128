//! Dashboard Frontend Entry Point

mod app;
mod calendar;
mod chart;
mod components;
mod config;
mod context;
mod grid;
mod logger;
mod models;
mod routes;
mod store;
mod tasks;
mod theme;

use app::App;
use config::DashboardConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = match DashboardConfig::load() {
        Ok(config) => {
            logger::init(&config.log_level);
            config
        }
        Err(e) => {
            let config = DashboardConfig::fallback();
            logger::init(&config.log_level);
            log::error!("[CONFIG] {}; using built-in defaults", e);
            config
        }
    };
    log::info!("[APP] Starting {}", config.title);

    mount_to_body(move || view! { <App config=config /> });
}
