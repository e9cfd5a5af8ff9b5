//! Pixel Todo Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod controller;
mod error;
mod loading;
mod logger;
mod models;
mod shortcuts;
mod store;
mod tasks;
mod toast;
mod view;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(LevelFilter::Info);

    let config = AppConfig::from_env();
    log::set_max_level(config.log_level);
    log::info!("[APP] Starting against {}", config.api_url);

    mount_to_body(move || view! { <App config=config /> });
}
