mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::QuakeViewerApp;
use config::Config;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = Config::from_env();
    log::info!(
        "Feed {} ({}), min magnitude {}",
        config.feed_base_url,
        config.feed_period.label(),
        config.min_magnitude
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rusty Quake – Earthquake Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(QuakeViewerApp::new(config)))),
    )
}
