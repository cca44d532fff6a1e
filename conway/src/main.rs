// main.rs - Window start-up for the bounded Game of Life

use std::error::Error;
use std::path::Path;

use eframe::egui;
use life_board::controller::WINDOW_TITLE;
use life_board::{BoardConfig, Controller};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod ui;

use ui::LifeApp;

const DEFAULT_CONFIG_PATH: &str = "conway.yaml";

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config = load_config().inspect_err(|err| error!(%err, "could not load config"))?;
    let controller =
        Controller::from_config(&config).inspect_err(|err| error!(%err, "could not build board"))?;
    info!(
        width = config.width,
        height = config.height,
        tick_interval_ms = config.tick_interval_ms,
        "starting board"
    );

    let app = LifeApp::new(controller, config.cell_size);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(app.window_size())
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(WINDOW_TITLE, options, Box::new(move |_cc| Box::new(app)))?;
    Ok(())
}

/// Reads the config named on the command line, else `conway.yaml` if present,
/// else the built-in defaults.
fn load_config() -> Result<BoardConfig, life_board::ConfigError> {
    if let Some(path) = std::env::args().nth(1) {
        return BoardConfig::load(path);
    }
    if Path::new(DEFAULT_CONFIG_PATH).exists() {
        return BoardConfig::load(DEFAULT_CONFIG_PATH);
    }
    info!("no config file, using defaults");
    Ok(BoardConfig::default())
}
