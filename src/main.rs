mod app;
mod color;
mod config;
mod data;
mod error;
mod export;
mod state;
mod text;
mod ui;

use anyhow::{anyhow, Context};
use app::DashboardApp;
use clap::Parser;
use config::{Cli, DashboardConfig};
use data::context::DataContext;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashboardConfig::from(Cli::parse());
    log::info!(
        "Reading {} and {}",
        config.sources.daily_path.display(),
        config.sources.hourly_path.display()
    );

    // The dashboard has nothing to show without both tables.
    let context = DataContext::load(&config.sources)
        .inspect_err(|e| log::error!("Failed to load bike-rental data: {e}"))
        .context("loading bike-rental data")?;

    let state = AppState::new(context, &config);
    let title = state.text.window_title;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        title,
        options,
        Box::new(move |_cc| Ok(Box::new(DashboardApp::new(state)))),
    )
    .map_err(|e| anyhow!("window error: {e}"))
}
