// main.rs - Window host for the Game of Life engine

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod ui;

use cli::Args;
use ui::LifeApp;

fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(&args.log_level);

    // Sized in points until the first frame reports the real pixel area
    let engine = conway::Engine::initialize(args.width as usize, args.height as usize, args.engine_config())
        .context("invalid engine configuration")?;
    let (cols, rows) = engine.dimensions();
    info!(cols, rows, "starting Game of Life");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Game of Life")
            .with_inner_size([args.width as f32, args.height as f32]),
        ..Default::default()
    };

    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |_cc| Box::new(LifeApp::new(engine))),
    )
    // Formatted, not wrapped: context() needs Send + Sync + 'static, which eframe::Error does not promise
    .map_err(|e| anyhow::anyhow!("window loop failed: {e}"))
}
