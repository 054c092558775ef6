// cli.rs - Command-line options for the window host

use clap::Parser;
use conway::{CellSize, EngineConfig};

/// Conway's Game of Life in a resizable window
#[derive(Debug, Parser)]
#[command(name = "conway_window")]
#[command(version)]
pub struct Args {
    /// Initial client-area width in pixels
    #[arg(long, default_value_t = 960)]
    pub width: u32,

    /// Initial client-area height in pixels
    #[arg(long, default_value_t = 540)]
    pub height: u32,

    /// Cell edge length in pixels, both axes
    #[arg(long, default_value_t = 4)]
    pub cell_size: usize,

    /// Cell width override
    #[arg(long)]
    pub cell_width: Option<usize>,

    /// Cell height override
    #[arg(long)]
    pub cell_height: Option<usize>,

    /// Milliseconds of simulated time per generation
    #[arg(long, default_value_t = 100)]
    pub tick_ms: u32,

    /// Fixed RNG seed for a reproducible starting grid
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level, used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            cell_size: CellSize {
                x: self.cell_width.unwrap_or(self.cell_size),
                y: self.cell_height.unwrap_or(self.cell_size),
            },
            tick_interval: self.tick_ms as f32 / 1000.0,
            seed: self.seed,
            ..Default::default()
        }
    }
}
