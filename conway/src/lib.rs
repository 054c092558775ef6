//! Conway's Game of Life on a toroidal grid, stepped on a fixed simulation
//! clock and rasterized into a pixel buffer for a host window to blit.
//!
//! The crate does no windowing. A host creates an [`Engine`] for its
//! surface size and calls it once per frame; see [`Engine`] for the order.

pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod raster;
pub mod rules;
pub mod scheduler;

pub use config::{CellSize, EngineConfig};
pub use engine::Engine;
pub use error::ConfigError;
pub use grid::{Generations, Grid};
pub use patterns::{PATTERNS, Pattern};
pub use raster::{Palette, PixelBuffer};
pub use scheduler::{MAX_FRAME_DELTA, TICK_INTERVAL, TickScheduler, clamp_frame_delta};
