// config.rs - Engine settings

use crate::error::ConfigError;
use crate::raster::Palette;
use crate::scheduler::TICK_INTERVAL;

/// Pixels per cell along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSize {
    pub x: usize,
    pub y: usize,
}

impl CellSize {
    pub fn square(side: usize) -> Self {
        Self { x: side, y: side }
    }
}

impl Default for CellSize {
    fn default() -> Self {
        Self::square(4)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub cell_size        : CellSize,
    /// Simulated seconds per generation.
    pub tick_interval    : f32,
    /// Chance that any one cell starts alive when the grid is seeded.
    pub seed_probability : f64,
    /// Fixed RNG seed for reproducible runs; `None` draws from OS entropy.
    pub seed             : Option<u64>,
    pub palette          : Palette,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cell_size: CellSize::default(),
            tick_interval: TICK_INTERVAL,
            seed_probability: 0.5,
            seed: None,
            palette: Palette::default(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size.x == 0 {
            return Err(ConfigError::ZeroCellSize { axis: "x" });
        }
        if self.cell_size.y == 0 {
            return Err(ConfigError::ZeroCellSize { axis: "y" });
        }
        if !(self.tick_interval.is_finite() && self.tick_interval > 0.0) {
            return Err(ConfigError::InvalidTickInterval(self.tick_interval));
        }
        if !(0.0..=1.0).contains(&self.seed_probability) {
            return Err(ConfigError::InvalidSeedProbability(self.seed_probability));
        }
        Ok(())
    }
}
