// engine.rs - The per-frame contract a host loop drives

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::config::{CellSize, EngineConfig};
use crate::error::ConfigError;
use crate::grid::{Generations, Grid};
use crate::patterns::Pattern;
use crate::raster::{self, PixelBuffer};
use crate::rules;
use crate::scheduler::TickScheduler;

/// Game of Life sized to a host surface.
///
/// A host calls, once per frame and in this order: [`Engine::on_resize`],
/// [`Engine::on_pointer_active`] while the paint gesture is held,
/// [`Engine::tick`] with the clamped frame delta, then [`Engine::render`]
/// and blits the returned buffer.
pub struct Engine {
    config      : EngineConfig,
    surface     : (usize, usize),
    generations : Generations,
    scheduler   : TickScheduler,
    pixels      : PixelBuffer,
    rng         : StdRng,
    generation  : u64,
}

impl Engine {
    /// Builds the engine for a `pixel_width x pixel_height` surface and seeds it.
    pub fn initialize(pixel_width: usize, pixel_height: usize, config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut engine = Self {
            scheduler: TickScheduler::new(config.tick_interval),
            pixels: PixelBuffer::new(0, 0, config.palette.dead),
            surface: (0, 0),
            generations: Generations::new(0, 0),
            generation: 0,
            rng,
            config,
        };
        engine.resize(pixel_width, pixel_height);
        Ok(engine)
    }

    /// Adopts a new surface size. Same size as last time does nothing.
    pub fn on_resize(&mut self, pixel_width: usize, pixel_height: usize) {
        if self.surface == (pixel_width, pixel_height) {
            return;
        }
        self.resize(pixel_width, pixel_height);
    }

    // Nothing survives a resize: fresh buffers, fresh seed, fresh clock.
    fn resize(&mut self, pixel_width: usize, pixel_height: usize) {
        let CellSize { x, y } = self.config.cell_size;
        let cols = pixel_width / x;
        let rows = pixel_height / y;

        self.surface = (pixel_width, pixel_height);
        self.generations = Generations::new(rows, cols);
        self.pixels = PixelBuffer::for_grid(self.generations.current(), self.config.cell_size, self.config.palette.dead);
        debug!(pixel_width, pixel_height, cols, rows, "resized grid");
        self.reseed();
    }

    /// Re-rolls every cell with the configured probability and restarts the
    /// tick clock and generation counter.
    pub fn reseed(&mut self) {
        let probability = self.config.seed_probability;
        let rng = &mut self.rng;
        self.generations.current_mut().fill_with(|| rng.gen_bool(probability));
        self.scheduler.reset();
        self.generation = 0;
        debug!(population = self.population(), "seeded grid");
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.generations.current_mut().clear();
    }

    /// Forces the cell under a surface pixel alive. Pixels past the last
    /// whole cell are ignored.
    pub fn on_pointer_active(&mut self, pixel_x: usize, pixel_y: usize) {
        let row = pixel_y / self.config.cell_size.y;
        let col = pixel_x / self.config.cell_size.x;
        let grid = self.generations.current_mut();
        if row < grid.rows() && col < grid.cols() {
            grid.set(row as isize, col as isize, true);
        }
    }

    /// Feeds a frame delta to the tick clock; returns whether a generation ran.
    pub fn tick(&mut self, elapsed: f32) -> bool {
        if !self.scheduler.advance(elapsed) {
            return false;
        }
        self.step();
        true
    }

    /// Advances exactly one generation, bypassing the tick clock.
    pub fn step(&mut self) {
        rules::step(&mut self.generations);
        self.generation += 1;
        trace!(generation = self.generation, "stepped");
    }

    pub fn stamp(&mut self, pattern: &Pattern, row: isize, col: isize) {
        self.generations.current_mut().stamp(pattern, row, col);
    }

    /// Repaints the pixel buffer from the current generation and hands it out.
    pub fn render(&mut self) -> &PixelBuffer {
        raster::render(
            self.generations.current(),
            self.config.cell_size,
            &self.config.palette,
            &mut self.pixels,
        );
        &self.pixels
    }

    pub fn grid(&self) -> &Grid {
        self.generations.current()
    }

    /// `(cols, rows)`
    pub fn dimensions(&self) -> (usize, usize) {
        let grid = self.grid();
        (grid.cols(), grid.rows())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid().population()
    }

    pub fn tick_accumulator(&self) -> f32 {
        self.scheduler.accumulator()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(width: usize, height: usize, cell: usize) -> Engine {
        let config = EngineConfig {
            cell_size: CellSize::square(cell),
            seed: Some(7),
            ..Default::default()
        };
        Engine::initialize(width, height, config).unwrap()
    }

    #[test]
    fn floor_division_drops_partial_cells() {
        let engine = seeded(103, 58, 10);
        assert_eq!(engine.dimensions(), (10, 5));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = EngineConfig {
            cell_size: CellSize { x: 0, y: 4 },
            ..Default::default()
        };
        assert!(Engine::initialize(100, 100, config).is_err());
    }

    #[test]
    fn same_size_resize_keeps_state() {
        let mut engine = seeded(80, 80, 4);
        engine.clear();
        engine.on_pointer_active(0, 0);
        engine.on_resize(80, 80);
        assert_eq!(engine.population(), 1);
    }

    #[test]
    fn resize_resets_generation_counter() {
        let mut engine = seeded(80, 80, 4);
        engine.step();
        engine.step();
        assert_eq!(engine.generation(), 2);
        engine.on_resize(120, 80);
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn surface_smaller_than_a_cell_gives_an_empty_grid() {
        let mut engine = seeded(3, 3, 4);
        assert_eq!(engine.dimensions(), (0, 0));
        engine.on_pointer_active(1, 1);
        assert!(engine.tick(1.0));
        assert_eq!(engine.population(), 0);
        assert_eq!(engine.render().size(), [0, 0]);
    }

    #[test]
    fn step_counts_generations() {
        let mut engine = seeded(40, 40, 4);
        assert!(!engine.tick(0.05));
        assert!(engine.tick(0.05));
        assert_eq!(engine.generation(), 1);
    }
}
