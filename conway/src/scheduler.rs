// scheduler.rs - Fixed-step simulation clock, independent of frame rate

/// Simulated seconds between generations.
pub const TICK_INTERVAL: f32 = 0.1;

/// Longest frame delta the host should ever feed into a tick.
pub const MAX_FRAME_DELTA: f32 = 1.0 / 60.0;

/// Clamps a measured frame delta into `[0, MAX_FRAME_DELTA]`, so a stall
/// (window drag, debugger pause) never turns into a burst of generations.
pub fn clamp_frame_delta(elapsed: f32) -> f32 {
    // NaN collapses to zero through max()
    elapsed.max(0.0).min(MAX_FRAME_DELTA)
}

#[derive(Debug, Clone)]
pub struct TickScheduler {
    accumulator : f32,
    interval    : f32,
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new(TICK_INTERVAL)
    }
}

impl TickScheduler {
    pub fn new(interval: f32) -> Self {
        Self {
            accumulator: 0.0,
            interval,
        }
    }

    /// Adds `elapsed` and reports whether a generation is due. At most one
    /// generation fires per call; once it does the accumulator restarts at
    /// zero and whatever overshot the interval is dropped.
    pub fn advance(&mut self, elapsed: f32) -> bool {
        self.accumulator += elapsed;
        if self.accumulator >= self.interval {
            self.accumulator = 0.0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }

    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }
}
