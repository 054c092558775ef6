use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("cell size along the {axis} axis must be at least one pixel")]
    ZeroCellSize { axis: &'static str },

    #[error("tick interval must be a positive number of seconds, got {0}")]
    InvalidTickInterval(f32),

    #[error("seed probability must lie in [0, 1], got {0}")]
    InvalidSeedProbability(f64),
}
