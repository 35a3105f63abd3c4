use br_core::{BrError, Vec2};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Parameter(#[from] BrError),

    #[error("robot radius {radius} must be less than half the arena size {arena_size}")]
    RadiusTooLarge { radius: f64, arena_size: f64 },

    #[error("start position {position} puts a radius-{radius} agent outside the arena")]
    StartOutsideArena { position: Vec2, radius: f64 },

    #[error("initial heading must be finite, got {0}")]
    InvalidHeading(f64),

    #[error("time step must be finite and non-negative (positive for realtime runs), got {0}")]
    InvalidTimeStep(f64),

    #[error("realtime duration must be finite and > 0, got {0}")]
    InvalidDuration(f64),

    #[error("target frame rate must be finite and >= 0, got {0}")]
    InvalidFrameRate(f64),
}

pub type SimResult<T> = Result<T, SimError>;
