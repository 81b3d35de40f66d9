//! Configuration errors.
//!
//! These surface setup-code defects and fail fast at construction time.
//! There is no process-fatal path inside the running simulation itself.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("hit box dimensions must be strictly positive, got {width}x{height}")]
    HitBoxDimensions { width: f64, height: f64 },

    #[error("friction factor must be in (0, 1], got {value}")]
    Friction { value: f64 },
}
