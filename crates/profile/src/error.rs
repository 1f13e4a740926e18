use thiserror::Error;

use crate::quadrature::QuadratureError;

/// Errors that can occur when building or evaluating optimal profiles.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ProfileError {
    #[error("time horizon must be finite and positive, got {0}")]
    NonPositiveHorizon(f64),

    #[error("at least 2 grid points are required, got {0}")]
    TooFewGridPoints(usize),

    #[error("parameter must be finite, got {0}")]
    NonFiniteParameter(f64),

    /// `exp(√2·T)` or `exp(√2·T)² - 1` left the representable range.
    #[error("closed-form coefficients are not finite for horizon {horizon} (A = {a}, B = {b})")]
    Overflow { horizon: f64, a: f64, b: f64 },

    /// A trajectory was scored against a baseline sampled on another grid.
    #[error("trajectory has {actual} samples but the baseline has {expected}")]
    GridMismatch { expected: usize, actual: usize },

    #[error("cost is not finite for parameter {parameter}")]
    NonFiniteCost { parameter: f64 },

    #[error(transparent)]
    Quadrature(#[from] QuadratureError),
}
