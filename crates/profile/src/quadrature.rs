//! Composite Simpson quadrature on uniformly spaced samples.
//!
//! [`simpson`] integrates `n` samples spaced `h` apart:
//!
//! - an even number of intervals uses the composite 1-4-2-…-4-1 rule
//! - an odd number of intervals (at least three) applies the composite rule
//!   to all but the last interval, then integrates the last interval with the
//!   parabola through the final three samples:
//!   `h/12 · (5 y[n-1] + 8 y[n-2] - y[n-3])`
//! - a single interval falls back to the trapezoid rule
//!
//! Weighted samples are accumulated with Neumaier's compensated summation, so
//! long grids add no more than a few ulps of rounding error.

use ndarray::{ArrayView1, s};
use thiserror::Error;

/// Errors that can occur when integrating sampled values.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum QuadratureError {
    #[error("at least 2 samples are required, got {0}")]
    TooFewSamples(usize),

    #[error("sample spacing must be finite and positive, got {0}")]
    InvalidSpacing(f64),
}

/// Integrates uniformly spaced `samples` with composite Simpson's rule.
///
/// # Errors
///
/// Returns an error if there are fewer than two samples or if `spacing` is
/// not a positive finite number.
pub fn simpson(samples: ArrayView1<'_, f64>, spacing: f64) -> Result<f64, QuadratureError> {
    let n = samples.len();
    if n < 2 {
        return Err(QuadratureError::TooFewSamples(n));
    }
    if !spacing.is_finite() || spacing <= 0.0 {
        return Err(QuadratureError::InvalidSpacing(spacing));
    }

    let h = spacing;
    let value = match n - 1 {
        1 => 0.5 * h * (samples[0] + samples[1]),
        intervals if intervals % 2 == 0 => composite(samples, h),
        _ => composite(samples.slice(s![..n - 1]), h) + last_interval(samples, h),
    };
    Ok(value)
}

/// Composite rule over an even number of intervals.
fn composite(samples: ArrayView1<'_, f64>, h: f64) -> f64 {
    let last = samples.len() - 1;
    let weighted = samples.indexed_iter().map(|(i, &y)| {
        let weight = if i == 0 || i == last {
            1.0
        } else if i % 2 == 1 {
            4.0
        } else {
            2.0
        };
        weight * y
    });
    h / 3.0 * compensated_sum(weighted)
}

/// Exact integral of the parabola through the last three samples, taken over
/// the final interval only.
fn last_interval(samples: ArrayView1<'_, f64>, h: f64) -> f64 {
    let n = samples.len();
    5.0 * h / 12.0 * samples[n - 1] + 2.0 * h / 3.0 * samples[n - 2] - h / 12.0 * samples[n - 3]
}

/// Neumaier's variant of Kahan summation.
fn compensated_sum(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, compensation) = values.fold((0.0_f64, 0.0_f64), |(sum, c), v| {
        let t = sum + v;
        let c = if sum.abs() >= v.abs() {
            c + ((sum - t) + v)
        } else {
            c + ((v - t) + sum)
        };
        (t, c)
    });
    sum + compensation
}
