use thiserror::Error;

/// Configuration for the golden section solver.
///
/// The search stops once the outer bracket width satisfies
/// `width <= x_abs_tol + x_rel_tol * |midpoint|`, or after `max_iters`
/// shrink iterations, whichever comes first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    x_abs_tol: f64,
    x_rel_tol: f64,
}

/// Errors that can occur when validating a golden section solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("x_abs_tol must be finite and positive")]
    XAbs,

    #[error("x_rel_tol must be finite and non-negative")]
    XRel,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(100, 1e-12, 1e-12).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if `x_abs_tol` is not a positive finite number, or if
    /// `x_rel_tol` is negative or non-finite.
    pub fn new(max_iters: usize, x_abs_tol: f64, x_rel_tol: f64) -> Result<Self, ConfigError> {
        if !x_abs_tol.is_finite() || x_abs_tol <= 0.0 {
            return Err(ConfigError::XAbs);
        }
        if !x_rel_tol.is_finite() || x_rel_tol < 0.0 {
            return Err(ConfigError::XRel);
        }

        Ok(Self {
            max_iters,
            x_abs_tol,
            x_rel_tol,
        })
    }

    /// Creates a config that converges on bracket width alone.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is not a positive finite number.
    pub fn absolute(max_iters: usize, tol: f64) -> Result<Self, ConfigError> {
        Self::new(max_iters, tol, 0.0)
    }

    /// Returns the maximum number of shrink iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the absolute tolerance for x convergence.
    #[must_use]
    pub fn x_abs_tol(&self) -> f64 {
        self.x_abs_tol
    }

    /// Returns the relative tolerance for x convergence.
    #[must_use]
    pub fn x_rel_tol(&self) -> f64 {
        self.x_rel_tol
    }

    /// Returns the bracket width below which the search is converged.
    pub(super) fn width_tol(&self, midpoint: f64) -> f64 {
        self.x_abs_tol + self.x_rel_tol * midpoint.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_tolerances() {
        assert_eq!(Config::new(10, 0.0, 0.0), Err(ConfigError::XAbs));
        assert_eq!(Config::new(10, -1e-9, 0.0), Err(ConfigError::XAbs));
        assert_eq!(Config::new(10, f64::NAN, 0.0), Err(ConfigError::XAbs));
        assert_eq!(Config::new(10, 1e-9, -1.0), Err(ConfigError::XRel));
        assert_eq!(Config::new(10, 1e-9, f64::INFINITY), Err(ConfigError::XRel));
    }

    #[test]
    fn absolute_ignores_midpoint() {
        let config = Config::absolute(1000, 1e-14).unwrap();

        assert_eq!(config.max_iters(), 1000);
        assert_eq!(config.x_rel_tol(), 0.0);
        assert_eq!(config.width_tol(1e6), 1e-14);
    }

    #[test]
    fn relative_tolerance_scales_with_midpoint() {
        let config = Config::new(10, 1e-6, 1e-3).unwrap();

        assert_eq!(config.width_tol(-2.0), 1e-6 + 2e-3);
    }
}
