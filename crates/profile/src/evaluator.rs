use std::f64::consts::SQRT_2;

use ndarray::Array1;
use ocp_core::Model;

use crate::{ProfileError, quadrature::simpson};

/// State values prescribed at both ends of the horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryConditions {
    /// `x(0)`.
    pub initial: f64,

    /// `x(T)`.
    pub terminal: f64,
}

impl Default for BoundaryConditions {
    fn default() -> Self {
        Self {
            initial: 1.5,
            terminal: 1.0,
        }
    }
}

/// Coefficients of the closed-form state `x(t) = p/2 + A·e^{√2 t} + B·e^{-√2 t}`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
}

/// Optimal state and control sampled on the uniform grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub time: Array1<f64>,
    pub state: Array1<f64>,
    pub control: Array1<f64>,
    pub coefficients: Coefficients,
}

/// Result of evaluating the profile for one parameter value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile {
    pub coefficients: Coefficients,

    /// Simpson quadrature of `x² + u²` over `[0, T]`.
    pub cost: f64,
}

/// Closed-form optimal profiles of the linear-quadratic problem
///
/// ```text
/// min ∫₀ᵀ (x² + u²) dt   s.t.   x' = -x + u + p,   x(0) = x₀,   x(T) = x_T
/// ```
///
/// for a fixed parameter `p`.
///
/// The optimality conditions give `x'' = 2x - p`, so the state is
/// `x(t) = p/2 + A·e^{st} + B·e^{-st}` with `s = √2`, and the control follows
/// from the dynamics as `u = x' + x - p`. Substituting the two boundary
/// conditions yields, with `E = e^{sT}`, `a = x₀ - p/2` and `b = x_T - p/2`:
///
/// ```text
/// A = (b·E - a) / (E² - 1)
/// B = E·(a·E - b) / (E² - 1)
/// ```
///
/// Evaluation is a pure function of `p` and the evaluator's settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileEvaluator {
    horizon: f64,
    grid_points: usize,
    boundary: BoundaryConditions,
}

impl Default for ProfileEvaluator {
    fn default() -> Self {
        Self {
            horizon: Self::DEFAULT_HORIZON,
            grid_points: Self::DEFAULT_GRID_POINTS,
            boundary: BoundaryConditions::default(),
        }
    }
}

impl ProfileEvaluator {
    /// Time horizon `T`.
    pub const DEFAULT_HORIZON: f64 = 100.0;

    /// Grid size giving an even number (20000) of Simpson intervals.
    pub const DEFAULT_GRID_POINTS: usize = 20_001;

    /// Creates an evaluator for the horizon `[0, horizon]` sampled at
    /// `grid_points` uniformly spaced times.
    ///
    /// # Errors
    ///
    /// Returns an error if `horizon` is not a positive finite number or if
    /// fewer than two grid points are requested.
    pub fn new(
        horizon: f64,
        grid_points: usize,
        boundary: BoundaryConditions,
    ) -> Result<Self, ProfileError> {
        if !horizon.is_finite() || horizon <= 0.0 {
            return Err(ProfileError::NonPositiveHorizon(horizon));
        }
        if grid_points < 2 {
            return Err(ProfileError::TooFewGridPoints(grid_points));
        }

        Ok(Self {
            horizon,
            grid_points,
            boundary,
        })
    }

    /// Returns a copy of this evaluator on a different grid.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two grid points are requested.
    pub fn with_grid_points(&self, grid_points: usize) -> Result<Self, ProfileError> {
        Self::new(self.horizon, grid_points, self.boundary)
    }

    #[must_use]
    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    #[must_use]
    pub fn grid_points(&self) -> usize {
        self.grid_points
    }

    #[must_use]
    pub fn boundary(&self) -> BoundaryConditions {
        self.boundary
    }

    /// Uniform grid spacing `T / (N - 1)`.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.horizon / (self.grid_points - 1) as f64
    }

    /// Solves the boundary conditions for `A` and `B`.
    ///
    /// # Errors
    ///
    /// Returns an error if `p` is not finite or if the coefficients overflow,
    /// which happens once `√2·T` approaches the exponent range of `f64`.
    pub fn coefficients(&self, p: f64) -> Result<Coefficients, ProfileError> {
        if !p.is_finite() {
            return Err(ProfileError::NonFiniteParameter(p));
        }

        let e = (SQRT_2 * self.horizon).exp();
        let half = p / 2.0;
        let a0 = self.boundary.initial - half;
        let b0 = self.boundary.terminal - half;
        let denominator = e * e - 1.0;

        let a = (-a0 + b0 * e) / denominator;
        let b = (e * (a0 * e - b0)) / denominator;

        if a.is_finite() && b.is_finite() {
            Ok(Coefficients { a, b })
        } else {
            Err(ProfileError::Overflow {
                horizon: self.horizon,
                a,
                b,
            })
        }
    }

    /// Samples the optimal state and control on the grid.
    ///
    /// # Errors
    ///
    /// Returns an error if the coefficients cannot be computed.
    pub fn trajectory(&self, p: f64) -> Result<Trajectory, ProfileError> {
        let coefficients = self.coefficients(p)?;
        let Coefficients { a, b } = coefficients;
        let s = SQRT_2;
        let half = p / 2.0;

        let time = Array1::linspace(0.0, self.horizon, self.grid_points);
        let growth = time.mapv(|t| (s * t).exp());
        let decay = time.mapv(|t| (-s * t).exp());

        let state = ndarray::Zip::from(&growth)
            .and(&decay)
            .map_collect(|&g, &d| half + a * g + b * d);
        let control = ndarray::Zip::from(&growth)
            .and(&decay)
            .map_collect(|&g, &d| a * (1.0 + s) * g + b * (1.0 - s) * d - half);

        Ok(Trajectory {
            time,
            state,
            control,
            coefficients,
        })
    }

    /// Computes the coefficients and the quadrature cost for `p`.
    ///
    /// # Errors
    ///
    /// Returns an error if the coefficients overflow or the cost is not finite.
    pub fn evaluate(&self, p: f64) -> Result<Profile, ProfileError> {
        let trajectory = self.trajectory(p)?;
        let Trajectory { state, control, .. } = &trajectory;
        let integrand = state * state + control * control;
        let cost = simpson(integrand.view(), self.spacing())?;

        if !cost.is_finite() {
            return Err(ProfileError::NonFiniteCost { parameter: p });
        }

        Ok(Profile {
            coefficients: trajectory.coefficients,
            cost,
        })
    }
}

/// Samples the optimal profile; scoring it is left to the problem, see
/// [`CostFunction`](crate::CostFunction).
impl Model for ProfileEvaluator {
    type Input = f64;
    type Output = Trajectory;
    type Error = ProfileError;

    fn call(&self, p: &f64) -> Result<Trajectory, Self::Error> {
        self.trajectory(*p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    /// Reproduces `x(0)` and `x(T)` from the coefficients.
    fn boundary_values(evaluator: &ProfileEvaluator, p: f64) -> (f64, f64) {
        let Coefficients { a, b } = evaluator.coefficients(p).unwrap();
        let e = (SQRT_2 * evaluator.horizon()).exp();
        (p / 2.0 + a + b, p / 2.0 + a * e + b / e)
    }

    #[test]
    fn coefficients_reproduce_boundary_conditions() {
        let evaluator = ProfileEvaluator::default();

        for p in [0.0, 0.024, 0.025, 0.026, 1.0, -3.0] {
            let (start, end) = boundary_values(&evaluator, p);
            assert_relative_eq!(start, 1.5, epsilon = 1e-9);
            assert_relative_eq!(end, 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn custom_boundary_conditions_are_honored() {
        let boundary = BoundaryConditions {
            initial: -0.5,
            terminal: 2.0,
        };
        let evaluator = ProfileEvaluator::new(3.0, 301, boundary).unwrap();

        let (start, end) = boundary_values(&evaluator, 0.4);
        assert_relative_eq!(start, -0.5, epsilon = 1e-12);
        assert_relative_eq!(end, 2.0, epsilon = 1e-12);

        let trajectory = evaluator.trajectory(0.4).unwrap();
        assert_relative_eq!(trajectory.state[0], -0.5, epsilon = 1e-12);
        assert_relative_eq!(trajectory.state[300], 2.0, epsilon = 1e-12);
        assert_relative_eq!(trajectory.time[300], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn trajectory_satisfies_dynamics() {
        let evaluator = ProfileEvaluator::new(2.0, 9, BoundaryConditions::default()).unwrap();
        let p = 0.3;

        let trajectory = evaluator.trajectory(p).unwrap();
        let Coefficients { a, b } = trajectory.coefficients;

        for (i, &t) in trajectory.time.iter().enumerate() {
            let x = trajectory.state[i];
            let u = trajectory.control[i];
            let dx = SQRT_2 * (a * (SQRT_2 * t).exp() - b * (-SQRT_2 * t).exp());
            assert_relative_eq!(dx, -x + u + p, epsilon = 1e-12);
        }
    }

    #[test]
    fn evaluation_is_idempotent() {
        let evaluator = ProfileEvaluator::default();

        let first = evaluator.evaluate(0.025).unwrap();
        let second = evaluator.evaluate(0.025).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.cost.to_bits(), second.cost.to_bits());
    }

    #[test]
    fn model_call_samples_trajectory() {
        let evaluator = ProfileEvaluator::default();

        let trajectory = evaluator.call(&0.02).unwrap();

        assert_eq!(trajectory, evaluator.trajectory(0.02).unwrap());
        assert_eq!(trajectory.state.len(), ProfileEvaluator::DEFAULT_GRID_POINTS);
        assert_eq!(trajectory.coefficients, evaluator.coefficients(0.02).unwrap());
    }

    #[test]
    fn default_grid_cost_is_pinned() {
        let profile = ProfileEvaluator::default().evaluate(0.025).unwrap();

        assert_relative_eq!(profile.cost, 3.314_497_672_529_506, max_relative = 1e-12);
        assert_relative_eq!(
            profile.coefficients.a,
            3.767_232_873_360_711e-62,
            max_relative = 1e-12
        );
        assert_relative_eq!(profile.coefficients.b, 1.4875, max_relative = 1e-12);
    }

    #[test]
    fn odd_interval_grid_cost_is_pinned() {
        let evaluator = ProfileEvaluator::default().with_grid_points(20_000).unwrap();

        let profile = evaluator.evaluate(0.025).unwrap();

        assert_relative_eq!(profile.cost, 3.314_497_676_396_484, max_relative = 1e-12);
    }

    #[test]
    fn cost_is_nearly_grid_independent() {
        let coarse = ProfileEvaluator::default();
        let fine = coarse.with_grid_points(40_001).unwrap();

        let j_coarse = coarse.evaluate(0.025).unwrap().cost;
        let j_fine = fine.evaluate(0.025).unwrap().cost;

        assert!((j_fine - j_coarse).abs() < 1e-8);
    }

    #[test]
    fn rejects_invalid_settings() {
        let boundary = BoundaryConditions::default();

        assert_eq!(
            ProfileEvaluator::new(0.0, 100, boundary),
            Err(ProfileError::NonPositiveHorizon(0.0))
        );
        assert_eq!(
            ProfileEvaluator::new(-1.0, 100, boundary),
            Err(ProfileError::NonPositiveHorizon(-1.0))
        );
        assert!(ProfileEvaluator::new(f64::NAN, 100, boundary).is_err());
        assert_eq!(
            ProfileEvaluator::new(1.0, 1, boundary),
            Err(ProfileError::TooFewGridPoints(1))
        );
    }

    #[test]
    fn rejects_non_finite_parameter() {
        let result = ProfileEvaluator::default().evaluate(f64::NAN);

        assert!(matches!(result, Err(ProfileError::NonFiniteParameter(_))));
    }

    #[test]
    fn overflowing_horizon_is_an_error() {
        let evaluator = ProfileEvaluator::new(600.0, 11, BoundaryConditions::default()).unwrap();

        let result = evaluator.evaluate(0.025);

        assert!(matches!(
            result,
            Err(ProfileError::Overflow { horizon, .. }) if horizon == 600.0
        ));
    }
}
