use ndarray::Zip;
use ocp_core::OptimizationProblem;

use crate::{ProfileError, ProfileEvaluator, Trajectory, quadrature::simpson};

/// Cost `J(p)` of the optimal profile, scored relative to a baseline.
///
/// Near its minimum `J` is about 3.3 while its curvature is about 50, so one
/// ulp of `J` spans several `1e-9` of `p` and a search on `J` itself stalls
/// there. As an [`OptimizationProblem`] this type therefore minimizes the
/// change
///
/// ```text
/// ΔJ(p) = ∫₀ᵀ (x - x_b)(x + x_b) + (u - u_b)(u + u_b) dt = J(p) - J(p_b)
/// ```
///
/// against the profile `(x_b, u_b)` at a fixed baseline `p_b`. It has the
/// same minimizer, but its rounding error scales with `ΔJ` rather than `J`.
///
/// The model paired with it must be [`evaluator`](Self::evaluator), so the
/// trajectories share the baseline's grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CostFunction {
    evaluator: ProfileEvaluator,
    baseline: Trajectory,
}

impl CostFunction {
    /// Creates a cost function that scores profiles against the one at `baseline`.
    ///
    /// # Errors
    ///
    /// Returns an error if the baseline profile cannot be sampled.
    pub fn new(evaluator: ProfileEvaluator, baseline: f64) -> Result<Self, ProfileError> {
        Ok(Self {
            evaluator,
            baseline: evaluator.trajectory(baseline)?,
        })
    }

    #[must_use]
    pub fn evaluator(&self) -> &ProfileEvaluator {
        &self.evaluator
    }

    #[must_use]
    pub fn baseline(&self) -> &Trajectory {
        &self.baseline
    }

    /// Returns `J(p)`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ProfileError`] from evaluating the profile.
    pub fn cost(&self, p: f64) -> Result<f64, ProfileError> {
        self.evaluator.evaluate(p).map(|profile| profile.cost)
    }

    /// Returns `ΔJ(p) = J(p) - J(p_b)`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ProfileError`] from sampling or integrating the profile.
    pub fn cost_change(&self, p: f64) -> Result<f64, ProfileError> {
        let trajectory = self.evaluator.trajectory(p)?;
        self.change(p, &trajectory)
    }

    fn change(&self, p: f64, trajectory: &Trajectory) -> Result<f64, ProfileError> {
        let expected = self.baseline.state.len();
        let actual = trajectory.state.len();
        if actual != expected {
            return Err(ProfileError::GridMismatch { expected, actual });
        }

        let integrand = Zip::from(&trajectory.state)
            .and(&self.baseline.state)
            .and(&trajectory.control)
            .and(&self.baseline.control)
            .map_collect(|&x, &xb, &u, &ub| (x - xb) * (x + xb) + (u - ub) * (u + ub));
        let change = simpson(integrand.view(), self.evaluator.spacing())?;

        if change.is_finite() {
            Ok(change)
        } else {
            Err(ProfileError::NonFiniteCost { parameter: p })
        }
    }
}

impl OptimizationProblem<1> for CostFunction {
    type Input = f64;
    type Output = Trajectory;
    type Error = ProfileError;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn objective(&self, p: &f64, trajectory: &Trajectory) -> Result<f64, Self::Error> {
        self.change(*p, trajectory)
    }
}
