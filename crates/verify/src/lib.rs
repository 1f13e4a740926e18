//! Verifies the optimal parameter `p` of the linear-quadratic control problem
//!
//! ```text
//! min ∫₀ᵀ (x² + u²) dt   s.t.   x' = -x + u + p,   x(0) = 1.5,   x(T) = 1.0
//! ```
//!
//! by golden section search over the closed-form cost `J(p)`, and compares
//! the minimizer against a known reference value.

mod report;

pub use report::Report;

use ocp_profile::{BoundaryConditions, CostFunction, ProfileError, ProfileEvaluator};
use ocp_solvers::optimization::golden_section::{
    self, Action, Config, ConfigError, Event, Status,
};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Reference optimum the search result is compared against.
pub const REFERENCE_PARAMETER: f64 = 0.025_001_760_767_718_22;

/// Settings for a verification run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerifyConfig {
    /// Time horizon `T`.
    pub horizon: f64,

    /// Number of uniformly spaced grid points on `[0, T]`.
    pub grid_points: usize,

    pub boundary: BoundaryConditions,

    /// Initial search bracket `[pL, pU]`.
    pub bracket: [f64; 2],

    /// Absolute bracket width at which the search stops.
    pub tolerance: f64,

    pub max_iters: usize,

    pub reference: f64,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        let center = 0.025;
        let half_width = 1e-3;

        Self {
            horizon: ProfileEvaluator::DEFAULT_HORIZON,
            grid_points: ProfileEvaluator::DEFAULT_GRID_POINTS,
            boundary: BoundaryConditions::default(),
            bracket: [center - half_width, center + half_width],
            tolerance: 1e-14,
            max_iters: 1000,
            reference: REFERENCE_PARAMETER,
        }
    }
}

/// Errors that can occur during a verification run.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("search bracket must be finite, got [{left}, {right}]")]
    InvalidBracket { left: f64, right: f64 },

    #[error("invalid solver configuration")]
    Config(#[from] ConfigError),

    #[error("profile evaluation failed")]
    Profile(#[from] ProfileError),

    #[error("golden section search failed")]
    Search(#[from] golden_section::Error),
}

/// Minimizes `J(p)` over the configured bracket and reports the result.
///
/// The search minimizes the cost change relative to the profile at the
/// bracket midpoint, see [`CostFunction`]. The reported profile and `J(p*)`
/// come from a plain evaluation at `p*`. A second evaluation on a grid with
/// twice as many intervals gives the Richardson estimate `(J_fine - J) / 15`
/// of the Simpson error.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or if any profile
/// evaluation fails.
pub fn run(config: &VerifyConfig) -> Result<Report, VerifyError> {
    let [left, right] = config.bracket;
    if !left.is_finite() || !right.is_finite() {
        return Err(VerifyError::InvalidBracket { left, right });
    }

    let evaluator = ProfileEvaluator::new(config.horizon, config.grid_points, config.boundary)?;
    let baseline = 0.5 * (left + right);
    let cost = CostFunction::new(evaluator, baseline)?;
    let solver = Config::absolute(config.max_iters, config.tolerance)?;

    info!(
        horizon = config.horizon,
        grid_points = config.grid_points,
        left,
        right,
        tolerance = config.tolerance,
        baseline,
        "searching for optimal parameter"
    );

    let solution = golden_section::minimize(
        cost.evaluator(),
        &cost,
        config.bracket,
        &solver,
        log_evaluation,
    )?;

    match solution.status {
        Status::Converged => info!(iters = solution.iters, "search converged"),
        Status::MaxIters => warn!(
            iters = solution.iters,
            width = solution.width(),
            "search stopped at the iteration limit"
        ),
        Status::StoppedByObserver => warn!(iters = solution.iters, "search stopped early"),
    }

    let p_star = solution.x;
    let profile = evaluator.evaluate(p_star)?;
    info!(p_star, cost = profile.cost, "evaluated profile at optimum");

    let refined = evaluator.with_grid_points(2 * (evaluator.grid_points() - 1) + 1)?;
    let quadrature_error = (refined.evaluate(p_star)?.cost - profile.cost) / 15.0;
    info!(quadrature_error, "richardson estimate of the simpson error");

    let difference = p_star - config.reference;
    info!(p_star, difference, "compared against reference");

    Ok(Report {
        interval: config.bracket,
        iterations: solution.iters,
        status: solution.status,
        p_star,
        profile,
        reference: config.reference,
        difference,
        quadrature_error,
    })
}

fn log_evaluation(event: &Event<'_, ProfileEvaluator, CostFunction>) -> Option<Action> {
    let [left, right] = event.bracket();
    match event.objective() {
        Some(change) => debug!(p = event.x(), change, left, right, "evaluated cost change"),
        None => debug!(p = event.x(), left, right, "evaluation failed"),
    }
    None
}

/// Formats an error followed by its sources, separated by `": "`.
#[must_use]
pub fn error_chain(error: &(dyn std::error::Error + 'static)) -> String {
    std::iter::successors(Some(error), |e| e.source())
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(": ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_problem_statement() {
        let config = VerifyConfig::default();

        assert_eq!(config.horizon, 100.0);
        assert_eq!(config.grid_points, 20_001);
        assert_eq!(config.boundary, BoundaryConditions { initial: 1.5, terminal: 1.0 });
        assert_eq!(config.tolerance, 1e-14);
        assert_eq!(config.max_iters, 1000);
        assert!((config.bracket[0] - 0.024).abs() < 1e-15);
        assert!((config.bracket[1] - 0.026).abs() < 1e-15);
    }

    #[test]
    fn rejects_non_finite_bracket() {
        let config = VerifyConfig {
            bracket: [0.0, f64::NAN],
            ..VerifyConfig::default()
        };

        assert!(matches!(run(&config), Err(VerifyError::InvalidBracket { .. })));
    }

    #[test]
    fn rejects_invalid_tolerance() {
        let config = VerifyConfig {
            tolerance: 0.0,
            ..VerifyConfig::default()
        };

        assert!(matches!(run(&config), Err(VerifyError::Config(ConfigError::XAbs))));
    }

    #[test]
    fn rejects_invalid_grid() {
        let config = VerifyConfig {
            grid_points: 1,
            ..VerifyConfig::default()
        };

        assert!(matches!(
            run(&config),
            Err(VerifyError::Profile(ProfileError::TooFewGridPoints(1)))
        ));
    }

    #[test]
    fn overflow_is_reported_before_searching() {
        let config = VerifyConfig {
            horizon: 600.0,
            grid_points: 11,
            ..VerifyConfig::default()
        };

        let error = run(&config).unwrap_err();

        assert!(matches!(error, VerifyError::Profile(ProfileError::Overflow { .. })));
        assert!(error_chain(&error).starts_with(
            "profile evaluation failed: closed-form coefficients are not finite for horizon 600"
        ));
    }

    #[test]
    fn error_chain_lists_each_message_once() {
        let failure = ProfileError::GridMismatch { expected: 11, actual: 5 };
        let error = VerifyError::Search(golden_section::Error::Model(Box::new(failure)));

        assert_eq!(
            error_chain(&error),
            "golden section search failed: model error: \
             trajectory has 5 samples but the baseline has 11"
        );
    }

    #[test]
    fn reports_plain_profile_at_optimum() {
        let config = VerifyConfig {
            grid_points: 2_001,
            max_iters: 5,
            ..VerifyConfig::default()
        };
        let evaluator = ProfileEvaluator::new(config.horizon, 2_001, config.boundary).unwrap();
        let cost = CostFunction::new(evaluator, 0.025).unwrap();

        let report = run(&config).unwrap();

        assert_eq!(report.profile, evaluator.evaluate(report.p_star).unwrap());
        assert_eq!(cost.baseline().state.len(), 2_001);
        assert!(cost.cost_change(report.p_star).unwrap() <= cost.cost_change(0.024).unwrap());
    }

    #[test]
    fn coarse_run_reports_iteration_limit() {
        let config = VerifyConfig {
            grid_points: 2_001,
            max_iters: 10,
            ..VerifyConfig::default()
        };

        let report = run(&config).unwrap();

        assert_eq!(report.status, Status::MaxIters);
        assert_eq!(report.iterations, 10);
        assert_eq!(report.difference, report.p_star - report.reference);
    }
}
