//! Golden section search for single-variable minimization.
//!
//! # Algorithm
//!
//! Starting from `[left, right]`, the search keeps two interior points
//!
//! ```text
//! c = right - φ⁻¹ (right - left)
//! d = left  + φ⁻¹ (right - left)
//! ```
//!
//! with `φ⁻¹ = (√5 - 1) / 2 ≈ 0.618`. When `f(c) > f(d)` the left bound moves
//! to `c`; otherwise, including ties and NaN, the right bound moves to `d`.
//! The interior point that is not passed over lands exactly on a golden
//! position of the new bracket, so it is reused and each shrink needs one new
//! evaluation.
//!
//! Iteration ends when `width <= x_abs_tol + x_rel_tol * |midpoint|` or after
//! `max_iters` shrinks. The midpoint of the final bracket is evaluated once
//! more and returned with its objective and snapshot.
//!
//! The objective is assumed unimodal on the bracket. If it is not, the search
//! settles on some local minimum without noticing.
//!
//! # Observing the search
//!
//! Only [`OptimizationProblem<1>`] is supported. Each interior evaluation
//! after the first produces an [`Event`] carrying the competing point and the
//! bracket it belongs to:
//!
//! - [`Event::Evaluated`] when the objective was computed
//! - [`Event::ModelFailed`] when the model errored
//! - [`Event::ProblemFailed`] when input mapping or the objective errored
//!
//! The first of the two initial evaluations has nothing to compete with and
//! is not reported, and neither is the final midpoint evaluation. Returning
//! [`Action::StopEarly`] ends the search at once; [`Action::AssumeWorse`]
//! makes the point lose its comparison.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod init;
mod point;
mod scalar;
mod search;
mod solution;
mod state;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use point::Point;
pub use scalar::minimize_fn;
pub use solution::{Solution, Status};

use ocp_core::{Model, Observer, OptimizationProblem};

/// Minimizes the problem's objective over `bracket`, given in either order.
///
/// `observer` receives an [`Event`] per reported evaluation and may steer or
/// stop the search; see the [module docs](self).
///
/// # Errors
///
/// Returns an error if an evaluation fails and the observer does not answer
/// with [`Action::AssumeWorse`], or if the final midpoint evaluation fails.
pub fn minimize<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    search::search(model, problem, bracket, config, observer)
}

/// [`minimize`] with no observer.
///
/// # Errors
///
/// Returns an error if any evaluation fails.
pub fn minimize_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    minimize(model, problem, bracket, config, ())
}
