use ocp_core::{Model, Observer, OptimizationProblem};

use crate::optimization::evaluate::EvalError;

use super::{Action, Point};

/// What the solver reports to its observer after each interior evaluation.
///
/// Every variant names the point `x` that was tried, the interior point
/// `other` it competes with, and the outer `bracket` both lie in. Brackets of
/// successive events are nested.
pub enum Event<'a, M, P>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    Evaluated {
        /// `x` and its objective.
        point: Point,
        input: &'a M::Input,
        output: &'a M::Output,
        other: Point,
        bracket: [f64; 2],
    },

    /// The model returned an error at `x`.
    ModelFailed {
        x: f64,
        other: Point,
        bracket: [f64; 2],
        error: &'a M::Error,
    },

    /// Mapping `x` to a model input, or the output to an objective, failed.
    ProblemFailed {
        x: f64,
        other: Point,
        bracket: [f64; 2],
        error: &'a P::Error,
    },
}

impl<M, P> Event<'_, M, P>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Self::Evaluated { point, .. } => point.x,
            Self::ModelFailed { x, .. } | Self::ProblemFailed { x, .. } => *x,
        }
    }

    /// The objective at `x`, if evaluation succeeded.
    #[must_use]
    pub fn objective(&self) -> Option<f64> {
        if let Self::Evaluated { point, .. } = self {
            Some(point.objective)
        } else {
            None
        }
    }

    #[must_use]
    pub fn other(&self) -> Point {
        match self {
            Self::Evaluated { other, .. }
            | Self::ModelFailed { other, .. }
            | Self::ProblemFailed { other, .. } => *other,
        }
    }

    #[must_use]
    pub fn bracket(&self) -> [f64; 2] {
        match self {
            Self::Evaluated { bracket, .. }
            | Self::ModelFailed { bracket, .. }
            | Self::ProblemFailed { bracket, .. } => *bracket,
        }
    }

    /// Reports a failed evaluation at `x` and returns the observer's decision.
    pub(super) fn emit_failure<Obs>(
        x: f64,
        other: Point,
        bracket: [f64; 2],
        failure: &EvalError<M::Error, P::Error>,
        observer: &mut Obs,
    ) -> Option<Action>
    where
        Obs: for<'a> Observer<Event<'a, M, P>, Action>,
    {
        let event = match failure {
            EvalError::Model(error) => Event::ModelFailed {
                x,
                other,
                bracket,
                error,
            },
            EvalError::Problem(error) => Event::ProblemFailed {
                x,
                other,
                bracket,
                error,
            },
        };
        observer.observe(&event)
    }
}
