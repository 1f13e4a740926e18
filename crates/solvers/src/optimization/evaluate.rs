use thiserror::Error;

use ocp_core::{Model, OptimizationProblem, Snapshot};

/// The result of evaluating an optimization problem at a given `x`.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O, const N: usize> {
    pub x: [f64; N],

    pub objective: f64,

    pub snapshot: Snapshot<I, O>,
}

/// Errors that can occur when evaluating an optimization problem.
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    /// The model call failed.
    #[error("model call failed")]
    Model(#[source] ME),

    /// Failed to construct input or compute the objective.
    #[error("problem error")]
    Problem(#[source] PE),
}

/// Type alias for the result of [`evaluate`].
pub type EvaluateResult<M, P, const N: usize> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output, N>,
    EvalError<<M as Model>::Error, <P as OptimizationProblem<N>>::Error>,
>;

/// Evaluates the model in the context of an optimization problem.
///
/// Maps `x` to a model input, calls the model, then computes the objective
/// from the input and output. Every solver evaluation goes through here.
///
/// # Errors
///
/// Returns an error if input mapping, model call, or objective computation fails.
pub fn evaluate<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x: [f64; N],
) -> EvaluateResult<M, P, N>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    let input = problem.input(&x).map_err(EvalError::Problem)?;
    let output = model.call(&input).map_err(EvalError::Model)?;
    let objective = problem
        .objective(&input, &output)
        .map_err(EvalError::Problem)?;

    Ok(Evaluation {
        x,
        objective,
        snapshot: Snapshot::new(input, output),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[derive(Debug, Error)]
    #[error("negative input")]
    struct Negative;

    /// Square root model that rejects negative inputs.
    struct Sqrt;

    impl Model for Sqrt {
        type Input = f64;
        type Output = f64;
        type Error = Negative;

        fn call(&self, x: &f64) -> Result<f64, Self::Error> {
            if *x < 0.0 { Err(Negative) } else { Ok(x.sqrt()) }
        }
    }

    /// Offsets `x` before calling the model; rejects non-finite variables.
    struct Offset(f64);

    impl OptimizationProblem<1> for Offset {
        type Input = f64;
        type Output = f64;
        type Error = Negative;

        fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
            if x[0].is_finite() { Ok(x[0] + self.0) } else { Err(Negative) }
        }

        fn objective(&self, _input: &f64, output: &f64) -> Result<f64, Self::Error> {
            Ok(2.0 * output)
        }
    }

    #[test]
    fn evaluation_captures_input_output_and_objective() {
        let eval = evaluate(&Sqrt, &Offset(1.0), [3.0]).unwrap();

        assert_eq!(eval.x, [3.0]);
        assert_relative_eq!(eval.snapshot.input, 4.0);
        assert_relative_eq!(eval.snapshot.output, 2.0);
        assert_relative_eq!(eval.objective, 4.0);
    }

    #[test]
    fn model_and_problem_failures_are_distinguished() {
        let model_failure = evaluate(&Sqrt, &Offset(-5.0), [1.0]);
        assert!(matches!(model_failure, Err(EvalError::Model(_))));

        let problem_failure = evaluate(&Sqrt, &Offset(0.0), [f64::NAN]);
        assert!(matches!(problem_failure, Err(EvalError::Problem(_))));
    }
}
