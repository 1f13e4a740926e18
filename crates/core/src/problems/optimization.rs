/// Defines an optimization problem to be solved.
///
/// An optimization problem maps solver variables to a model input,
/// then computes an objective value from the model input and output.
/// Minimizing solvers search for the input with the lowest objective.
///
/// The const generic `N` is the number of solver variables.
/// For example, `N = 1` represents a scalar problem such as choosing a single
/// control parameter.
pub trait OptimizationProblem<const N: usize> {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Maps solver variables (`x`) into a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from `x`.
    fn input(&self, x: &[f64; N]) -> Result<Self::Input, Self::Error>;

    /// Computes an objective value from model input/output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective cannot be computed.
    fn objective(&self, input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    /// Scales the single solver variable before handing it to the model.
    struct Scaled(f64);

    impl OptimizationProblem<1> for Scaled {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
            Ok(self.0 * x[0])
        }

        fn objective(&self, _input: &f64, output: &f64) -> Result<f64, Self::Error> {
            Ok(output.abs())
        }
    }

    #[test]
    fn maps_variables_and_extracts_objective() {
        let problem = Scaled(2.0);

        let input = problem.input(&[1.5]).unwrap();
        let objective = problem.objective(&input, &-4.0).unwrap();

        assert_eq!(input, 3.0);
        assert_eq!(objective, 4.0);
    }
}
