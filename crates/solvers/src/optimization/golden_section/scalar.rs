use std::convert::Infallible;

use ocp_core::{Model, OptimizationProblem};

use super::{Config, Error, Solution, minimize_unobserved};

/// Adapts a plain `f(x)` into a model.
struct FnModel<F>(F);

impl<F> Model for FnModel<F>
where
    F: Fn(f64) -> f64,
{
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok((self.0)(*x))
    }
}

/// Passes `x` straight through and minimizes the model output.
struct Direct;

impl OptimizationProblem<1> for Direct {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn objective(&self, _input: &f64, output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}

/// Minimizes a scalar function `f` over `bracket` with golden section search.
///
/// The returned solution carries `x` as the snapshot input and `f(x)` as
/// the snapshot output.
///
/// # Errors
///
/// A plain function has no failure path, so no error is produced in
/// practice. The `Result` mirrors [`minimize`](super::minimize).
pub fn minimize_fn<F>(f: F, bracket: [f64; 2], config: &Config) -> Result<Solution<f64, f64>, Error>
where
    F: Fn(f64) -> f64,
{
    minimize_unobserved(&FnModel(f), &Direct, bracket, config)
}
