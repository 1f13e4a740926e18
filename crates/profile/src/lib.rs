//! Closed-form optimal profiles of a scalar linear-quadratic control problem
//! and the quadrature cost `J(p)` of each profile.

mod cost;
mod error;
mod evaluator;
pub mod quadrature;

pub use cost::CostFunction;
pub use error::ProfileError;
pub use evaluator::{BoundaryConditions, Coefficients, Profile, ProfileEvaluator, Trajectory};
