//! Traits shared by the ocp-verify crates.
//!
//! - [`Model`]: a deterministic call from a typed input to a typed output
//! - [`Snapshot`]: one recorded input/output pair
//! - [`Observer`]: watches solver events and may answer with an action
//! - [`OptimizationProblem`]: maps solver variables to a model input and
//!   scores the model output with an objective

mod model;
mod observer;
mod problems;

pub use model::{Model, Snapshot};
pub use observer::Observer;
pub use problems::OptimizationProblem;
