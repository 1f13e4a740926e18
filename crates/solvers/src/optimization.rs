//! Minimization of an objective over solver variables.
//!
//! An [`OptimizationProblem`] turns `x: [f64; N]` into a model input and
//! scores the model output. [`evaluate`] performs that round trip once; the
//! solvers below call it repeatedly.
//!
//! - [`golden_section`]: bracketed, derivative-free search for unimodal
//!   functions of one variable
//!
//! [`OptimizationProblem`]: ocp_core::OptimizationProblem

mod evaluate;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};

pub mod golden_section;
