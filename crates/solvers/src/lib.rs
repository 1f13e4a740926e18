//! Numerical solvers for ocp-verify problems.
//!
//! Solvers are generic over [`Model`] and [`OptimizationProblem`], so the same
//! search can drive a closed-form profile evaluator or a plain test function.
//!
//! [`Model`]: ocp_core::Model
//! [`OptimizationProblem`]: ocp_core::OptimizationProblem

pub mod optimization;
