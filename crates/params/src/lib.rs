//! Constant values for fixedcost operations
//!
//! This crate provides the budgets and pool limits used across the
//! fixedcost workspace. It has no dependencies.

pub mod compare;
pub mod pool;

pub use compare::*;
pub use pool::*;
