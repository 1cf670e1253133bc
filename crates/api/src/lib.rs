//! Public error types for the fixedcost library
//!
//! The comparison operations themselves only ever answer `true` or `false`.
//! The checked variants report *why* an input was rejected through the
//! [`Error`] type defined here, so that callers can tell a configuration
//! bug (zero budget, undersized budget) apart from a genuine mismatch.

pub mod error;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, OrMismatch, Result, ResultExt};
