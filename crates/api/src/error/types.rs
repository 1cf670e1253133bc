//! Error type definitions for fixed-cost comparisons

use thiserror::Error;

/// Reasons a comparison could not be evaluated under its budget
///
/// None of these carry input content. `ExceedsBudget` carries the length
/// of the offending input, which is already observable through the
/// budget pre-check timing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The padded length was zero
    #[error("invalid budget: padded length must be greater than zero")]
    InvalidBudget,

    /// One of the inputs is longer than the padded length
    #[error("input of {actual} bytes exceeds the {budget}-byte budget")]
    ExceedsBudget { budget: usize, actual: usize },

    /// A text input was absent
    #[error("absent input")]
    AbsentInput,

    /// Invalid configuration parameter
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },
}

/// Result type for fixed-cost operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Build an `InvalidParameter` error
    pub fn invalid_parameter(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }
}
