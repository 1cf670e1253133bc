//! Error handling traits for fixed-cost comparisons

use super::types::{Error, Result};

/// Extension trait for Result types
pub trait ResultExt<T>: Sized {
    /// Replace the context of an `InvalidParameter` error
    fn with_context(self, context: &'static str) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, context: &'static str) -> Result<T> {
        self.map_err(|e| match e {
            Error::InvalidParameter { message, .. } => Error::InvalidParameter { context, message },
            other => other,
        })
    }
}

/// Collapse a checked comparison into the boolean contract
///
/// Every error means "cannot be validated under this budget", which the
/// caller must treat exactly like "does not match".
pub trait OrMismatch {
    fn or_mismatch(self) -> bool;
}

impl OrMismatch for Result<bool> {
    #[inline]
    fn or_mismatch(self) -> bool {
        self.unwrap_or(false)
    }
}
