//! Error handling for fixed-cost comparisons

pub mod traits;
pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export error traits
pub use traits::{OrMismatch, ResultExt};
