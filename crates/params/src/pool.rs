//! Constants for the scratch buffer pool

use crate::compare::INLINE_SCRATCH_LEN;

/// Smallest pooled size class in bytes
pub const MIN_POOLED_LEN: usize = INLINE_SCRATCH_LEN * 2;

/// Largest pooled size class in bytes (1 MiB)
///
/// Larger requests get a one-off buffer that is zeroized and freed on release.
pub const DEFAULT_MAX_POOLED_LEN: usize = 1 << 20;

/// Buffers kept per size class by default
pub const DEFAULT_MAX_RETAINED_PER_CLASS: usize = 16;
