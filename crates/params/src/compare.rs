//! Constants for fixed-cost comparison

/// Padded length used when the caller does not pick one
///
/// Large enough for a SHA-512 digest or a typical API key.
pub const DEFAULT_PADDED_LEN: usize = 64;

/// Largest padded length served from inline (stack) scratch
///
/// Budgets above this borrow their scratch from a pool instead.
pub const INLINE_SCRATCH_LEN: usize = 256;

/// Number of scratch buffers a single comparison uses
pub const SCRATCH_BUFFERS_PER_COMPARE: usize = 2;
