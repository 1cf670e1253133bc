//! Inline scratch storage with guaranteed zeroization
//!
//! Small budgets never touch the heap: each buffer lives on the caller's
//! stack frame and is wiped when it goes out of scope.

use core::fmt;
use fixedcost_params::INLINE_SCRATCH_LEN;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Fixed-capacity scratch buffer that guarantees zeroization
///
/// The visible slice is exactly `len` bytes. The backing array is always
/// `INLINE_SCRATCH_LEN` bytes and is wiped in full on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct InlineScratch {
    data: [u8; INLINE_SCRATCH_LEN],
    #[zeroize(skip)]
    len: usize,
}

impl InlineScratch {
    /// Create a zero-filled buffer of `len` bytes
    ///
    /// Returns `None` when `len` exceeds the inline capacity.
    pub fn new(len: usize) -> Option<Self> {
        if len > INLINE_SCRATCH_LEN {
            return None;
        }
        Some(Self {
            data: [0u8; INLINE_SCRATCH_LEN],
            len,
        })
    }

    /// Get the length of the buffer
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get a reference to the visible bytes
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Get a mutable reference to the visible bytes
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data[..self.len]
    }

    /// Whole backing array, including bytes past `len`
    #[cfg(test)]
    pub(crate) fn backing(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for InlineScratch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InlineScratch(len={}, [REDACTED])", self.len)
    }
}
