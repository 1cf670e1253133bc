//! Scratch buffer selection
//!
//! Budgets up to `INLINE_SCRATCH_LEN` use inline storage; anything larger
//! borrows from a [`ScratchPool`]. Either way the caller sees a zero-filled
//! slice of exactly the requested length that is wiped on drop.

use super::pool::{PooledBuffer, ScratchPool};
use super::secret::InlineScratch;

/// Zero-padded scratch space for one comparison operand
#[derive(Debug)]
pub enum ScratchBuffer<'p> {
    Inline(InlineScratch),
    Pooled(PooledBuffer<'p>),
}

impl<'p> ScratchBuffer<'p> {
    /// Acquire `len` zeroed bytes, inline when they fit
    pub fn acquire(len: usize, pool: &'p ScratchPool) -> Self {
        match InlineScratch::new(len) {
            Some(inline) => Self::Inline(inline),
            None => Self::Pooled(pool.acquire(len)),
        }
    }

    /// Copy `src` into the front of the buffer, leaving the tail zero
    ///
    /// # Panics
    ///
    /// Panics if `src` is longer than the buffer. Callers check the budget
    /// before acquiring scratch.
    pub fn load(&mut self, src: &[u8]) {
        self.as_mut_slice()[..src.len()].copy_from_slice(src);
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_inline(&self) -> bool {
        matches!(self, Self::Inline(_))
    }

    pub fn as_slice(&self) -> &[u8] {
        match self {
            Self::Inline(buf) => buf.as_slice(),
            Self::Pooled(buf) => buf.as_slice(),
        }
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        match self {
            Self::Inline(buf) => buf.as_mut_slice(),
            Self::Pooled(buf) => buf.as_mut_slice(),
        }
    }
}
