//! Reusable scratch memory for large budgets
//!
//! Buffers are grouped in power-of-two size classes. A buffer is always
//! zeroized before it goes back into its class, so anything sitting in the
//! pool holds no secret material.

use core::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use fixedcost_api::{Error, Result, ResultExt};
use fixedcost_params::{DEFAULT_MAX_POOLED_LEN, DEFAULT_MAX_RETAINED_PER_CLASS, MIN_POOLED_LEN};
use log::debug;
use once_cell::sync::Lazy;
use zeroize::Zeroize;

static SHARED_POOL: Lazy<ScratchPool> = Lazy::new(|| ScratchPool::build(PoolConfig::default()));

/// Tuning knobs for a [`ScratchPool`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    /// Largest size class; larger requests are served unpooled
    pub max_pooled_len: usize,
    /// Buffers kept per size class once released
    pub max_retained_per_class: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_pooled_len: DEFAULT_MAX_POOLED_LEN,
            max_retained_per_class: DEFAULT_MAX_RETAINED_PER_CLASS,
        }
    }
}

impl PoolConfig {
    pub fn with_max_pooled_len(mut self, len: usize) -> Self {
        self.max_pooled_len = len;
        self
    }

    pub fn with_max_retained_per_class(mut self, count: usize) -> Self {
        self.max_retained_per_class = count;
        self
    }

    /// Check that the size classes can be derived from this configuration
    pub fn validate(&self) -> Result<()> {
        if !self.max_pooled_len.is_power_of_two() {
            return Err(Error::invalid_parameter(
                "pool config",
                format!("max_pooled_len {} is not a power of two", self.max_pooled_len),
            ));
        }
        if self.max_pooled_len < MIN_POOLED_LEN {
            return Err(Error::invalid_parameter(
                "pool config",
                format!(
                    "max_pooled_len {} is below the smallest class of {} bytes",
                    self.max_pooled_len, MIN_POOLED_LEN
                ),
            ));
        }
        Ok(())
    }

    fn class_count(&self) -> usize {
        (self.max_pooled_len.trailing_zeros() - MIN_POOLED_LEN.trailing_zeros()) as usize + 1
    }
}

/// Pool of zeroed scratch buffers shared between comparisons
///
/// Each size class sits behind its own lock, which is held only to pop or
/// push a buffer.
pub struct ScratchPool {
    classes: Vec<Mutex<Vec<Box<[u8]>>>>,
    config: PoolConfig,
}

impl ScratchPool {
    /// Create a pool with the given configuration
    pub fn new(config: PoolConfig) -> Result<Self> {
        config.validate().with_context("scratch pool")?;
        Ok(Self::build(config))
    }

    /// Process-wide pool used by the facade functions
    pub fn shared() -> &'static ScratchPool {
        &SHARED_POOL
    }

    fn build(config: PoolConfig) -> Self {
        let count = config.class_count();
        debug!(
            "scratch pool: {} size classes from {} to {} bytes, {} retained per class",
            count, MIN_POOLED_LEN, config.max_pooled_len, config.max_retained_per_class
        );
        Self {
            classes: (0..count).map(|_| Mutex::new(Vec::new())).collect(),
            config,
        }
    }

    pub(crate) fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Borrow a zero-filled buffer of exactly `len` visible bytes
    ///
    /// The buffer is zeroized and handed back when the guard drops.
    pub fn acquire(&self, len: usize) -> PooledBuffer<'_> {
        let class = self.class_for(len);
        let buf = class
            .and_then(|idx| self.lock(idx).pop())
            .unwrap_or_else(|| {
                let capacity = class.map_or(len, class_len);
                vec![0u8; capacity].into_boxed_slice()
            });

        PooledBuffer {
            buf,
            len,
            class,
            pool: self,
        }
    }

    /// Number of buffers currently held across all classes
    pub fn retained(&self) -> usize {
        (0..self.classes.len()).map(|idx| self.lock(idx).len()).sum()
    }

    /// Whether every retained buffer is entirely zero
    pub fn all_retained_zeroed(&self) -> bool {
        (0..self.classes.len()).all(|idx| {
            self.lock(idx)
                .iter()
                .all(|buf| buf.iter().all(|&b| b == 0))
        })
    }

    /// Free every retained buffer
    pub fn trim(&self) {
        let mut freed = 0;
        for idx in 0..self.classes.len() {
            let mut class = self.lock(idx);
            freed += class.len();
            class.clear();
        }
        debug!("scratch pool: trimmed {} buffers", freed);
    }

    fn class_for(&self, len: usize) -> Option<usize> {
        if len > self.config.max_pooled_len {
            return None;
        }
        let size = len.max(MIN_POOLED_LEN).next_power_of_two();
        Some((size.trailing_zeros() - MIN_POOLED_LEN.trailing_zeros()) as usize)
    }

    // Retained buffers are always zeroed, so a poisoned class is still usable
    fn lock(&self, idx: usize) -> MutexGuard<'_, Vec<Box<[u8]>>> {
        self.classes[idx]
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn release(&self, idx: usize, buf: Box<[u8]>) {
        let mut class = self.lock(idx);
        if class.len() < self.config.max_retained_per_class {
            class.push(buf);
        }
    }
}

impl fmt::Debug for ScratchPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScratchPool")
            .field("config", &self.config)
            .field("retained", &self.retained())
            .finish()
    }
}

fn class_len(idx: usize) -> usize {
    MIN_POOLED_LEN << idx
}

/// Guard over a buffer borrowed from a [`ScratchPool`]
///
/// Dropping the guard zeroizes the whole backing buffer, then returns it to
/// its size class. Unpooled buffers are zeroized and freed.
pub struct PooledBuffer<'p> {
    buf: Box<[u8]>,
    len: usize,
    class: Option<usize>,
    pool: &'p ScratchPool,
}

impl PooledBuffer<'_> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the buffer goes back to the pool on drop
    pub fn is_pooled(&self) -> bool {
        self.class.is_some()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.buf[..self.len]
    }
}

impl Drop for PooledBuffer<'_> {
    fn drop(&mut self) {
        self.buf[..].zeroize();
        if let Some(idx) = self.class {
            let buf = core::mem::take(&mut self.buf);
            self.pool.release(idx, buf);
        }
    }
}

impl fmt::Debug for PooledBuffer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PooledBuffer(len={}, pooled={}, [REDACTED])",
            self.len,
            self.is_pooled()
        )
    }
}
