//! Fixed-cost equality over zero-padded scratch buffers
//!
//! Both operands are copied into scratch of exactly `padded_len` bytes and
//! folded over every index, so the work done depends on the budget and not
//! on the contents, the unpadded lengths or the first differing position.
//!
//! The one input-dependent branch is the budget pre-check: whether an input
//! is longer than `padded_len` is observable in time. No input bytes are
//! read on that path. Callers must treat the budget as public.

use fixedcost_api::{Error, Result};
use fixedcost_internal::{ct_fold_padded, ct_is_zero, ct_len_seed};

use crate::security::{ScratchBuffer, ScratchPool};

/// Compare two byte sequences at a fixed cost of `padded_len` bytes
///
/// # Errors
///
/// * [`Error::InvalidBudget`] if `padded_len` is zero
/// * [`Error::ExceedsBudget`] if either input is longer than `padded_len`
pub fn compare_padded(pool: &ScratchPool, a: &[u8], b: &[u8], padded_len: usize) -> Result<bool> {
    check_budget(a.len(), padded_len)?;
    check_budget(b.len(), padded_len)?;

    let mut lhs = ScratchBuffer::acquire(padded_len, pool);
    let mut rhs = ScratchBuffer::acquire(padded_len, pool);
    lhs.load(a);
    rhs.load(b);

    let acc = ct_fold_padded(lhs.as_slice(), rhs.as_slice(), ct_len_seed(a.len(), b.len()));
    Ok(ct_is_zero(acc))
}

/// Compare two UTF-8 strings at a fixed cost of `padded_len` bytes
///
/// The encoded byte lengths are checked against the budget before anything
/// is copied.
///
/// # Errors
///
/// As [`compare_padded`], plus [`Error::AbsentInput`] if either side is `None`.
pub fn compare_str_padded(
    pool: &ScratchPool,
    a: Option<&str>,
    b: Option<&str>,
    padded_len: usize,
) -> Result<bool> {
    if padded_len == 0 {
        return Err(Error::InvalidBudget);
    }
    let (a, b) = match (a, b) {
        (Some(a), Some(b)) => (a, b),
        _ => return Err(Error::AbsentInput),
    };
    compare_padded(pool, a.as_bytes(), b.as_bytes(), padded_len)
}

fn check_budget(len: usize, padded_len: usize) -> Result<()> {
    if padded_len == 0 {
        return Err(Error::InvalidBudget);
    }
    if len > padded_len {
        return Err(Error::ExceedsBudget {
            budget: padded_len,
            actual: len,
        });
    }
    Ok(())
}
