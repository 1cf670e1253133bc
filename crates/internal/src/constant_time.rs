//! Constant-time operations to prevent timing attacks

use core::sync::atomic::{compiler_fence, Ordering};
use subtle::ConstantTimeEq;

/// Seed for the difference accumulator
///
/// Non-zero exactly when the unpadded lengths differ, so a length mismatch
/// lands in the same accumulator as a content mismatch.
#[inline(always)]
pub fn ct_len_seed(a_len: usize, b_len: usize) -> usize {
    a_len ^ b_len
}

/// Fold the byte differences of two padded buffers into `seed`
///
/// Visits every index of the buffers exactly once with no early exit.
/// The result is zero iff `seed` is zero and the buffers are identical.
///
/// # Panics
///
/// Panics if the buffers differ in length. Both must be padded to the
/// same budget before calling.
#[inline(never)]
pub fn ct_fold_padded(a: &[u8], b: &[u8], seed: usize) -> usize {
    assert_eq!(a.len(), b.len(), "padded buffers must share a length");

    // Re-slicing lets the optimizer drop the per-index bounds checks
    let len = a.len();
    let a = &a[..len];
    let b = &b[..len];

    let mut acc = seed;
    compiler_fence(Ordering::SeqCst);
    for i in 0..len {
        acc |= (a[i] ^ b[i]) as usize;
    }
    compiler_fence(Ordering::SeqCst);

    core::hint::black_box(acc)
}

/// Test a folded accumulator for zero without a data-dependent branch
#[inline]
pub fn ct_is_zero(acc: usize) -> bool {
    acc.ct_eq(&0usize).into()
}
