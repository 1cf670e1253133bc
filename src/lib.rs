//! # fixedcost
//!
//! Fixed-cost equality for secret strings and byte sequences such as API
//! keys, bearer tokens and HMAC tags.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! fixedcost = "0.3"
//! ```
//!
//! ```
//! use fixedcost::{fixed_cost_eq, fixed_cost_eq_str_padded};
//!
//! assert!(fixed_cost_eq(b"secret123", b"secret123"));
//! assert!(!fixed_cost_eq_str_padded(Some("short"), Some("short-but-longer"), 8));
//! ```
//!
//! ## How it works
//!
//! Both inputs are copied into zeroed scratch buffers of exactly the padded
//! length (64 bytes unless the caller picks another budget). The length
//! difference seeds an accumulator, and every byte position of the padded
//! buffers is folded into it. The cost therefore depends on the budget
//! alone. The scratch buffers are zeroized before they are released.
//!
//! Inputs longer than the budget are rejected up front. That check is the
//! one deliberate timing leak: "too long for this budget" is observable,
//! so the budget must never itself be secret.
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`fixedcost-api`]: Error types
//! - [`fixedcost-common`]: Scratch buffers, the pool and the comparator
//! - [`fixedcost-internal`]: Constant-time primitives
//! - [`fixedcost-params`]: Budgets and pool limits

pub use fixedcost_api as api;
pub use fixedcost_common as common;
pub use fixedcost_internal as internal;
pub use fixedcost_params as params;

use api::{OrMismatch, Result};
use common::ScratchPool;
use params::DEFAULT_PADDED_LEN;

/// Compare two byte sequences under the default 64-byte budget
pub fn fixed_cost_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    fixed_cost_eq_padded(a, b, DEFAULT_PADDED_LEN)
}

/// Compare two byte sequences at a fixed cost of `padded_len` bytes
///
/// Returns `false` when `padded_len` is zero or either input is longer than
/// `padded_len`, even if the inputs are equal.
pub fn fixed_cost_eq_padded<A, B>(a: A, b: B, padded_len: usize) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    try_fixed_cost_eq_padded(a, b, padded_len).or_mismatch()
}

/// Checked form of [`fixed_cost_eq_padded`] that reports why an input was rejected
pub fn try_fixed_cost_eq_padded<A, B>(a: A, b: B, padded_len: usize) -> Result<bool>
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    common::compare_padded(ScratchPool::shared(), a.as_ref(), b.as_ref(), padded_len)
}

/// Compare two strings under the default 64-byte budget
///
/// The budget counts UTF-8 bytes, not characters.
pub fn fixed_cost_eq_str(a: Option<&str>, b: Option<&str>) -> bool {
    fixed_cost_eq_str_padded(a, b, DEFAULT_PADDED_LEN)
}

/// Compare two strings at a fixed cost of `padded_len` bytes
///
/// An absent input never matches.
pub fn fixed_cost_eq_str_padded(a: Option<&str>, b: Option<&str>, padded_len: usize) -> bool {
    try_fixed_cost_eq_str_padded(a, b, padded_len).or_mismatch()
}

/// Checked form of [`fixed_cost_eq_str_padded`]
pub fn try_fixed_cost_eq_str_padded(
    a: Option<&str>,
    b: Option<&str>,
    padded_len: usize,
) -> Result<bool> {
    common::compare_str_padded(ScratchPool::shared(), a, b, padded_len)
}

/// Common imports for fixedcost users
pub mod prelude {
    pub use crate::api::{Error, OrMismatch, Result};
    pub use crate::common::{PoolConfig, ScratchPool};
    pub use crate::params::DEFAULT_PADDED_LEN;
    pub use crate::{
        fixed_cost_eq, fixed_cost_eq_padded, fixed_cost_eq_str, fixed_cost_eq_str_padded,
        try_fixed_cost_eq_padded, try_fixed_cost_eq_str_padded,
    };
}
