//! Internal constant-time primitives for the fixedcost library
//!
//! Nothing in here allocates or branches on secret data. Callers are
//! responsible for padding inputs to a common length before folding.

pub mod constant_time;

pub use constant_time::{ct_fold_padded, ct_is_zero, ct_len_seed};
