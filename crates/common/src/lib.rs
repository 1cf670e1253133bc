//! Scratch memory, pooling and the fixed-cost comparator
//!
//! This crate ties the constant-time fold from `fixedcost-internal` to
//! scratch buffers that are zero-padded to the caller's budget and wiped on
//! every exit path.

pub mod compare;
pub mod security;

pub use compare::{compare_padded, compare_str_padded};

// Re-export core security types
pub use security::{InlineScratch, PoolConfig, PooledBuffer, ScratchBuffer, ScratchPool};
