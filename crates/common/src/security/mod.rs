//! Scratch memory for secret material
//!
//! Every type in here zeroes its contents before the memory is released or
//! reused, on normal return and during unwinding alike.

pub mod pool;
pub mod scratch;
pub mod secret;

pub use pool::{PoolConfig, PooledBuffer, ScratchPool};
pub use scratch::ScratchBuffer;
pub use secret::InlineScratch;
