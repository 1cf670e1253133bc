//! Scratch memory is wiped on success, rejection and panic paths
//!
//! Each test owns its own pool so the retained buffers can be inspected
//! without interference from other tests.

use fixedcost::api::Error;
use fixedcost::common::{compare_padded, compare_str_padded, PoolConfig, ScratchBuffer, ScratchPool};
use fixedcost::params::SCRATCH_BUFFERS_PER_COMPARE;
use rand::RngCore;
use std::panic::{self, AssertUnwindSafe};

const POOLED_BUDGET: usize = 4096;

fn isolated_pool() -> ScratchPool {
    ScratchPool::new(PoolConfig::default()).unwrap()
}

fn secret(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes
}

#[test]
fn pooled_buffers_zeroed_after_match() {
    let pool = isolated_pool();
    let key = secret(POOLED_BUDGET);

    assert_eq!(compare_padded(&pool, &key, &key, POOLED_BUDGET), Ok(true));

    assert_eq!(pool.retained(), SCRATCH_BUFFERS_PER_COMPARE);
    assert!(pool.all_retained_zeroed());
}

#[test]
fn pooled_buffers_zeroed_after_mismatch() {
    let pool = isolated_pool();
    let key = secret(3000);
    let mut other = key.clone();
    other[1500] ^= 1;

    assert_eq!(compare_padded(&pool, &key, &other, POOLED_BUDGET), Ok(false));

    assert_eq!(pool.retained(), SCRATCH_BUFFERS_PER_COMPARE);
    assert!(pool.all_retained_zeroed());
}

#[test]
fn rejected_inputs_never_reach_scratch() {
    let pool = isolated_pool();
    let key = secret(POOLED_BUDGET + 1);

    assert_eq!(
        compare_padded(&pool, &key, &key, POOLED_BUDGET),
        Err(Error::ExceedsBudget {
            budget: POOLED_BUDGET,
            actual: POOLED_BUDGET + 1
        })
    );
    assert_eq!(compare_str_padded(&pool, None, Some("x"), POOLED_BUDGET), Err(Error::AbsentInput));
    assert_eq!(pool.retained(), 0);
}

#[test]
fn scratch_zeroed_when_unwinding() {
    let pool = isolated_pool();
    let key = secret(POOLED_BUDGET);

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut scratch = ScratchBuffer::acquire(POOLED_BUDGET, &pool);
        scratch.load(&key);
        panic!("fault while holding secret scratch");
    }));

    assert!(result.is_err());
    assert_eq!(pool.retained(), 1);
    assert!(pool.all_retained_zeroed());
}

#[test]
fn buffers_are_reused_across_calls() {
    let pool = isolated_pool();
    let key = secret(1000);

    for _ in 0..10 {
        assert_eq!(compare_padded(&pool, &key, &key, POOLED_BUDGET), Ok(true));
    }

    assert_eq!(pool.retained(), SCRATCH_BUFFERS_PER_COMPARE);
    assert!(pool.all_retained_zeroed());
}

#[test]
fn concurrent_comparisons_share_one_pool() {
    let pool = isolated_pool();
    let key = secret(2000);
    let mut other = key.clone();
    other[0] ^= 0xff;

    let threads = 8;
    std::thread::scope(|s| {
        for i in 0..threads {
            let (pool, key, other) = (&pool, &key, &other);
            s.spawn(move || {
                for _ in 0..50 {
                    let expect_match = i % 2 == 0;
                    let rhs = if expect_match { key } else { other };
                    assert_eq!(
                        compare_padded(pool, key, rhs, POOLED_BUDGET),
                        Ok(expect_match)
                    );
                }
            });
        }
    });

    let retention_cap = PoolConfig::default().max_retained_per_class;
    assert!(pool.retained() >= SCRATCH_BUFFERS_PER_COMPARE);
    assert!(pool.retained() <= retention_cap.min(threads * SCRATCH_BUFFERS_PER_COMPARE));
    assert!(pool.all_retained_zeroed());
}
