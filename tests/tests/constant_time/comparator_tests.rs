// tests/constant_time/comparator_tests.rs
// Timing independence of the fixed-cost comparator from the mismatch position

use super::{run_pair, TestConfig, TimingAnalysis};
use fixedcost::fixed_cost_eq_padded;
use rand::RngCore;
use std::hint::black_box;

fn random_secret(len: usize) -> Vec<u8> {
    let mut secret = vec![0u8; len];
    rand::thread_rng().fill_bytes(&mut secret);
    secret
}

fn flipped_at(secret: &[u8], pos: usize) -> Vec<u8> {
    let mut other = secret.to_vec();
    other[pos] ^= 0x80;
    other
}

fn assert_constant_time(label: &str, analysis: &TimingAnalysis, config: &TestConfig) {
    assert!(
        analysis.is_constant_time,
        "{} is not constant-time: combined_score={:.3} (threshold: {:.3}), mean ratio {:.3} (max: {:.3})",
        label,
        analysis.combined_score,
        config.combined_score_threshold,
        analysis.mean_ratio,
        config.mean_ratio_max
    );
}

#[test]
fn test_first_vs_last_mismatch_inline() {
    let config = TestConfig::for_comparator();
    let budget = 64;
    let secret = random_secret(budget);
    let first = flipped_at(&secret, 0);
    let last = flipped_at(&secret, budget - 1);

    let analysis = run_pair(
        "inline first-vs-last mismatch",
        &config,
        || {
            black_box(fixed_cost_eq_padded(black_box(&secret), black_box(&first), budget));
        },
        || {
            black_box(fixed_cost_eq_padded(black_box(&secret), black_box(&last), budget));
        },
    );

    assert_constant_time("inline comparator", &analysis, &config);
}

#[test]
fn test_first_vs_last_mismatch_pooled() {
    let config = TestConfig::for_pooled_comparator();
    let budget = 1024;
    let secret = random_secret(1000);
    let first = flipped_at(&secret, 0);
    let last = flipped_at(&secret, 999);

    let analysis = run_pair(
        "pooled first-vs-last mismatch",
        &config,
        || {
            black_box(fixed_cost_eq_padded(black_box(&secret), black_box(&first), budget));
        },
        || {
            black_box(fixed_cost_eq_padded(black_box(&secret), black_box(&last), budget));
        },
    );

    assert_constant_time("pooled comparator", &analysis, &config);
}

#[test]
fn test_match_vs_mismatch() {
    let config = TestConfig::for_comparator();
    let budget = 64;
    let secret = random_secret(32);
    let same = secret.clone();
    let first = flipped_at(&secret, 0);

    let analysis = run_pair(
        "match vs first-byte mismatch",
        &config,
        || {
            black_box(fixed_cost_eq_padded(black_box(&secret), black_box(&same), budget));
        },
        || {
            black_box(fixed_cost_eq_padded(black_box(&secret), black_box(&first), budget));
        },
    );

    assert_constant_time("match vs mismatch", &analysis, &config);
}

#[test]
fn test_length_vs_content_mismatch() {
    let config = TestConfig::for_comparator();
    let budget = 64;
    let secret = random_secret(48);
    let shorter = secret[..40].to_vec();
    let content = flipped_at(&secret, 47);

    let analysis = run_pair(
        "length vs content mismatch",
        &config,
        || {
            black_box(fixed_cost_eq_padded(black_box(&secret), black_box(&shorter), budget));
        },
        || {
            black_box(fixed_cost_eq_padded(black_box(&secret), black_box(&content), budget));
        },
    );

    assert_constant_time("length vs content mismatch", &analysis, &config);
}
