//! Seed selection for seeded game tests.
//!
//! `TEST_SEED` overrides the fixed default so a failing run can be replayed
//! or a different deal sequence explored without editing the test.

/// Seed from `TEST_SEED`, or `default` when unset or unparsable.
pub fn test_seed(default: u64) -> u64 {
    std::env::var("TEST_SEED")
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

/// `count` consecutive seeds starting at [`test_seed`].
pub fn seed_range(default: u64, count: u64) -> impl Iterator<Item = u64> {
    let start = test_seed(default);
    (0..count).map(move |i| start.wrapping_add(i))
}
