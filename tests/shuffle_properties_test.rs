//! Permutation, determinism and seed sensitivity of the seeded shuffle.

use parasha_games::core::{seeded_shuffle, RoundSeed};

#[test]
fn test_shuffle_is_a_permutation() {
    for n in [0usize, 1, 2, 7, 24, 100] {
        let items: Vec<usize> = (0..n).map(|i| i % 5).collect();
        for seed in ["", "x", "bereshit:memory:0", "נח:words:3"] {
            let mut out = seeded_shuffle(&items, seed);
            assert_eq!(out.len(), n);
            out.sort_unstable();
            let mut expected = items.clone();
            expected.sort_unstable();
            assert_eq!(out, expected, "n={n} seed={seed:?}");
        }
    }
}

#[test]
fn test_shuffle_is_deterministic() {
    let items: Vec<String> = ["ark", "dove", "raven", "olive", "rainbow"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let first = seeded_shuffle(&items, "noach:drawers:2");
    for _ in 0..10 {
        assert_eq!(seeded_shuffle(&items, "noach:drawers:2"), first);
    }
}

#[test]
fn test_successive_rounds_differ() {
    let items: Vec<u32> = (0..12).collect();
    let mut seed = RoundSeed::new("lech-lecha:memory");
    let mut seen = vec![seeded_shuffle(&items, &seed.current())];
    for _ in 0..20 {
        let next = seeded_shuffle(&items, &seed.advance());
        assert!(!seen.contains(&next), "round {} repeated", seed.round());
        seen.push(next);
    }
}
