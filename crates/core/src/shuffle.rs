//! Shuffle module - seeded, reproducible permutations
//!
//! A string seed is folded into 32 bits with FNV-1a, drives a mulberry32
//! stream, and the stream feeds a Fisher-Yates pass from the end of the slice.
//! Every step is wrapping 32-bit arithmetic, so the same `(items, seed)` pair
//! yields the same order on every platform.

/// FNV-1a offset basis (32-bit).
pub const FNV_OFFSET_BASIS: u32 = 2_166_136_261;

/// FNV-1a prime (32-bit).
pub const FNV_PRIME: u32 = 16_777_619;

/// Increment applied to the mulberry32 state on every draw.
const MULBERRY_INCREMENT: u32 = 0x6D2B_79F5;

/// 2^32 as a float, the divisor that maps a `u32` into `[0, 1)`.
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Fold a seed string into a 32-bit hash.
///
/// Characters are consumed as UTF-16 code units so labels outside the ASCII
/// range hash the same way a browser-side `charCodeAt` fold does.
///
/// ```
/// use parasha_games_core::hash_seed;
///
/// assert_eq!(hash_seed(""), 2_166_136_261);
/// assert_eq!(hash_seed("x"), 4_245_442_695);
/// ```
pub fn hash_seed(seed: &str) -> u32 {
    seed.encode_utf16().fold(FNV_OFFSET_BASIS, |acc, unit| {
        (acc ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}

/// mulberry32 generator.
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Seed the generator from a string via [`hash_seed`].
    pub fn from_seed_str(seed: &str) -> Self {
        Self::new(hash_seed(seed))
    }

    /// Next raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(MULBERRY_INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }

    /// Index in `[0, bound)` scaled from [`next_f64`](Self::next_f64).
    fn next_index(&mut self, bound: usize) -> usize {
        (self.next_f64() * bound as f64).floor() as usize
    }

    /// Shuffle a slice in place using Fisher-Yates from the end.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_index(i + 1);
            slice.swap(i, j);
        }
    }
}

/// Return a reordered copy of `items`; the input is left untouched.
///
/// ```
/// use parasha_games_core::seeded_shuffle;
///
/// assert_eq!(seeded_shuffle(&[0, 1, 2, 3, 4], "x"), vec![1, 3, 4, 0, 2]);
/// ```
pub fn seeded_shuffle<T: Clone>(items: &[T], seed: &str) -> Vec<T> {
    let mut out = items.to_vec();
    Mulberry32::from_seed_str(seed).shuffle(&mut out);
    out
}

/// Round-based seed strings: `"{base}:{round}"`.
///
/// Games bump the round on every reset so each new round gets a fresh but
/// reproducible permutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSeed {
    base: String,
    round: u32,
}

impl RoundSeed {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            round: 0,
        }
    }

    /// Seed for the current round.
    pub fn current(&self) -> String {
        format!("{}:{}", self.base, self.round)
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Advance to the next round and return its seed.
    pub fn advance(&mut self) -> String {
        self.round = self.round.wrapping_add(1);
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_known_values() {
        assert_eq!(hash_seed(""), FNV_OFFSET_BASIS);
        assert_eq!(hash_seed("x"), 4_245_442_695);
        assert_eq!(hash_seed("bereshit-0"), 127_671_458);
    }

    #[test]
    fn test_mulberry_reference_stream() {
        let mut rng = Mulberry32::new(0);
        assert_eq!(rng.next_f64(), 0.266_429_208_684_712_65);
        assert_eq!(rng.next_f64(), 0.000_329_745_700_582_861_9);
    }

    #[test]
    fn test_mulberry_seeded_from_string() {
        let mut rng = Mulberry32::from_seed_str("x");
        assert_eq!(rng.next_f64(), 0.480_135_933_030_396_7);
        assert_eq!(rng.next_f64(), 0.109_258_486_423_641_44);
        assert_eq!(rng.next_f64(), 0.823_161_584_325_134_8);
    }

    #[test]
    fn test_rng_deterministic() {
        let mut a = Mulberry32::new(12345);
        let mut b = Mulberry32::new(12345);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_values_stay_in_unit_interval() {
        let mut rng = Mulberry32::new(u32::MAX);
        for _ in 0..1000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_golden_vectors() {
        assert_eq!(seeded_shuffle(&[0, 1, 2, 3, 4], "x"), vec![1, 3, 4, 0, 2]);
        let ten: Vec<u32> = (0..10).collect();
        assert_eq!(seeded_shuffle(&ten, "x"), vec![9, 8, 3, 2, 5, 7, 1, 6, 0, 4]);
        assert_eq!(
            seeded_shuffle(&['a', 'b', 'c', 'd', 'e', 'f'], ""),
            vec!['a', 'e', 'b', 'f', 'c', 'd']
        );
    }

    #[test]
    fn test_input_not_mutated() {
        let input = vec![1, 2, 3, 4, 5, 6];
        let _ = seeded_shuffle(&input, "seed");
        assert_eq!(input, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_empty_and_single() {
        let empty: Vec<u8> = Vec::new();
        assert!(seeded_shuffle(&empty, "x").is_empty());
        assert_eq!(seeded_shuffle(&["only"], "x"), vec!["only"]);
    }

    #[test]
    fn test_round_seed_advances() {
        let mut seed = RoundSeed::new("bereshit:puzzle");
        assert_eq!(seed.current(), "bereshit:puzzle:0");
        assert_eq!(seed.advance(), "bereshit:puzzle:1");
        assert_eq!(seed.round(), 1);

        let tiles: Vec<u8> = (0..9).collect();
        assert_eq!(
            seeded_shuffle(&tiles, "bereshit:puzzle:0"),
            vec![5, 1, 0, 6, 3, 7, 4, 8, 2]
        );
        assert_eq!(
            seeded_shuffle(&tiles, "bereshit:puzzle:1"),
            vec![4, 3, 0, 7, 5, 1, 6, 2, 8]
        );
    }
}
