//! Random word generators for testing and benchmarking.
//!
//! All generators are driven by `ChaCha8Rng` so a seed reproduces the same
//! words on every platform.

use broadword::Word;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Bit-distribution patterns for generated words.
#[derive(Debug, Clone, Copy)]
pub enum WordPattern {
    /// Each bit set independently with the given probability
    Uniform,
    /// Roughly one set bit per word (stresses select near not-found)
    Sparse,
    /// Roughly one clear bit per word (stresses select0)
    Dense,
    /// Runs of ones and zeros (stresses byte-boundary handling in select)
    Runs,
}

/// Generate `count` words following `pattern`.
///
/// `density` is the probability of a set bit for [`WordPattern::Uniform`] and
/// is ignored otherwise.
pub fn generate_words(count: usize, pattern: WordPattern, density: f64, seed: u64) -> Vec<Word> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| match pattern {
            WordPattern::Uniform => uniform(&mut rng, density),
            WordPattern::Sparse => uniform(&mut rng, 1.0 / 64.0),
            WordPattern::Dense => uniform(&mut rng, 63.0 / 64.0),
            WordPattern::Runs => runs(&mut rng),
        })
        .collect()
}

fn uniform(rng: &mut ChaCha8Rng, density: f64) -> Word {
    (0..Word::BITS).fold(Word::ZERO, |w, i| {
        if rng.gen_bool(density) {
            w.set(i)
        } else {
            w
        }
    })
}

fn runs(rng: &mut ChaCha8Rng) -> Word {
    let mut w = Word::ZERO;
    let mut pos = 0;
    let mut ones = rng.gen_bool(0.5);
    while pos < Word::BITS {
        let len = rng.gen_range(1..=16).min(Word::BITS - pos);
        if ones {
            for i in pos..pos + len {
                w = w.set(i);
            }
        }
        pos += len;
        ones = !ones;
    }
    w
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_reproducible() {
        let a = generate_words(16, WordPattern::Runs, 0.5, 9);
        let b = generate_words(16, WordPattern::Runs, 0.5, 9);
        assert_eq!(a, b);
    }

    #[test]
    fn test_density_extremes() {
        assert!(generate_words(8, WordPattern::Uniform, 0.0, 1)
            .iter()
            .all(|w| w.is_zero()));
        assert!(generate_words(8, WordPattern::Uniform, 1.0, 1)
            .iter()
            .all(|&w| w == Word::ONES));
    }

    #[test]
    fn test_sparse_and_dense_skew() {
        let sparse: u32 = generate_words(256, WordPattern::Sparse, 0.5, 3)
            .iter()
            .map(|w| w.count_ones())
            .sum();
        let dense: u32 = generate_words(256, WordPattern::Dense, 0.5, 3)
            .iter()
            .map(|w| w.count_ones())
            .sum();
        assert!(sparse < 256 * 8, "sparse={}", sparse);
        assert!(dense > 256 * 56, "dense={}", dense);
    }
}
