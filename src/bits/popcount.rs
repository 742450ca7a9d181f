//! Population count kernels.
//!
//! The default is the portable SWAR fold: 2-bit, 4-bit, then byte counters,
//! summed horizontally by one multiply. With the `hw-popcount` feature the
//! word kernel uses `u64::count_ones()` instead, which lowers to POPCNT/CNT
//! where the target has it.

use crate::util::broadword::{byte_counts, L8};

/// Count 1-bits in a single 64-bit word.
#[cfg(not(feature = "hw-popcount"))]
#[inline]
pub const fn popcount_word(x: u64) -> u32 {
    popcount_word_swar(x)
}

/// Count 1-bits in a single 64-bit word.
#[cfg(feature = "hw-popcount")]
#[inline]
pub const fn popcount_word(x: u64) -> u32 {
    x.count_ones()
}

/// Portable SWAR popcount, independent of the feature selection.
#[inline]
pub const fn popcount_word_swar(x: u64) -> u32 {
    (byte_counts(x).wrapping_mul(L8) >> 56) as u32
}

/// Count 1-bits in a slice of words.
#[inline]
pub fn popcount_words(words: &[u64]) -> usize {
    words.iter().map(|&w| popcount_word(w) as usize).sum()
}
