//! The 64-bit binary string value type.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use bytemuck::{Pod, Zeroable};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::ones::{Ones, Zeros};
use super::popcount::popcount_word;
use crate::util::broadword::{select_in_word, NOT_FOUND};
use crate::util::table::{BIT, HIGH_MASK, LOW_MASK, NOT_BIT};

/// A binary string of exactly 64 bits.
///
/// Bit 0 is the least significant bit, bit 63 the most significant. `Word` is
/// a plain value: every operation that looks like a mutation returns a new
/// `Word` and leaves `self` untouched.
///
/// # Preconditions
///
/// Bit indices passed to [`get`](Self::get), [`set`](Self::set),
/// [`clear`](Self::clear), [`flip`](Self::flip), [`rank1`](Self::rank1) and
/// [`rank0`](Self::rank0) must be in `0..64`. This is checked only by
/// `debug_assert!`; release builds do not validate indices and an
/// out-of-range index yields an unspecified result or a panic from the
/// underlying shift/table access.
///
/// # Example
///
/// ```
/// use broadword::Word;
///
/// let w = Word::new(0b101);
/// assert_eq!(w.count_ones(), 2);
/// assert_eq!(w.rank1(2), 2);
/// assert_eq!(w.select1(1), Some(2));
/// assert_eq!(w.select1(2), None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[repr(transparent)]
pub struct Word(u64);

impl Word {
    /// Number of bits in a word.
    pub const BITS: usize = 64;

    /// The all-zero word.
    pub const ZERO: Word = Word(0);

    /// The all-ones word.
    pub const ONES: Word = Word(u64::MAX);

    /// Wrap a raw `u64`.
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The raw `u64` value.
    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns `true` if no bit is set.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    // =========================================================================
    // Bit access
    // =========================================================================

    /// Returns the bit at position `i`.
    #[inline]
    pub fn get(self, i: usize) -> bool {
        self.bit(i) != 0
    }

    /// Returns the bit at position `i` as `0` or `1`.
    #[inline]
    pub fn bit(self, i: usize) -> u64 {
        debug_assert!(i < Self::BITS, "bit index {} out of range", i);
        (self.0 >> i) & BIT[0]
    }

    /// Returns a copy with bit `i` forced to 1.
    #[inline]
    pub fn set(self, i: usize) -> Self {
        debug_assert!(i < Self::BITS, "bit index {} out of range", i);
        Self(self.0 | BIT[i])
    }

    /// Returns a copy with bit `i` forced to 0.
    #[inline]
    pub fn clear(self, i: usize) -> Self {
        debug_assert!(i < Self::BITS, "bit index {} out of range", i);
        Self(self.0 & NOT_BIT[i])
    }

    /// Returns a copy with bit `i` inverted.
    #[inline]
    pub fn flip(self, i: usize) -> Self {
        debug_assert!(i < Self::BITS, "bit index {} out of range", i);
        Self(self.0 ^ BIT[i])
    }

    // =========================================================================
    // Population count
    // =========================================================================

    /// Number of 1-bits.
    #[inline]
    pub const fn count_ones(self) -> u32 {
        popcount_word(self.0)
    }

    /// Number of 0-bits.
    #[inline]
    pub const fn count_zeros(self) -> u32 {
        Self::BITS as u32 - self.count_ones()
    }

    /// Number of bits whose value equals `b`.
    #[inline]
    pub const fn count(self, b: bool) -> u32 {
        // All zeros for b = 1, all ones for b = 0.
        let mask = (b as u64).wrapping_sub(1);
        popcount_word(self.0 ^ mask)
    }

    // =========================================================================
    // Rank
    // =========================================================================

    /// Number of 1-bits in positions `0..=i`.
    #[inline]
    pub fn rank1(self, i: usize) -> usize {
        debug_assert!(i < Self::BITS, "rank index {} out of range", i);
        popcount_word(self.0 & LOW_MASK[i + 1]) as usize
    }

    /// Number of 0-bits in positions `0..=i`.
    ///
    /// Positions above `i` are forced to 1 so that only the prefix contributes
    /// zeros.
    #[inline]
    pub fn rank0(self, i: usize) -> usize {
        debug_assert!(i < Self::BITS, "rank index {} out of range", i);
        Self(self.0 | HIGH_MASK[i + 1]).count_zeros() as usize
    }

    // =========================================================================
    // Least set bit
    // =========================================================================

    /// A word with only the lowest set bit of `self`, or zero if `self` is zero.
    #[inline]
    pub const fn least_set_bit(self) -> Self {
        Self((self.0.wrapping_sub(1) ^ self.0) & self.0)
    }

    /// Position of the lowest set bit, or `None` if `self` is zero.
    #[inline]
    pub const fn least_set_bit_index(self) -> Option<usize> {
        if self.0 == 0 {
            return None;
        }
        // (w - 1) ^ w is a run of ones over positions 0..=answer.
        Some(popcount_word(self.0.wrapping_sub(1) ^ self.0) as usize - 1)
    }

    // =========================================================================
    // Select
    // =========================================================================

    /// Position of the k-th 1-bit (0-indexed).
    ///
    /// Returns `None` if fewer than `k+1` ones exist.
    #[inline]
    pub fn select1(self, k: usize) -> Option<usize> {
        let k = u32::try_from(k).unwrap_or(u32::MAX);
        let pos = select_in_word(self.0, k);
        if pos < NOT_FOUND {
            Some(pos as usize)
        } else {
            None
        }
    }

    /// Position of the k-th 0-bit (0-indexed).
    ///
    /// Returns `None` if fewer than `k+1` zeros exist.
    #[inline]
    pub fn select0(self, k: usize) -> Option<usize> {
        (!self).select1(k)
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Positions of the 1-bits, in ascending order.
    #[inline]
    pub fn ones(self) -> Ones {
        Ones::new(self)
    }

    /// Positions of the 0-bits, in ascending order.
    #[inline]
    pub fn zeros(self) -> Zeros {
        Zeros::new(self)
    }
}

impl From<u64> for Word {
    #[inline]
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Word> for u64 {
    #[inline]
    fn from(word: Word) -> Self {
        word.0
    }
}

impl Not for Word {
    type Output = Word;

    #[inline]
    fn not(self) -> Word {
        Word(!self.0)
    }
}

macro_rules! impl_bit_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl $trait for Word {
            type Output = Word;

            #[inline]
            fn $method(self, rhs: Word) -> Word {
                Word(self.0 $op rhs.0)
            }
        }

        impl $assign_trait for Word {
            #[inline]
            fn $assign_method(&mut self, rhs: Word) {
                self.0 = self.0 $op rhs.0;
            }
        }
    };
}

impl_bit_op!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
impl_bit_op!(BitOr, bitor, BitOrAssign, bitor_assign, |);
impl_bit_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);
