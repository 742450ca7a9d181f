//! Broadword (SWAR) kernels on 64-bit words.
//!
//! These operate on eight byte lanes packed in one `u64`, following Vigna,
//! "Broadword Implementation of Rank/Select Queries" (WEA 2008). Nothing here
//! loops or branches on data; the only conditionals clamp `k` and the result.

/// Repeating `01` pattern: mask for 2-bit counters.
pub const LOWERS2: u64 = 0x5555_5555_5555_5555;

/// Repeating `0011` pattern: mask for 4-bit counters.
pub const LOWERS4: u64 = 0x3333_3333_3333_3333;

/// Repeating `00001111` pattern: mask for byte counters.
pub const LOWERS8: u64 = 0x0F0F_0F0F_0F0F_0F0F;

/// Constant with 1 in each byte's LSB position.
pub const L8: u64 = 0x0101_0101_0101_0101;

/// Constant with 1 in each byte's MSB position.
pub const H8: u64 = 0x8080_8080_8080_8080;

/// Lane `i` holds `1 << i`: labels each lane with the bit of a byte it tests.
pub const INCR8: u64 = 0x8040_2010_0804_0201;

/// Sentinel returned by the raw select kernels when the bit does not exist.
pub const NOT_FOUND: u32 = 64;

/// Per-byte popcounts: lane `i` holds the number of ones in byte `i` of `x`.
#[inline]
pub const fn byte_counts(x: u64) -> u64 {
    let t = x.wrapping_sub((x >> 1) & LOWERS2);
    let t = (t & LOWERS4) + ((t >> 2) & LOWERS4);
    (t + (t >> 4)) & LOWERS8
}

/// Lane-wise `x <= y` on bytes below 128.
///
/// Returns a word with the MSB of lane `i` set iff `x[i] <= y[i]`.
#[inline]
pub const fn leq8(x: u64, y: u64) -> u64 {
    (((y | H8).wrapping_sub(x & !H8)) ^ x ^ y) & H8
}

/// Lane-wise `x != 0`.
///
/// Returns a word with the MSB of lane `i` set iff `x[i]` is non-zero.
#[inline]
pub const fn nonzero8(x: u64) -> u64 {
    (x | (x | H8).wrapping_sub(L8)) & H8
}

/// Select the k-th set bit (0-indexed) in a 64-bit word.
///
/// Returns the bit position (0-63), or [`NOT_FOUND`] (64) if there are fewer
/// than k+1 set bits.
///
/// Constant time: byte-lane cumulative popcounts locate the target byte with
/// one parallel comparison against `k`, then a second comparison against the
/// spread bits of that byte locates the bit.
#[inline]
pub const fn select_in_word(x: u64, k: u32) -> u32 {
    // Lanes must stay below 128 for leq8.
    let k = (if k > 64 { 64 } else { k }) as u64;

    // Lane i = ones in bytes 0..=i.
    let sums = byte_counts(x).wrapping_mul(L8);

    // Lanes with sums <= k lie wholly before the target; eight of them is
    // the not-found encoding (place == 64).
    let place = ((leq8(sums, k.wrapping_mul(L8)) >> 7).wrapping_mul(L8) >> 53) & !7;

    // Ones before the target byte. Shifts wrap so place == 64 stays defined.
    let before = (sums << 8).wrapping_shr(place as u32) & 0xFF;
    let byte_rank = k.wrapping_sub(before);

    let spread = (x.wrapping_shr(place as u32) & 0xFF).wrapping_mul(L8) & INCR8;
    let bit_sums = (nonzero8(spread) >> 7).wrapping_mul(L8);

    let offset = (leq8(bit_sums, byte_rank.wrapping_mul(L8)) >> 7).wrapping_mul(L8) >> 56;

    let pos = place as u32 + offset as u32;
    if pos > NOT_FOUND {
        NOT_FOUND
    } else {
        pos
    }
}

/// Select the k-th clear bit (0-indexed) in a 64-bit word.
///
/// Returns the bit position (0-63), or [`NOT_FOUND`] (64).
#[inline]
pub const fn select_zero_in_word(x: u64, k: u32) -> u32 {
    select_in_word(!x, k)
}

/// Select using CTZ (count trailing zeros) loop.
///
/// O(k). Serves as the reference the broadword kernel is checked and
/// benchmarked against.
#[inline]
pub fn select_in_word_ctz(x: u64, k: u32) -> u32 {
    let mut val = x;
    let mut remaining = k;

    loop {
        if val == 0 {
            return NOT_FOUND;
        }
        let t = val.trailing_zeros();
        if remaining == 0 {
            return t;
        }
        remaining -= 1;
        val &= val - 1; // Clear lowest set bit
    }
}
