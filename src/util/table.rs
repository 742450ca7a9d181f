//! Precomputed per-position masks.
//!
//! Every table has 65 entries so that `i + 1` style indexing (as used by
//! rank) stays in range for `i` in `0..64`. All tables are built by constant
//! evaluation; there is no runtime initialization.

/// Number of entries in each table (bit positions `0..=64`).
pub const TABLE_LEN: usize = 65;

/// `BIT[i]` has a single 1 at position `i`.
///
/// `BIT[64]` is 0: the shift falls off the word.
pub static BIT: [u64; TABLE_LEN] = {
    let mut table = [0u64; TABLE_LEN];
    let mut i = 0;
    while i < 64 {
        table[i] = 1u64 << i;
        i += 1;
    }
    table
};

/// `NOT_BIT[i]` has a single 0 at position `i`.
pub static NOT_BIT: [u64; TABLE_LEN] = {
    let mut table = [0u64; TABLE_LEN];
    let mut i = 0;
    while i < TABLE_LEN {
        table[i] = !BIT[i];
        i += 1;
    }
    table
};

/// `LOW_MASK[i]` has 1s in its `i` least significant bits.
pub static LOW_MASK: [u64; TABLE_LEN] = {
    let mut table = [0u64; TABLE_LEN];
    let mut i = 0;
    while i < 64 {
        table[i] = (1u64 << i) - 1;
        i += 1;
    }
    table[64] = u64::MAX;
    table
};

/// `HIGH_MASK[i]` has 1s in positions `i..64`, i.e. the high `64 - i` bits.
///
/// Equal to `LOW_MASK[64 - i] << i` and to `!LOW_MASK[i]`.
pub static HIGH_MASK: [u64; TABLE_LEN] = {
    let mut table = [0u64; TABLE_LEN];
    let mut i = 0;
    while i < TABLE_LEN {
        table[i] = !LOW_MASK[i];
        i += 1;
    }
    table
};
