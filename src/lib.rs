//! # Broadword
//!
//! Branch-free primitives on a single 64-bit word.
//!
//! [`Word`] is a 64-bit binary string with population count, per-bit access,
//! rank and select, each computed in a constant number of word operations
//! using broadword (SWAR) tricks. It is the building block a succinct
//! bitvector calls once it has narrowed a query down to one word.
//!
//! ## Module Organization
//!
//! - [`bits`] - The [`Word`] type, popcount kernels and bit iterators
//! - [`tables`] - Per-position masks built at compile time
//! - [`text`] - 64-digit binary text form and its parser
//! - [`binary`] - Byte serialization of word slices
//!
//! ## Quick Start
//!
//! ```
//! use broadword::Word;
//!
//! let w: Word = "1010".parse().unwrap();
//!
//! // Rank counts positions 0..=i
//! assert_eq!(w.rank1(3), 2);
//! assert_eq!(w.rank0(3), 2);
//!
//! // Select finds the k-th set bit (0-indexed)
//! assert_eq!(w.select1(0), Some(1));
//! assert_eq!(w.select1(2), None);
//! ```
//!
//! ## Features
//!
//! - `std` (default) - `std::error::Error` for [`text::ParseWordError`]
//! - `hw-popcount` - Use `u64::count_ones()` instead of the portable SWAR kernel
//! - `serde` - Serialization of [`Word`] as its `u64` value
//! - `cli` - The `broadword` command-line tool

// Use no_std unless std feature is enabled or we're in test mode
#![cfg_attr(not(any(test, feature = "std")), no_std)]

// When using no_std, we need to explicitly link the alloc crate
#[cfg(not(any(test, feature = "std")))]
extern crate alloc;

// When using std, re-export alloc types from std for compatibility
#[cfg(any(test, feature = "std"))]
extern crate std as alloc;

/// The word type and its popcount/rank/select operations.
pub mod bits;

/// Internal utilities (not part of public API).
pub(crate) mod util;

/// Binary serialization utilities.
pub mod binary;

/// Binary text form of a word.
pub mod text;

/// Per-position constant masks.
///
/// Each table has 65 entries, indexed by bit position `0..=64`.
pub mod tables {
    pub use crate::util::table::{BIT, HIGH_MASK, LOW_MASK, NOT_BIT, TABLE_LEN};
}

// Core types
pub use bits::{popcount_word, popcount_words, Ones, Word, Zeros};
pub use text::ParseWordError;
pub use util::broadword::NOT_FOUND;
pub use util::{select_in_word, select_in_word_ctz, select_zero_in_word};
