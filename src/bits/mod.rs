//! The single-word primitive with rank and select support.
//!
//! # Data Structures
//!
//! - [`Word`] - 64-bit binary string with O(1) popcount, rank and select
//! - [`Ones`] / [`Zeros`] - iterators over set/clear positions
//!
//! # Example
//!
//! ```
//! use broadword::bits::Word;
//!
//! let w = Word::new(0b1010_1010);
//! assert_eq!(w.rank1(4), 2);
//! assert_eq!(w.select1(1), Some(3));
//! assert_eq!(w.select0(0), Some(0));
//! ```

mod ones;
pub(crate) mod popcount;
mod word;

pub use ones::{Ones, Zeros};
pub use popcount::{popcount_word, popcount_word_swar, popcount_words};
pub use word::Word;
