//! Internal utilities for bit manipulation.
//!
//! This module contains the broadword kernels and constant tables used by
//! [`Word`](crate::Word). Most users should not need to use these directly.

pub(crate) mod broadword;
pub(crate) mod table;

pub use broadword::{select_in_word, select_in_word_ctz, select_zero_in_word};
