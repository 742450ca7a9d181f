//! Binary serialization of word slices.
//!
//! Words are stored in native byte order, 8 bytes each, so a slice of
//! [`Word`]s can be written out without copying. Reading back copies into an
//! owned `Vec` to avoid alignment requirements on the input, unless the
//! caller opts into the zero-copy [`try_cast_bytes`].
//!
//! ```
//! use broadword::binary::{bytes_to_words, words_to_bytes};
//! use broadword::Word;
//!
//! let words = [Word::new(5), Word::ONES];
//! let bytes = words_to_bytes(&words);
//! assert_eq!(bytes.len(), 16);
//! assert_eq!(bytes_to_words(bytes), words);
//! ```

use alloc::vec::Vec;

use crate::bits::Word;

const WORD_BYTES: usize = core::mem::size_of::<Word>();

/// View words as their raw bytes.
#[inline]
pub fn words_to_bytes(words: &[Word]) -> &[u8] {
    bytemuck::cast_slice(words)
}

/// Copy bytes into owned words.
///
/// # Panics
///
/// Panics if `bytes.len()` is not a multiple of 8.
pub fn bytes_to_words(bytes: &[u8]) -> Vec<Word> {
    match try_bytes_to_words(bytes) {
        Some(words) => words,
        None => panic!("byte length {} must be a multiple of 8", bytes.len()),
    }
}

/// Copy bytes into owned words, or `None` if the length is not a multiple of 8.
pub fn try_bytes_to_words(bytes: &[u8]) -> Option<Vec<Word>> {
    if bytes.len() % WORD_BYTES != 0 {
        return None;
    }
    Some(
        bytes
            .chunks_exact(WORD_BYTES)
            .map(bytemuck::pod_read_unaligned::<Word>)
            .collect(),
    )
}

/// Reinterpret bytes as words without copying.
///
/// Returns `None` if the length is not a multiple of 8 or the slice is not
/// 8-byte aligned.
#[inline]
pub fn try_cast_bytes(bytes: &[u8]) -> Option<&[Word]> {
    bytemuck::try_cast_slice(bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_size() {
        assert_eq!(WORD_BYTES, 8);
    }

    #[test]
    fn test_native_order() {
        let words = [Word::new(0x0102_0304_0506_0708)];
        assert_eq!(words_to_bytes(&words), &0x0102_0304_0506_0708u64.to_ne_bytes());
    }

    #[test]
    fn test_try_cast_aligned() {
        let words = [Word::new(1), Word::new(2), Word::new(3)];
        let bytes = words_to_bytes(&words);
        assert_eq!(try_cast_bytes(bytes), Some(&words[..]));
    }

    #[test]
    fn test_try_cast_bad_length() {
        let words = [Word::new(1), Word::new(2)];
        let bytes = words_to_bytes(&words);
        assert_eq!(try_cast_bytes(&bytes[..12]), None);
    }

    #[test]
    fn test_unaligned_copy() {
        let words = [Word::new(0xDEAD_BEEF), Word::ONES];
        let mut buf = vec![0u8; 17];
        buf[1..].copy_from_slice(words_to_bytes(&words));
        assert_eq!(try_bytes_to_words(&buf[1..]), Some(words.to_vec()));
    }
}
