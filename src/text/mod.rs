//! Textual form of a [`Word`]: 64 binary digits, most significant bit first.
//!
//! ```
//! use broadword::text::ParseWordError;
//! use broadword::Word;
//!
//! let w: Word = "101".parse().unwrap();
//! assert_eq!(w.value(), 5);
//! assert_eq!(w.to_string().len(), 64);
//! assert!(w.to_string().ends_with("0101"));
//!
//! assert_eq!(
//!     Word::parse("10x"),
//!     Err(ParseWordError::InvalidDigit { offset: 2, byte: b'x' })
//! );
//! ```
//!
//! Parsing accepts any non-empty run of `0`/`1` whose value fits in 64 bits,
//! so leading zeros beyond 64 digits are fine. Signs, `0b` prefixes,
//! separators and whitespace are rejected.

use core::fmt;
use core::str::FromStr;

use alloc::string::String;

use crate::bits::Word;

/// Error returned when text is not a valid base-2 numeral for a 64-bit word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseWordError {
    /// The input was empty.
    Empty,
    /// A byte other than `0` or `1` was found.
    InvalidDigit {
        /// Byte offset of the offending byte (0-indexed).
        offset: usize,
        /// The offending byte.
        byte: u8,
    },
    /// The value does not fit in 64 bits.
    Overflow,
}

impl fmt::Display for ParseWordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "invalid word format: empty input"),
            Self::InvalidDigit { offset, byte } => write!(
                f,
                "invalid word format: byte {:#04x} at offset {} is not a binary digit",
                byte, offset
            ),
            Self::Overflow => write!(f, "invalid word format: value exceeds 64 bits"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseWordError {}

impl Word {
    /// Parse a base-2 numeral, most significant digit first.
    pub fn parse(s: &str) -> Result<Word, ParseWordError> {
        let bytes = s.as_bytes();
        if bytes.is_empty() {
            return Err(ParseWordError::Empty);
        }

        let mut value = 0u64;
        for (offset, &byte) in bytes.iter().enumerate() {
            let digit = match byte {
                b'0' => 0,
                b'1' => 1,
                _ => return Err(ParseWordError::InvalidDigit { offset, byte }),
            };
            if value >> 63 != 0 {
                return Err(ParseWordError::Overflow);
            }
            value = (value << 1) | digit;
        }

        Ok(Word::new(value))
    }

    /// The 64-character binary string, most significant bit first.
    pub fn to_binary_string(self) -> String {
        let mut s = String::with_capacity(Self::BITS);
        for i in (0..Self::BITS).rev() {
            s.push(if self.get(i) { '1' } else { '0' });
        }
        s
    }
}

impl FromStr for Word {
    type Err = ParseWordError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Word::parse(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:064b}", self.value())
    }
}

impl fmt::Binary for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.value(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_width() {
        assert_eq!(Word::ZERO.to_string(), "0".repeat(64));
        assert_eq!(Word::ONES.to_string(), "1".repeat(64));
        let s = Word::new(5).to_string();
        assert_eq!(s.len(), 64);
        assert!(s.ends_with("101"));
        assert!(s[..61].bytes().all(|b| b == b'0'));
    }

    #[test]
    fn test_format_msb_first() {
        let s = Word::new(1 << 63).to_string();
        assert_eq!(s.as_bytes()[0], b'1');
        assert_eq!(s[1..], "0".repeat(63));
    }

    #[test]
    fn test_to_binary_string_matches_display() {
        for v in [0u64, 1, 5, u64::MAX, 0xDEAD_BEEF_CAFE_BABE] {
            let w = Word::new(v);
            assert_eq!(w.to_binary_string(), w.to_string());
        }
    }

    #[test]
    fn test_binary_fmt() {
        assert_eq!(format!("{:b}", Word::new(5)), "101");
        assert_eq!(format!("{:#010b}", Word::new(5)), "0b00000101");
    }

    #[test]
    fn test_parse_short_and_full() {
        assert_eq!(Word::parse("0"), Ok(Word::ZERO));
        assert_eq!(Word::parse("101"), Ok(Word::new(5)));
        assert_eq!(Word::parse(&"1".repeat(64)), Ok(Word::ONES));
    }

    #[test]
    fn test_parse_leading_zeros_beyond_width() {
        let s = format!("{}{}", "0".repeat(10), "1".repeat(64));
        assert_eq!(Word::parse(&s), Ok(Word::ONES));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Word::parse(""), Err(ParseWordError::Empty));
    }

    #[test]
    fn test_parse_invalid_digit() {
        assert_eq!(
            Word::parse("0120"),
            Err(ParseWordError::InvalidDigit { offset: 2, byte: b'2' })
        );
        assert_eq!(
            Word::parse("+101"),
            Err(ParseWordError::InvalidDigit { offset: 0, byte: b'+' })
        );
        assert_eq!(
            Word::parse("0b101"),
            Err(ParseWordError::InvalidDigit { offset: 1, byte: b'b' })
        );
        assert!(matches!(
            Word::parse(" 1"),
            Err(ParseWordError::InvalidDigit { offset: 0, .. })
        ));
        assert!(matches!(
            Word::parse("1_0"),
            Err(ParseWordError::InvalidDigit { offset: 1, .. })
        ));
    }

    #[test]
    fn test_parse_overflow() {
        let s = format!("1{}", "0".repeat(64));
        assert_eq!(Word::parse(&s), Err(ParseWordError::Overflow));
    }

    #[test]
    fn test_from_str() {
        let w: Word = "1000".parse().unwrap();
        assert_eq!(w.value(), 8);
        assert!("abc".parse::<Word>().is_err());
    }

    #[test]
    fn test_roundtrip() {
        for v in [0u64, 1, 5, u64::MAX, 1 << 63, 0x0123_4567_89AB_CDEF] {
            let w = Word::new(v);
            assert_eq!(Word::parse(&w.to_string()), Ok(w));
        }
    }

    #[test]
    fn test_error_display() {
        let msg = ParseWordError::InvalidDigit { offset: 3, byte: b'x' }.to_string();
        assert!(msg.contains("offset 3"), "{}", msg);
        assert!(ParseWordError::Overflow.to_string().contains("64 bits"));
    }
}
