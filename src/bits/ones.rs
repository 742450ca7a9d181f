//! Iterators over set and clear bit positions of a [`Word`].

use core::iter::FusedIterator;

use super::word::Word;

/// Iterator over the positions of the 1-bits of a [`Word`], ascending.
///
/// Each step isolates the least set bit and clears it.
#[derive(Clone, Debug)]
pub struct Ones {
    remaining: Word,
}

impl Ones {
    #[inline]
    pub(crate) fn new(word: Word) -> Self {
        Self { remaining: word }
    }
}

impl Iterator for Ones {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        let pos = self.remaining.least_set_bit_index()?;
        self.remaining ^= self.remaining.least_set_bit();
        Some(pos)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Ones {}

impl FusedIterator for Ones {}

/// Iterator over the positions of the 0-bits of a [`Word`], ascending.
#[derive(Clone, Debug)]
pub struct Zeros {
    inner: Ones,
}

impl Zeros {
    #[inline]
    pub(crate) fn new(word: Word) -> Self {
        Self {
            inner: Ones::new(!word),
        }
    }
}

impl Iterator for Zeros {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Zeros {}

impl FusedIterator for Zeros {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ones_empty() {
        assert_eq!(Word::ZERO.ones().next(), None);
        assert_eq!(Word::ONES.zeros().next(), None);
    }

    #[test]
    fn test_ones_positions() {
        let w = Word::new(0x8000_0000_0000_0105);
        let ones: Vec<usize> = w.ones().collect();
        assert_eq!(ones, vec![0, 2, 8, 63]);
        assert_eq!(w.ones().len(), 4);
    }

    #[test]
    fn test_zeros_positions() {
        let w = Word::new(!0b1010u64);
        let zeros: Vec<usize> = w.zeros().collect();
        assert_eq!(zeros, vec![1, 3]);
    }

    #[test]
    fn test_ones_match_select() {
        let w = Word::new(0x1234_5678_9ABC_DEF0);
        for (k, pos) in w.ones().enumerate() {
            assert_eq!(w.select1(k), Some(pos));
        }
        for (k, pos) in w.zeros().enumerate() {
            assert_eq!(w.select0(k), Some(pos));
        }
    }

    #[test]
    fn test_size_hint_shrinks() {
        let mut it = Word::ONES.ones();
        assert_eq!(it.len(), 64);
        it.next();
        assert_eq!(it.len(), 63);
        assert_eq!(it.by_ref().count(), 63);
        assert_eq!(it.next(), None);
    }
}
