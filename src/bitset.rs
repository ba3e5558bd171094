//! Small word-packed bit set.
//!
//! Used for the "consumed" flags of one tabulation rank and for the rows of the
//! coverage chart, where a row is indexed by the position of a minterm in the
//! sorted list of minterms still to be covered.

/// A bit set backed by a vector of u64 words.
///
/// The set grows when a bit beyond the current capacity is inserted.
#[derive(Debug, Clone, Default)]
pub struct BitSet {
    words: Vec<u64>,
    /// Number of set bits (cached for O(1) len())
    count: usize,
}

impl BitSet {
    const BITS_PER_WORD: usize = 64;

    /// Creates an empty bit set with room for `capacity` bits.
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity.div_ceil(Self::BITS_PER_WORD)],
            count: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    fn word_and_bit(index: usize) -> (usize, usize) {
        (index / Self::BITS_PER_WORD, index % Self::BITS_PER_WORD)
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        let (word_idx, bit_idx) = Self::word_and_bit(index);
        match self.words.get(word_idx) {
            Some(word) => word & (1u64 << bit_idx) != 0,
            None => false,
        }
    }

    /// Sets the bit at the given index. Returns true if the bit was not previously set.
    #[inline]
    pub fn insert(&mut self, index: usize) -> bool {
        let (word_idx, bit_idx) = Self::word_and_bit(index);
        if word_idx >= self.words.len() {
            self.words.resize(word_idx + 1, 0);
        }
        let mask = 1u64 << bit_idx;
        let was_clear = self.words[word_idx] & mask == 0;
        if was_clear {
            self.words[word_idx] |= mask;
            self.count += 1;
        }
        was_clear
    }

    /// Adds every bit of `other` to `self`.
    pub fn union_with(&mut self, other: &BitSet) {
        if other.words.len() > self.words.len() {
            self.words.resize(other.words.len(), 0);
        }
        for (dst, src) in self.words.iter_mut().zip(&other.words) {
            *dst |= *src;
        }
        self.count = self.words.iter().map(|w| w.count_ones() as usize).sum();
    }

    /// Clears all bits, keeping the capacity.
    pub fn clear(&mut self) {
        self.words.fill(0);
        self.count = 0;
    }
}

impl FromIterator<usize> for BitSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut bs = BitSet::default();
        for index in iter {
            bs.insert(index);
        }
        bs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let bs = BitSet::new(10);
        assert!(bs.is_empty());
        assert!(!bs.contains(3));
        assert!(!bs.contains(1000));
    }

    #[test]
    fn test_insert_contains() {
        let mut bs = BitSet::new(100);
        assert!(bs.insert(42));
        assert!(!bs.insert(42));
        assert!(bs.contains(42));
        assert_eq!(bs.len(), 1);
    }

    #[test]
    fn test_auto_grow() {
        let mut bs = BitSet::default();
        bs.insert(130);
        assert!(bs.contains(130));
        assert!(!bs.contains(129));
        assert_eq!(bs.len(), 1);
    }

    #[test]
    fn test_union_with() {
        let mut a: BitSet = [1, 5, 64].into_iter().collect();
        let b: BitSet = [5, 6, 200].into_iter().collect();
        a.union_with(&b);
        assert_eq!(a.len(), 5);
        for i in [1, 5, 6, 64, 200] {
            assert!(a.contains(i));
        }
        assert!(!a.contains(2));
    }

    #[test]
    fn test_clear() {
        let mut bs: BitSet = [0, 63, 64].into_iter().collect();
        bs.clear();
        assert!(bs.is_empty());
        assert!(!bs.contains(63));
    }
}
