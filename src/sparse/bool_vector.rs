//! Dense, word-packed boolean vector.
//!
//! Used for frontier / visited / colored masks by the matrix engines. Writes
//! happen between kernel calls on a single thread, so plain words suffice.

/// A fixed-length bit vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoolVector {
    bits: usize,
    words: Vec<usize>,
    ones: usize,
}

const WORD_BITS: usize = usize::BITS as usize;

#[inline(always)]
fn bit_word_mask(bit: usize) -> (usize, usize) {
    (bit / WORD_BITS, 1usize << (bit % WORD_BITS))
}

impl BoolVector {
    /// Creates a vector of `bits` cleared entries.
    pub fn new(bits: usize) -> Self {
        Self {
            bits,
            words: vec![0; bits.div_ceil(WORD_BITS)],
            ones: 0,
        }
    }

    /// Creates a vector of `bits` entries, all set.
    pub fn full(bits: usize) -> Self {
        let mut v = Self::new(bits);
        for i in 0..bits {
            v.set(i);
        }
        v
    }

    /// Creates a vector with exactly the given entries set.
    ///
    /// # Panics
    /// Panics if an index is `>= bits`.
    pub fn from_indices(bits: usize, indices: impl IntoIterator<Item = usize>) -> Self {
        let mut v = Self::new(bits);
        for i in indices {
            v.set(i);
        }
        v
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits
    }

    /// Returns `true` if the vector has no entries at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Number of set entries.
    #[inline]
    pub fn count_ones(&self) -> usize {
        self.ones
    }

    /// Returns `true` if at least one entry is set.
    #[inline]
    pub fn any(&self) -> bool {
        self.ones != 0
    }

    /// Returns whether entry `i` is set.
    ///
    /// # Panics
    /// Panics if `i >= len()`.
    #[inline(always)]
    pub fn get(&self, i: usize) -> bool {
        assert!(i < self.bits, "index {i} out of bounds for {} bits", self.bits);
        let (word, mask) = bit_word_mask(i);
        self.words[word] & mask != 0
    }

    /// Sets entry `i`, returning `true` iff it was previously cleared.
    ///
    /// # Panics
    /// Panics if `i >= len()`.
    #[inline(always)]
    pub fn set(&mut self, i: usize) -> bool {
        assert!(i < self.bits, "index {i} out of bounds for {} bits", self.bits);
        let (word, mask) = bit_word_mask(i);
        let fresh = self.words[word] & mask == 0;
        self.words[word] |= mask;
        self.ones += usize::from(fresh);
        fresh
    }

    /// Clears entry `i`, returning `true` iff it was previously set.
    ///
    /// # Panics
    /// Panics if `i >= len()`.
    #[inline(always)]
    pub fn unset(&mut self, i: usize) -> bool {
        assert!(i < self.bits, "index {i} out of bounds for {} bits", self.bits);
        let (word, mask) = bit_word_mask(i);
        let was_set = self.words[word] & mask != 0;
        self.words[word] &= !mask;
        self.ones -= usize::from(was_set);
        was_set
    }

    /// Clears every entry.
    pub fn clear(&mut self) {
        self.words.iter_mut().for_each(|w| *w = 0);
        self.ones = 0;
    }

    /// Iterates over the indices of set entries in increasing order.
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(wi, &word)| {
            let mut w = word;
            core::iter::from_fn(move || {
                if w == 0 {
                    return None;
                }
                let tz = w.trailing_zeros() as usize;
                w &= w - 1;
                Some(wi * WORD_BITS + tz)
            })
        })
    }
}
