//! Sets of natural numbers over a fixed universe `[0, max]`, stored as packed `u64` words.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not, Sub};

/// Type of a single storage word
type Word = u64;

/// Number of elements covered by one word
const WORD_BITS: usize = Word::BITS as usize;

/// How many members `Display` renders before truncating
const DISPLAY_LIMIT: usize = 30;

/// Index of the word which holds bit `x`
const fn word_index(x: usize) -> usize {
    x / WORD_BITS
}

/// Position of bit `x` inside its word
const fn bit_offset(x: usize) -> usize {
    x % WORD_BITS
}

/// Full-width single bit mask for `x` within its word
const fn bit_mask(x: usize) -> Word {
    1 << bit_offset(x)
}

/// Number of words needed to cover `[0, max]`
const fn word_count(max: usize) -> usize {
    word_index(max) + 1
}

/// Mask of the bits in the last word which belong to `[0, max]`.
/// Everything above it is padding and has to stay zero.
const fn padding_mask(max: usize) -> Word {
    let used = bit_offset(max) + 1;
    if used == WORD_BITS {
        Word::MAX
    } else {
        (1 << used) - 1
    }
}

/// A set of natural numbers in the universe `[0, max]`.
///
/// The universe is fixed when the set is created. Numbers above `max` are never members:
/// adding them does nothing, and looking them up returns `false`.
///
/// Binary operations ([`union`](Self::union), [`intersect`](Self::intersect),
/// [`subtract`](Self::subtract)) return a new set over the larger of the two universes and
/// leave both operands untouched.
#[derive(Clone, Debug)]
pub struct BitSet {
    max: usize,
    buf: Vec<Word>,
    len: usize,
}

impl BitSet {
    /// Create an empty set over `[0, max]`. A `max` of zero is raised to one.
    #[must_use]
    pub fn new(max: usize) -> Self {
        let max = max.max(1);
        Self {
            max,
            buf: vec![0; word_count(max)],
            len: 0,
        }
    }

    /// Create a set over `[0, max]` holding every in-range number from `members`.
    pub fn from_members(max: usize, members: impl IntoIterator<Item = usize>) -> Self {
        let mut set = Self::new(max);
        set.extend(members);
        set
    }

    /// Build a set directly from words, then restore the padding and cardinality invariants
    fn from_words(max: usize, buf: Vec<Word>) -> Self {
        debug_assert_eq!(buf.len(), word_count(max));
        let mut set = Self { max, buf, len: 0 };
        set.mask_padding();
        set.recount();
        set
    }

    /// Largest number this set can hold
    #[must_use]
    pub fn max(&self) -> usize {
        self.max
    }

    /// Insert `x`. Returns `true` if the set changed.
    ///
    /// Numbers above [`max`](Self::max) are ignored.
    pub fn add(&mut self, x: usize) -> bool {
        if x > self.max {
            return false;
        }
        let word = &mut self.buf[word_index(x)];
        if *word & bit_mask(x) != 0 {
            return false;
        }
        *word |= bit_mask(x);
        self.len += 1;
        true
    }

    /// Remove `x`. Returns `false` if `x` was not a member (or is out of range), in which
    /// case nothing changes.
    pub fn delete(&mut self, x: usize) -> bool {
        if !self.find(x) {
            return false;
        }
        self.buf[word_index(x)] &= !bit_mask(x);
        self.len -= 1;
        true
    }

    /// Membership test, `false` for anything out of range
    #[must_use]
    pub fn find(&self, x: usize) -> bool {
        x <= self.max && self.buf[word_index(x)] & bit_mask(x) != 0
    }

    /// Same as [`find`](Self::find)
    #[must_use]
    pub fn contains(&self, x: usize) -> bool {
        self.find(x)
    }

    /// Remove every member, keeping the universe
    pub fn clear(&mut self) {
        self.buf.fill(0);
        self.len = 0;
    }

    /// Number of members
    #[must_use]
    pub fn size(&self) -> usize {
        self.len
    }

    /// Number of members
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if there are no members
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Recompute the cached cardinality from the words
    fn recount(&mut self) {
        self.len = self.buf.iter().map(|w| w.count_ones() as usize).sum();
    }

    /// Zero the bits past `max` in the last word
    fn mask_padding(&mut self) {
        if let Some(last) = self.buf.last_mut() {
            *last &= padding_mask(self.max);
        }
    }

    /// Every number in either set, over the larger universe.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let (wide, narrow) = if self.buf.len() >= other.buf.len() {
            (self, other)
        } else {
            (other, self)
        };
        // Words past the narrow operand's extent are copied from the wide one as they are
        let mut buf = wide.buf.clone();
        for (word, rhs) in buf.iter_mut().zip(&narrow.buf) {
            *word |= rhs;
        }
        Self::from_words(self.max.max(other.max), buf)
    }

    /// Every number in both sets, over the larger universe.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        let max = self.max.max(other.max);
        let mut buf = vec![0; word_count(max)];
        for ((word, lhs), rhs) in buf.iter_mut().zip(&self.buf).zip(&other.buf) {
            *word = lhs & rhs;
        }
        Self::from_words(max, buf)
    }

    /// Every number of `[0, max]` which is not in this set.
    #[must_use]
    pub fn complement(&self) -> Self {
        let buf = self.buf.iter().map(|w| !w).collect();
        Self::from_words(self.max, buf)
    }

    /// Members of this set which are not in `other`.
    ///
    /// Computed as `self ∩ other.complement()`. The complement only covers `other`'s own
    /// universe, so members of this set above `other.max()` are dropped as well.
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        self.intersect(&other.complement())
    }

    /// `true` if both sets have the same storage width and the same members.
    ///
    /// Sets whose universes need a different number of words are never equal, even when
    /// they hold the same numbers.
    #[must_use]
    pub fn equal(&self, other: &Self) -> bool {
        self.buf == other.buf
    }

    /// `true` if every member of `other` is a member of this set.
    ///
    /// Defined as `self ∪ other == self`, so it inherits the storage width rule of
    /// [`equal`](Self::equal).
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        self.union(other).equal(self)
    }

    /// `true` if every member of this set is a member of `other`.
    /// See [`is_superset`](Self::is_superset).
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        other.is_superset(self)
    }

    /// Members in ascending order
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            words: self.buf.iter().enumerate(),
            current: 0,
            base: 0,
            remaining: self.len,
        }
    }

    /// Members in ascending order, collected into a vector of exactly [`size`](Self::size)
    /// elements
    #[must_use]
    pub fn to_vec(&self) -> Vec<usize> {
        let mut members = Vec::with_capacity(self.len);
        members.extend(self.iter());
        members
    }
}

/// Ascending iterator over the members of a [`BitSet`]
pub struct Iter<'a> {
    words: std::iter::Enumerate<std::slice::Iter<'a, Word>>,
    current: Word,
    base: usize,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current == 0 {
            let (idx, word) = self.words.next()?;
            self.current = *word;
            self.base = idx * WORD_BITS;
        }
        let offset = self.current.trailing_zeros() as usize;
        // Drop the lowest set bit
        self.current &= self.current - 1;
        self.remaining -= 1;
        Some(self.base + offset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a BitSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Out of range numbers are skipped, like `add`
impl Extend<usize> for BitSet {
    fn extend<T: IntoIterator<Item = usize>>(&mut self, iter: T) {
        for x in iter {
            self.add(x);
        }
    }
}

impl PartialEq for BitSet {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Eq for BitSet {}

impl BitOr for &BitSet {
    type Output = BitSet;

    fn bitor(self, rhs: Self) -> BitSet {
        self.union(rhs)
    }
}

impl BitAnd for &BitSet {
    type Output = BitSet;

    fn bitand(self, rhs: Self) -> BitSet {
        self.intersect(rhs)
    }
}

impl Sub for &BitSet {
    type Output = BitSet;

    fn sub(self, rhs: Self) -> BitSet {
        self.subtract(rhs)
    }
}

impl Not for &BitSet {
    type Output = BitSet;

    fn not(self) -> BitSet {
        self.complement()
    }
}

/// Renders up to the first 30 members in braces, e.g. `{1, 2, 3}`, ending with `...` when
/// there are more
impl fmt::Display for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, x) in self.iter().take(DISPLAY_LIMIT).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{x}")?;
        }
        if self.len > DISPLAY_LIMIT {
            f.write_str(", ...")?;
        }
        f.write_str("}")
    }
}
