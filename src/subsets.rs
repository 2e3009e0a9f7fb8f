//! Enumeration of every subset of a [`BitSet`].

use crate::BitSet;

/// Largest member count whose subsets can be enumerated
pub const ENUMERATE_LIMIT: usize = 30;

/// Error returned by [`BitSet::subsets`]
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum EnumerateError {
    /// The set has too many members, `2^size` subsets would not be practical to list
    #[error("cannot enumerate the subsets of a set with {size} members, the limit is {limit}")]
    TooManyMembers {
        /// Members in the set
        size: usize,
        /// Largest accepted size
        limit: usize,
    },
}

/// Iterator over all subsets of a set's members.
///
/// The `i`th item holds the members selected by the binary expansion of `i`: bit `j` of `i`
/// picks the `j`th smallest member. The first item is the empty subset and the last one is
/// the full set.
#[derive(Clone, Debug)]
pub struct Subsets {
    members: Vec<usize>,
    next: usize,
    end: usize,
}

impl Iterator for Subsets {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == self.end {
            return None;
        }
        let selector = self.next;
        self.next += 1;
        Some(
            self.members
                .iter()
                .enumerate()
                .filter(|(j, _)| (selector >> j) & 1 == 1)
                .map(|(_, x)| *x)
                .collect(),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Subsets {}

impl BitSet {
    /// Every subset of the current members, `2^size` of them.
    ///
    /// # Errors
    ///
    /// [`EnumerateError::TooManyMembers`] if the set has [`ENUMERATE_LIMIT`] or more members.
    pub fn subsets(&self) -> Result<Subsets, EnumerateError> {
        let size = self.size();
        if size >= ENUMERATE_LIMIT {
            return Err(EnumerateError::TooManyMembers {
                size,
                limit: ENUMERATE_LIMIT - 1,
            });
        }
        Ok(Subsets {
            members: self.to_vec(),
            next: 0,
            end: 1 << size,
        })
    }
}
