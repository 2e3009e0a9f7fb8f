//! Sets of natural numbers over a fixed universe, backed by a bit vector.
//!
//! A [`BitSet`] is created with a largest element `max` and can hold any of the numbers
//! `0..=max`. It supports membership, insertion and removal in constant time, and the usual
//! set algebra (union, intersection, complement, subtraction, equality and subset tests)
//! with word-parallel bit operations.
//!
//! ```
//! use natset::BitSet;
//!
//! let odd = BitSet::from_members(10, (1..=10).step_by(2));
//! let even = odd.complement();
//! assert_eq!(even.to_vec(), vec![0, 2, 4, 6, 8, 10]);
//! assert!(odd.union(&even).is_superset(&odd));
//! ```

// Forbid unsafe code (https://doc.rust-lang.org/book/ch19-01-unsafe-rust.html)
#![forbid(unsafe_code)]
// Disallow all missing docs and rustdoc lints
#![deny(missing_docs)]
#![deny(rustdoc::all)]
// Error from most clippy warnings (https://github.com/rust-lang/rust-clippy)
#![deny(clippy::all)]
// Warnings from pedantic clippy lints
#![warn(clippy::pedantic)]
// Warnings about missing Cargo.toml fields
#![warn(clippy::cargo)]

mod bitset;
mod parse;
mod subsets;

pub use bitset::{BitSet, Iter};
pub use parse::{parse_members, ParseMembersError};
pub use subsets::{EnumerateError, Subsets, ENUMERATE_LIMIT};

#[cfg(test)]
mod test {
    use super::*;

    const MAX: usize = 1000;

    /// Powers of two below `MAX` together with their neighbours
    fn neighbours_of_powers() -> BitSet {
        let mut set = BitSet::new(MAX);
        let mut i = 1;
        while i < MAX {
            set.add(i - 1);
            set.add(i);
            set.add(i + 1);
            i += i;
        }
        set
    }

    /// Powers of two below `MAX`
    fn powers() -> BitSet {
        BitSet::from_members(MAX, (0..).map(|p| 1 << p).take_while(|i| *i < MAX))
    }

    /// Odd numbers below `MAX`
    fn odd() -> BitSet {
        BitSet::from_members(MAX, (1..MAX).step_by(2))
    }

    /// Multiples of 8 below `MAX`
    fn multiples_of_eight() -> BitSet {
        BitSet::from_members(MAX, (0..MAX).step_by(8))
    }

    #[test]
    fn neighbours_fixture() {
        let a = neighbours_of_powers();
        assert_eq!(
            a.to_vec(),
            vec![
                0, 1, 2, 3, 4, 5, 7, 8, 9, 15, 16, 17, 31, 32, 33, 63, 64, 65, 127, 128, 129, 255,
                256, 257, 511, 512, 513
            ]
        );
        assert_eq!(a.size(), 27);
        assert_eq!(powers().size(), 10);
    }

    #[test]
    fn powers_subset_of_neighbours() {
        let a = neighbours_of_powers();
        let b = powers();
        assert!(b.is_subset(&a));
        assert!(!a.is_subset(&b));
        assert!(a.is_superset(&b));
        assert!(!b.is_superset(&a));
        assert!(b.equal(&a.intersect(&b)));
    }

    #[test]
    fn complement_of_odd_is_even() {
        let d = odd().complement();
        assert_eq!(d.size(), 501);
        assert_eq!(d.to_vec(), (0..=MAX).step_by(2).collect::<Vec<_>>());

        let e = d.union(&powers());
        assert!(!d.equal(&e));
        assert_eq!(e.size(), 502);
        assert!(e.find(1));
    }

    #[test]
    fn multiples_of_eight_near_powers() {
        let g = multiples_of_eight();
        assert_eq!(g.size(), 125);
        let h = neighbours_of_powers().intersect(&g);
        assert_eq!(h.to_vec(), vec![0, 8, 16, 32, 64, 128, 256, 512]);
        assert!(!h.equal(&g));
        assert!(g.is_superset(&h));
    }

    #[test]
    fn driver_walkthrough() {
        let a = neighbours_of_powers();
        let d = odd().complement();
        let e = d.union(&powers());
        let g = multiples_of_eight();
        let mut h = a.intersect(&g);

        let i = g.subtract(&d);
        assert!(i.is_empty());

        let j = h.intersect(&e);
        assert_eq!(j, h);

        let k = h.complement();
        assert_eq!(k.size(), MAX + 1 - 8);
        assert!(k.to_string().ends_with(", ...}"));

        assert!(h.delete(16));
        assert_eq!(h.to_string(), "{0, 8, 32, 64, 128, 256, 512}");

        let subsets: Vec<_> = h.subsets().unwrap().collect();
        assert_eq!(subsets.len(), 1 << 7);
        assert_eq!(subsets.first(), Some(&vec![]));
        assert_eq!(subsets.last(), Some(&h.to_vec()));
    }
}
