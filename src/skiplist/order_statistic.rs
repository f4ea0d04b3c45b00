use core::borrow::Borrow;
use core::ops::Index;

use super::SkipList;
use crate::{OutOfRange, Rank};

impl<T, R> SkipList<T, R> {
    /// Returns the element at position `rank` in ascending order.
    ///
    /// The rank is zero-based.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `rank >= self.len()`.
    ///
    /// # Complexity
    ///
    /// O(n). Ranks are not tracked per level, so the lookup walks the bottom level from
    /// the smallest element.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::{OutOfRange, SkipList};
    ///
    /// let list = SkipList::from([10, 20, 30]);
    /// assert_eq!(list.get(1), Ok(&20));
    /// assert_eq!(list.get(3), Err(OutOfRange { rank: 3, len: 3 }));
    /// ```
    pub fn get(&self, rank: usize) -> Result<&T, OutOfRange> {
        self.raw.get_by_rank(rank).ok_or(OutOfRange {
            rank,
            len: self.len(),
        })
    }

    /// Returns the zero-based rank of `value` in ascending order, or `None` if the value
    /// is not present.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipList;
    ///
    /// let list = SkipList::from([10, 20]);
    ///
    /// assert_eq!(list.rank_of(&20), Some(1));
    /// assert_eq!(list.rank_of(&15), None);
    /// ```
    #[must_use]
    pub fn rank_of<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.rank_of(value)
    }
}

/// Indexes into the list by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use skipset::{Rank, SkipList};
///
/// let list = SkipList::from([10, 20, 30]);
/// assert_eq!(list[Rank(1)], 20);
/// ```
impl<T, R> Index<Rank> for SkipList<T, R> {
    type Output = T;

    fn index(&self, rank: Rank) -> &T {
        match self.get(rank.0) {
            Ok(value) => value,
            Err(err) => panic!("index out of bounds: {err}"),
        }
    }
}
