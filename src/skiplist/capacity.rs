#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;

use super::SkipList;
use crate::raw::RawSkipList;

#[cfg(feature = "std")]
impl<T> SkipList<T> {
    /// Creates an empty list with room for at least `capacity` elements before the node
    /// arena reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipList;
    ///
    /// let list: SkipList<i32> = SkipList::with_capacity(16);
    /// assert!(list.is_empty());
    /// assert!(list.capacity() >= 16);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_rng(capacity, SmallRng::from_entropy())
    }
}

impl<T, R> SkipList<T, R> {
    /// Creates an empty list with room for at least `capacity` elements, drawing node
    /// heights from `rng`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::SmallRng;
    /// use skipset::SkipList;
    ///
    /// let list: SkipList<u8> = SkipList::with_capacity_and_rng(8, SmallRng::seed_from_u64(7));
    /// assert!(list.capacity() >= 8);
    /// ```
    #[must_use]
    pub fn with_capacity_and_rng(capacity: usize, rng: R) -> Self {
        SkipList {
            raw: RawSkipList::with_capacity(capacity),
            rng,
        }
    }

    /// Returns how many elements the list can hold before its node arena reallocates.
    ///
    /// Slots freed by removals are reused, so a list that grows and shrinks stays within
    /// its largest size.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
