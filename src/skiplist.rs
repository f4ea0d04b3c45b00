use core::borrow::Borrow;
use core::fmt;
use core::iter::FusedIterator;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand_core::RngCore;

use crate::raw::{Handle, RawSkipList, random_height};

mod capacity;
mod order_statistic;

/// An ordered set based on a skip list.
///
/// Elements are kept in ascending order with no duplicates. Lookups, insertions and
/// removals walk a stack of progressively sparser linked levels and take expected
/// O(log n) time. Each node's height is drawn from the list's random number generator
/// `R`; any [`RngCore`] can be injected with [`with_rng`](SkipList::with_rng), and
/// [`with_seed`](SkipList::with_seed) makes the structure reproducible.
///
/// Rank access ([`get`](SkipList::get), [`rank_of`](SkipList::rank_of), indexing by
/// [`Rank`](crate::Rank)) walks the bottom level and is **O(n)**, not logarithmic.
///
/// It is a logic error for an element to be modified in such a way that its ordering
/// relative to any other element, as determined by the [`Ord`] trait, changes while it
/// is in the list. The resulting behavior is not specified but is confined to the list.
///
/// A `SkipList` is not synchronized. It can be sent between threads when `T` and `R`
/// can, but concurrent mutation requires external locking.
///
/// # Examples
///
/// ```
/// use skipset::SkipList;
///
/// let mut list = SkipList::new();
/// for x in [5, 1, 9, 3] {
///     list.insert(x);
/// }
///
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 3, 5, 9]);
/// assert_eq!(list.floor(&4), Some(&3));
/// assert_eq!(list.ceiling(&4), Some(&5));
/// assert_eq!(list.get(2), Ok(&5));
/// assert_eq!(list.remove(&9), Some(9));
/// assert_eq!(list.remove(&9), None);
/// ```
pub struct SkipList<T, R = SmallRng> {
    raw: RawSkipList<T>,
    rng: R,
}

/// An iterator over the elements of a `SkipList`, in ascending order.
///
/// This `struct` is created by the [`iter`] method on [`SkipList`]. It walks the bottom
/// level once from the smallest element to the largest and cannot be restarted; call
/// [`iter`] again for a new pass. The iterator borrows the list, so the list cannot be
/// mutated while it is alive.
///
/// # Examples
///
/// ```
/// use skipset::SkipList;
///
/// let list = SkipList::from([3, 1, 2]);
/// let mut iter = list.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), Some(&3));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: SkipList::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T> {
    raw: &'a RawSkipList<T>,
    next: Option<Handle>,
    remaining: usize,
}

/// An owning iterator over the elements of a `SkipList`, in ascending order.
///
/// This `struct` is created by the [`into_iter`] method on [`SkipList`]
/// (provided by the [`IntoIterator`] trait).
///
/// # Examples
///
/// ```
/// use skipset::SkipList;
///
/// let list = SkipList::from([2, 1]);
/// assert_eq!(list.into_iter().collect::<Vec<_>>(), [1, 2]);
/// ```
///
/// [`into_iter`]: SkipList#method.into_iter
pub struct IntoIter<T> {
    inner: alloc::vec::IntoIter<T>,
}

#[cfg(feature = "std")]
impl<T> SkipList<T> {
    /// Makes a new, empty `SkipList` whose node heights are drawn from a [`SmallRng`]
    /// seeded from the operating system.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipList;
    ///
    /// let mut list = SkipList::new();
    /// list.insert("a");
    /// assert_eq!(list.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }
}

impl<T> SkipList<T> {
    /// Makes a new, empty `SkipList` whose node heights are drawn from a [`SmallRng`]
    /// seeded with `seed`.
    ///
    /// Two lists built with the same seed and the same sequence of insertions have
    /// identical internal structure.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipList;
    ///
    /// let mut list = SkipList::with_seed(42);
    /// list.insert(1);
    /// assert!(list.contains(&1));
    /// ```
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }
}

impl<T, R> SkipList<T, R> {
    /// Makes a new, empty `SkipList` that draws node heights from `rng`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::rngs::mock::StepRng;
    /// use skipset::SkipList;
    ///
    /// // Every node gets height 1; the list degrades to a sorted linked list.
    /// let mut list = SkipList::with_rng(StepRng::new(0, 0));
    /// list.insert(2);
    /// list.insert(1);
    /// assert_eq!(list.first(), Some(&1));
    /// ```
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        SkipList {
            raw: RawSkipList::new(),
            rng,
        }
    }

    /// Returns the number of elements in the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipList;
    ///
    /// let mut list = SkipList::new();
    /// assert_eq!(list.len(), 0);
    /// list.insert(1);
    /// assert_eq!(list.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the list contains no elements.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the smallest element, or `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipList;
    ///
    /// let mut list = SkipList::new();
    /// assert_eq!(list.first(), None);
    /// list.insert(2);
    /// list.insert(1);
    /// assert_eq!(list.first(), Some(&1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.raw.first()
    }

    /// Returns the largest element, or `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipList;
    ///
    /// let list = SkipList::from([1, 2]);
    /// assert_eq!(list.last(), Some(&2));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1), through the backward link of the tail.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.raw.last()
    }

    /// Removes and returns the smallest element, or `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipList;
    ///
    /// let mut list = SkipList::from([1, 2]);
    /// assert_eq!(list.pop_first(), Some(1));
    /// assert_eq!(list.pop_first(), Some(2));
    /// assert_eq!(list.pop_first(), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height of the removed node)
    pub fn pop_first(&mut self) -> Option<T> {
        self.raw.pop_first()
    }

    /// Removes and returns the largest element, or `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipList;
    ///
    /// let mut list = SkipList::from([1, 2]);
    /// assert_eq!(list.pop_last(), Some(2));
    /// assert_eq!(list.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height of the removed node)
    pub fn pop_last(&mut self) -> Option<T> {
        self.raw.pop_last()
    }

    /// Clears the list, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipList;
    ///
    /// let mut list = SkipList::from([1, 2]);
    /// list.clear();
    /// assert!(list.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        tracing::debug!(len = self.raw.len(), "clearing skip list");
        self.raw.clear();
    }

    /// Gets an iterator that visits the elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipList;
    ///
    /// let list = SkipList::from([3, 1, 2]);
    /// let values: Vec<_> = list.iter().copied().collect();
    /// assert_eq!(values, [1, 2, 3]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1) to create; each step is O(1).
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            raw: &self.raw,
            next: self.raw.first_handle(),
            remaining: self.raw.len(),
        }
    }

    /// Returns `true` if the list contains an element equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipList;
    ///
    /// let list = SkipList::from([1, 2, 3]);
    /// assert!(list.contains(&1));
    /// assert!(!list.contains(&4));
    /// ```
    ///
    /// # Complexity
    ///
    /// Expected O(log n)
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.contains(value)
    }

    /// Returns the smallest element greater than or equal to `value`, or `None` if every
    /// element is smaller.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipList;
    ///
    /// let list = SkipList::from([10, 20]);
    /// assert_eq!(list.ceiling(&15), Some(&20));
    /// assert_eq!(list.ceiling(&20), Some(&20));
    /// assert_eq!(list.ceiling(&21), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// Expected O(log n)
    #[must_use]
    pub fn ceiling<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.ceiling(value)
    }

    /// Returns the largest element less than or equal to `value`, or `None` if every
    /// element is larger.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipList;
    ///
    /// let list = SkipList::from([10, 20]);
    /// assert_eq!(list.floor(&5), None);
    /// assert_eq!(list.floor(&10), Some(&10));
    /// assert_eq!(list.floor(&99), Some(&20));
    /// ```
    ///
    /// # Complexity
    ///
    /// Expected O(log n)
    #[must_use]
    pub fn floor<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.floor(value)
    }

    /// Removes the element equal to `value` and returns it, or `None` if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipList;
    ///
    /// let mut list = SkipList::from([1, 2]);
    /// assert_eq!(list.remove(&2), Some(2));
    /// assert_eq!(list.remove(&2), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// Expected O(log n)
    pub fn remove<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove(value)
    }
}

impl<T: Ord, R: RngCore> SkipList<T, R> {
    /// Adds a value to the list.
    ///
    /// Returns whether the value was newly inserted. If the list already contains an
    /// equal element it is left untouched, `false` is returned and no random height is
    /// drawn.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipList;
    ///
    /// let mut list = SkipList::new();
    /// assert!(list.insert(2));
    /// assert!(!list.insert(2));
    /// assert_eq!(list.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// Expected O(log n)
    pub fn insert(&mut self, value: T) -> bool {
        let rng = &mut self.rng;
        self.raw.insert_with(value, || random_height(rng))
    }
}

#[cfg(feature = "std")]
impl<T> Default for SkipList<T> {
    /// Creates an empty `SkipList` seeded from the operating system.
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, R: Clone> Clone for SkipList<T, R> {
    /// Copies the list node for node, including each node's height and the generator state.
    fn clone(&self) -> Self {
        SkipList {
            raw: self.raw.clone(),
            rng: self.rng.clone(),
        }
    }
}

impl<T: fmt::Debug, R> fmt::Debug for SkipList<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, R, S> PartialEq<SkipList<T, S>> for SkipList<T, R> {
    fn eq(&self, other: &SkipList<T, S>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, R> Eq for SkipList<T, R> {}

#[cfg(feature = "std")]
impl<T: Ord> FromIterator<T> for SkipList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SkipList::new();
        list.extend(iter);
        list
    }
}

#[cfg(feature = "std")]
impl<T: Ord, const N: usize> From<[T; N]> for SkipList<T> {
    /// Converts a `[T; N]` into a `SkipList<T>`.
    ///
    /// ```
    /// use skipset::SkipList;
    ///
    /// let list1 = SkipList::from([1, 2, 3, 4]);
    /// let list2: SkipList<_> = [1, 2, 3, 4].into();
    /// assert_eq!(list1, list2);
    /// ```
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<T: Ord, R: RngCore> Extend<T> for SkipList<T, R> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: 'a + Ord + Copy, R: RngCore> Extend<&'a T> for SkipList<T, R> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<'a, T, R> IntoIterator for &'a SkipList<T, R> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, R> IntoIterator for SkipList<T, R> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an iterator for moving out the `SkipList`'s contents in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipList;
    ///
    /// let list = SkipList::from([1, 2, 3, 4]);
    ///
    /// let v: Vec<_> = list.into_iter().collect();
    /// assert_eq!(v, [1, 2, 3, 4]);
    /// ```
    fn into_iter(mut self) -> IntoIter<T> {
        IntoIter {
            inner: self.raw.drain_to_vec().into_iter(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let handle = self.next?;
        self.next = self.raw.successor(handle);
        self.remaining -= 1;
        Some(self.raw.value(handle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            raw: self.raw,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner.as_slice()).finish()
    }
}
