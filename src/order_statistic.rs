/// A zero-based rank into the ascending order of a [`SkipList`](crate::SkipList).
///
/// Indexing a list by `Rank` panics on an invalid rank; use
/// [`SkipList::get`](crate::SkipList::get) for a fallible lookup.
///
/// # Examples
///
/// ```
/// use skipset::{Rank, SkipList};
///
/// let list = SkipList::from(["b", "a", "c"]);
/// assert_eq!(list[Rank(0)], "a");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
