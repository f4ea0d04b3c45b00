use thiserror::Error;

/// The error returned by [`SkipList::get`](crate::SkipList::get) when the requested rank
/// does not name an element.
///
/// # Examples
///
/// ```
/// use skipset::{OutOfRange, SkipList};
///
/// let list = SkipList::from([1, 2, 3]);
/// assert_eq!(list.get(3), Err(OutOfRange { rank: 3, len: 3 }));
/// assert_eq!(list.get(3).unwrap_err().to_string(), "rank 3 is out of range for a list of 3 elements");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
#[error("rank {rank} is out of range for a list of {len} elements")]
pub struct OutOfRange {
    /// The rank that was requested.
    pub rank: usize,
    /// The length of the list at the time of the request.
    pub len: usize,
}
