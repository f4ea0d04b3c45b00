use smallvec::{SmallVec, smallvec};

use super::handle::Handle;
use super::height::MAX_HEIGHT;

/// Links stored inline before spilling to the heap. Fifteen in sixteen nodes are at most
/// this tall, so only sentinels and the occasional tall node allocate.
pub(crate) const INLINE_LINKS: usize = 4;

pub(crate) type Links = SmallVec<[Handle; INLINE_LINKS]>;

/// A list node: one element plus its successor and predecessor at every level it
/// occupies.
///
/// `next[i]` and `prev[i]` exist for every `i < height()`, so a node present at level
/// `i` is present at every lower level.
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    // `None` only for the head and tail sentinels.
    value: Option<T>,
    next: Links,
    prev: Links,
}

impl<T> Node<T> {
    /// Creates a sentinel spanning every level, with all links set to `link`.
    ///
    /// The head is created with `link == TAIL` and the tail with `link == HEAD`; the
    /// unused direction is pointed at the same sentinel and never followed.
    pub(crate) fn sentinel(link: Handle) -> Self {
        Self {
            value: None,
            next: smallvec![link; MAX_HEIGHT],
            prev: smallvec![link; MAX_HEIGHT],
        }
    }

    /// Creates an element node whose links are already those of its final position.
    pub(crate) fn new(value: T, next: Links, prev: Links) -> Self {
        debug_assert_eq!(next.len(), prev.len());
        debug_assert!((1..=MAX_HEIGHT).contains(&next.len()));
        Self {
            value: Some(value),
            next,
            prev,
        }
    }

    #[inline]
    pub(crate) fn height(&self) -> usize {
        self.next.len()
    }

    #[inline]
    pub(crate) fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub(crate) fn into_value(self) -> Option<T> {
        self.value
    }

    #[inline]
    pub(crate) fn next(&self, level: usize) -> Handle {
        self.next[level]
    }

    #[inline]
    pub(crate) fn prev(&self, level: usize) -> Handle {
        self.prev[level]
    }

    #[inline]
    pub(crate) fn set_next(&mut self, level: usize, handle: Handle) {
        self.next[level] = handle;
    }

    #[inline]
    pub(crate) fn set_prev(&mut self, level: usize, handle: Handle) {
        self.prev[level] = handle;
    }
}
