use core::borrow::Borrow;
use core::cmp::Ordering;

use alloc::vec::Vec;

use super::arena::Arena;
use super::handle::Handle;
use super::height::MAX_HEIGHT;
use super::node::{Links, Node};

/// The core skip list backing `SkipList`.
///
/// All nodes, sentinels included, live in one arena; links between them are handles.
/// Height selection is left to the caller so this type stays free of randomness.
#[derive(Clone)]
pub(crate) struct RawSkipList<T> {
    /// Arena holding the two sentinels followed by every element node.
    nodes: Arena<Node<T>>,
    /// Number of element nodes (sentinels excluded).
    len: usize,
}

/// For every level, the rightmost node whose element is strictly less than a target
/// (or the head sentinel if there is none).
///
/// Computed fresh for every positional query. Mutations reuse it as the exact set of
/// splice points, so no second traversal is needed.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Trail([Handle; MAX_HEIGHT]);

impl Trail {
    /// The trail of anything smaller than every element: the head at every level.
    const HEAD: Self = Self([Handle::HEAD; MAX_HEIGHT]);

    /// Level-0 predecessor of the target.
    #[inline]
    pub(crate) fn predecessor(&self) -> Handle {
        self.0[0]
    }

    #[inline]
    fn at(&self, level: usize) -> Handle {
        self.0[level]
    }
}

impl<T> RawSkipList<T> {
    /// Creates a new, empty list.
    pub(crate) fn new() -> Self {
        Self::from_arena(Arena::new())
    }

    /// Creates a new list with room for `capacity` elements before reallocating.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self::from_arena(Arena::with_capacity(capacity.saturating_add(2)))
    }

    fn from_arena(mut nodes: Arena<Node<T>>) -> Self {
        Self::link_sentinels(&mut nodes);
        Self {
            nodes,
            len: 0,
        }
    }

    /// Allocates head and tail in the first two slots, linked to each other at every level.
    fn link_sentinels(nodes: &mut Arena<Node<T>>) {
        let head = nodes.insert(Node::sentinel(Handle::TAIL));
        let tail = nodes.insert(Node::sentinel(Handle::HEAD));
        debug_assert_eq!((head, tail), (Handle::HEAD, Handle::TAIL));
    }

    /// Returns the number of elements in the list.
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list contains no elements.
    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns how many elements fit before the node arena reallocates.
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity().saturating_sub(2)
    }

    /// Drops every element and relinks the sentinels.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        Self::link_sentinels(&mut self.nodes);
        self.len = 0;
    }

    #[inline]
    pub(crate) fn node(&self, handle: Handle) -> &Node<T> {
        self.nodes.get(handle)
    }

    /// Returns the element stored at `handle`, which must not be a sentinel.
    #[inline]
    pub(crate) fn value(&self, handle: Handle) -> &T {
        self.node(handle).value().expect("`RawSkipList::value()` - `handle` is a sentinel!")
    }

    /// Returns the level-0 successor of `handle`, or `None` if it is the tail.
    #[inline]
    pub(crate) fn successor(&self, handle: Handle) -> Option<Handle> {
        let next = self.node(handle).next(0);
        (next != Handle::TAIL).then_some(next)
    }

    /// Handle of the smallest element.
    pub(crate) fn first_handle(&self) -> Option<Handle> {
        self.successor(Handle::HEAD)
    }

    /// Handle of the largest element, found through the tail's backward link.
    pub(crate) fn last_handle(&self) -> Option<Handle> {
        let prev = self.node(Handle::TAIL).prev(0);
        (prev != Handle::HEAD).then_some(prev)
    }

    pub(crate) fn first(&self) -> Option<&T> {
        self.first_handle().map(|handle| self.value(handle))
    }

    pub(crate) fn last(&self) -> Option<&T> {
        self.last_handle().map(|handle| self.value(handle))
    }

    /// Compares the element at `handle` against `key`. The tail compares greater than
    /// everything.
    #[inline]
    fn compare<Q>(&self, handle: Handle, key: &Q) -> Ordering
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match self.node(handle).value() {
            Some(value) => value.borrow().cmp(key),
            None => Ordering::Greater,
        }
    }

    /// Computes the trail for `key`, walking from the top level down and advancing at
    /// each level while the next element is less than `key`.
    pub(crate) fn trail<Q>(&self, key: &Q) -> Trail
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut trail = Trail::HEAD;
        let mut current = Handle::HEAD;
        for level in (0..MAX_HEIGHT).rev() {
            loop {
                let next = self.node(current).next(level);
                if self.compare(next, key) != Ordering::Less {
                    break;
                }
                current = next;
            }
            trail.0[level] = current;
        }
        trail
    }

    /// Computes the trail for `key` and returns it with the handle of the element equal
    /// to `key`, if present.
    pub(crate) fn search<Q>(&self, key: &Q) -> (Trail, Option<Handle>)
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let trail = self.trail(key);
        let found = self
            .successor(trail.predecessor())
            .filter(|&candidate| self.compare(candidate, key) == Ordering::Equal);
        (trail, found)
    }

    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).1.is_some()
    }

    /// Smallest element greater than or equal to `key`.
    pub(crate) fn ceiling<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let trail = self.trail(key);
        self.successor(trail.predecessor()).map(|handle| self.value(handle))
    }

    /// Largest element less than or equal to `key`.
    pub(crate) fn floor<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let (trail, found) = self.search(key);
        let handle = found.unwrap_or(trail.predecessor());
        (handle != Handle::HEAD).then(|| self.value(handle))
    }

    /// Inserts `value` unless an equal element is present. `height` is only called once
    /// the insertion is known to go ahead.
    ///
    /// Returns `true` if the element was inserted.
    pub(crate) fn insert_with<F>(&mut self, value: T, height: F) -> bool
    where
        T: Ord,
        F: FnOnce() -> usize,
    {
        let (trail, found) = self.search(&value);
        if found.is_some() {
            return false;
        }

        let height = height();
        assert!((1..=MAX_HEIGHT).contains(&height), "`RawSkipList::insert_with()` - invalid height {height}");

        let prev: Links = (0..height).map(|level| trail.at(level)).collect();
        let next: Links = prev.iter().enumerate().map(|(level, &p)| self.node(p).next(level)).collect();
        let handle = self.nodes.insert(Node::new(value, next.clone(), prev.clone()));

        for (level, (&p, &n)) in prev.iter().zip(&next).enumerate() {
            self.nodes.get_mut(p).set_next(level, handle);
            self.nodes.get_mut(n).set_prev(level, handle);
        }

        self.len += 1;
        debug_assert_eq!(self.nodes.len(), self.len + 2);
        tracing::trace!(height, len = self.len, "spliced skip list node");
        true
    }

    /// Removes and returns the element equal to `key`, if present.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let (trail, found) = self.search(key);
        found.map(|handle| self.unlink(handle, &trail))
    }

    pub(crate) fn pop_first(&mut self) -> Option<T> {
        // Every level of the first node is preceded by the head.
        let handle = self.first_handle()?;
        Some(self.unlink(handle, &Trail::HEAD))
    }

    pub(crate) fn pop_last(&mut self) -> Option<T> {
        let handle = self.last_handle()?;
        let mut trail = Trail::HEAD;
        let node = self.node(handle);
        for level in 0..node.height() {
            trail.0[level] = node.prev(level);
        }
        Some(self.unlink(handle, &trail))
    }

    /// Unlinks `handle` at every level it occupies, using `trail` as its predecessors,
    /// and frees its slot.
    fn unlink(&mut self, handle: Handle, trail: &Trail) -> T {
        debug_assert!(!handle.is_sentinel());
        let height = self.node(handle).height();
        for level in 0..height {
            let prev = trail.at(level);
            let next = self.node(handle).next(level);
            debug_assert_eq!(self.node(handle).prev(level), prev);
            self.nodes.get_mut(prev).set_next(level, next);
            self.nodes.get_mut(next).set_prev(level, prev);
        }

        self.len -= 1;
        tracing::trace!(height, len = self.len, "unlinked skip list node");
        self.nodes.remove(handle).into_value().expect("`RawSkipList::unlink()` - `handle` is a sentinel!")
    }

    /// Returns the element at position `rank` by walking level 0. O(n).
    pub(crate) fn get_by_rank(&self, rank: usize) -> Option<&T> {
        if rank >= self.len {
            return None;
        }

        let mut current = Handle::HEAD;
        for _ in 0..=rank {
            current = self.node(current).next(0);
        }
        Some(self.value(current))
    }

    /// Returns the position of the element equal to `key`. The lookup is logarithmic;
    /// counting the position walks level 0 and is O(n).
    pub(crate) fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let target = self.search(key).1?;
        let mut rank = 0;
        let mut current = self.node(Handle::HEAD).next(0);
        while current != target {
            current = self.node(current).next(0);
            rank += 1;
        }
        Some(rank)
    }

    /// Moves every element out in ascending order, leaving the list empty.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<T> {
        let mut result = Vec::with_capacity(self.len);
        let mut current = self.node(Handle::HEAD).next(0);
        while current != Handle::TAIL {
            let node = self.nodes.remove(current);
            current = node.next(0);
            result.extend(node.into_value());
        }

        self.clear();
        result
    }
}
