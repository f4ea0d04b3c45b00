use alloc::vec::Vec;

use super::handle::Handle;

/// Slot storage for list nodes.
///
/// Removed slots are remembered in `vacant` and handed out again by the next
/// [`insert`](Arena::insert), so a list that churns stays at its high-water mark.
#[derive(Clone)]
pub(crate) struct Arena<N> {
    slots: Vec<Option<N>>,
    vacant: Vec<Handle>,
}

impl<N> Arena<N> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            vacant: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            vacant: Vec::new(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Number of occupied slots.
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.vacant.len()
    }

    pub(crate) fn insert(&mut self, node: N) -> Handle {
        if let Some(handle) = self.vacant.pop() {
            self.slots[handle.to_index()] = Some(node);
            return handle;
        }

        // Strictly below `Handle::MAX` so the pushed slot still has a valid handle.
        assert!(
            self.slots.len() < Handle::MAX,
            "`Arena::insert()` - arena is at maximum capacity ({})",
            Handle::MAX
        );
        self.slots.push(Some(node));
        Handle::from_index(self.slots.len() - 1)
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &N {
        self.slots[handle.to_index()].as_ref().expect("`Arena::get()` - `handle` is vacant!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut N {
        self.slots[handle.to_index()].as_mut().expect("`Arena::get_mut()` - `handle` is vacant!")
    }

    pub(crate) fn remove(&mut self, handle: Handle) -> N {
        let node = self.slots[handle.to_index()].take().expect("`Arena::remove()` - `handle` is vacant!");
        self.vacant.push(handle);
        node
    }

    /// Drops every node. Handles issued before the call are invalidated.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.vacant.clear();
    }
}
