//! A tiny slot-vector arena.
//!
//! Every node of a [`stack::Stack`](crate::stack::Stack) or
//! [`bst::Tree`](crate::bst::Tree) lives in one of these. Nodes are named by
//! [`NodeId`] handles (indices into the slot vector), so inter-node
//! relations can be plain `Option<NodeId>` fields instead of owning
//! pointers, and relinking never fights the borrow checker.
//!
//! Freed slots go on a free list and are reused by later allocations. A
//! handle therefore stays valid exactly as long as its node is live;
//! liveness is checked by looking at the slot, which makes stale-handle
//! detection best-effort (a handle freed and then re-allocated is
//! indistinguishable from a live one). Callers that delete nodes should
//! discard their copies of the handle.

/// An opaque handle naming one node inside one structure's arena.
///
/// Handles are cheap to copy and stable: inserting or deleting *other*
/// nodes never invalidates them. They are only meaningful for the structure
/// that produced them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Slot storage with a free list. `T` is the node payload type.
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<u32>,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Stores `value` in a free slot and returns its handle.
    pub(crate) fn alloc(&mut self, value: T) -> NodeId {
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                debug_assert!(slot.is_none(), "free list pointed at a live slot");
                *slot = Some(value);
                NodeId(index)
            }
            None => {
                // Handles are u32 to stay small; a structure would exhaust
                // memory long before overflowing that index space.
                let index = u32::try_from(self.slots.len()).expect("arena exceeds u32 indices");
                self.slots.push(Some(value));
                NodeId(index)
            }
        }
    }

    /// Removes the node named by `id`, returning its payload. `None` if the
    /// slot is already free or the handle never named a node here.
    pub(crate) fn free(&mut self, id: NodeId) -> Option<T> {
        let value = self.slots.get_mut(id.index())?.take()?;
        self.free.push(id.0);
        Some(value)
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&T> {
        self.slots.get(id.index())?.as_ref()
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.slots.get_mut(id.index())?.as_mut()
    }

    pub(crate) fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live nodes.
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
