//! A doubly linked list with stack semantics.
//!
//! Nodes live in an arena and chain to each other through `prev`/`next`
//! handles. Pushing and popping happen at the tail, both O(1); `search` is a
//! linear scan from the head. For any two adjacent nodes `a` and `b`,
//! `a.next == b` iff `b.prev == a`; the head has no `prev` and the tail has
//! no `next`; the list is empty iff head and tail are both unset.
//!
//! # Examples
//!
//! ```
//! use arena_collections::stack::Stack;
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//! stack.push(3);
//!
//! // Last in, first out.
//! assert_eq!(stack.pop(), Some(3));
//! assert_eq!(stack.pop(), Some(2));
//! assert_eq!(stack.pop(), Some(1));
//! assert_eq!(stack.pop(), None);
//! ```

use std::cmp::Ordering;

use crate::arena::{Arena, NodeId};
use crate::Mode;

fn default_comparator<K: Ord>(a: &K, b: &K) -> Ordering {
    a.cmp(b)
}

struct Node<K> {
    key: K,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// A doubly linked list exposing stack semantics: push and pop at the tail,
/// plus linear search under a caller-supplied comparator.
///
/// The comparator defaults to `K::cmp` behind a `fn` pointer so `Stack::new`
/// works for any `K: Ord`; [`Stack::with_comparator`] accepts any
/// `Fn(&K, &K) -> Ordering` for keys with no intrinsic order.
pub struct Stack<K, C = fn(&K, &K) -> Ordering>
where
    C: Fn(&K, &K) -> Ordering,
{
    arena: Arena<Node<K>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    comparator: C,
}

impl<K: Ord> Stack<K> {
    /// Generates a new, empty `Stack` ordered by `K::cmp`.
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K: Ord> Default for Stack<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> Stack<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    /// Generates a new, empty `Stack` that compares keys with `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Arena::new(),
            head: None,
            tail: None,
            comparator,
        }
    }

    /// Replaces the comparator without rebuilding the stack. Only `search`
    /// consults the comparator, so existing nodes are unaffected.
    pub fn set_comparator(&mut self, comparator: C) {
        self.comparator = comparator;
    }

    /// True iff the stack holds no nodes.
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.head.is_none(), self.tail.is_none());
        self.head.is_none() && self.tail.is_none()
    }

    /// Number of nodes currently in the stack.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Handle of the first (bottom) node, if any.
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    /// Handle of the last (top) node, if any.
    pub fn tail(&self) -> Option<NodeId> {
        self.tail
    }

    /// Reads the key of the node named by `id`. `None` if the handle is
    /// stale.
    pub fn key(&self, id: NodeId) -> Option<&K> {
        self.arena.get(id).map(|node| &node.key)
    }

    /// Pushes `key` onto the top of the stack and returns the new tail
    /// node's handle. O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_collections::stack::Stack;
    ///
    /// let mut stack = Stack::new();
    /// let top = stack.push(7);
    ///
    /// assert_eq!(stack.tail(), Some(top));
    /// assert_eq!(stack.key(top), Some(&7));
    /// ```
    pub fn push(&mut self, key: K) -> NodeId {
        let new_tail = self.arena.alloc(Node {
            key,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(old_tail) => self.node_mut(old_tail).next = Some(new_tail),
            None => self.head = Some(new_tail),
        }
        self.tail = Some(new_tail);
        new_tail
    }

    /// Removes the tail node and returns its key, or `None` if the stack is
    /// empty (in which case nothing is mutated). Popping the last node
    /// clears head and tail together. O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_collections::stack::Stack;
    ///
    /// let mut stack = Stack::new();
    /// stack.push("bottom");
    /// stack.push("top");
    ///
    /// assert_eq!(stack.pop(), Some("top"));
    /// assert_eq!(stack.pop(), Some("bottom"));
    /// assert_eq!(stack.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<K> {
        let old_tail = self.tail?;
        let node = self
            .arena
            .free(old_tail)
            .expect("tail handle names a live node");
        self.tail = node.prev;
        match self.tail {
            Some(new_tail) => self.node_mut(new_tail).next = None,
            None => self.head = None,
        }
        Some(node.key)
    }

    /// Scans from head to tail and returns the first node whose key
    /// compares `Equal` to `target`, or `None` when there is no match.
    /// Read-only.
    ///
    /// `mode` picks the scan strategy; both produce the same answer.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_collections::stack::Stack;
    /// use arena_collections::Mode;
    ///
    /// let mut stack = Stack::new();
    /// stack.push(1);
    /// let two = stack.push(2);
    ///
    /// assert_eq!(stack.search(&2, Mode::Iterative), Some(two));
    /// assert_eq!(stack.search(&9, Mode::Recursive), None);
    /// ```
    pub fn search(&self, target: &K, mode: Mode) -> Option<NodeId> {
        match mode {
            Mode::Iterative => self.iterative_search(target),
            Mode::Recursive => self.recursive_search(self.head, target),
        }
    }

    fn iterative_search(&self, target: &K) -> Option<NodeId> {
        let mut curr = self.head;
        while let Some(id) = curr {
            let node = self.node(id);
            if (self.comparator)(&node.key, target) == Ordering::Equal {
                return Some(id);
            }
            curr = node.next;
        }
        None
    }

    fn recursive_search(&self, curr: Option<NodeId>, target: &K) -> Option<NodeId> {
        let id = curr?;
        let node = self.node(id);
        if (self.comparator)(&node.key, target) == Ordering::Equal {
            return Some(id);
        }
        self.recursive_search(node.next, target)
    }

    fn node(&self, id: NodeId) -> &Node<K> {
        self.arena.get(id).expect("linked handle names a live node")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<K> {
        self.arena
            .get_mut(id)
            .expect("linked handle names a live node")
    }
}
