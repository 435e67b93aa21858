//! This crate exposes two classic pointer-linked data structures, a doubly
//! linked list with stack semantics and an unbalanced Binary Search Tree
//! (BST), mostly for educational purposes.
//!
//! ## Layout
//!
//! Both structures store their nodes in an arena: a slot vector indexed by
//! opaque, `Copy`-able [`NodeId`] handles. Relations between nodes (`prev`/
//! `next` for the list, `parent`/`left`/`right` for the tree) are stored as
//! `Option<NodeId>` rather than references, which sidesteps the ownership
//! cycles that parent/child back-links would otherwise create while keeping
//! relinking O(1).
//!
//! ## Comparators
//!
//! Neither structure requires `K: Ord` up front. Ordering is delegated to a
//! caller-supplied comparator, any `Fn(&K, &K) -> Ordering`, fixed at
//! construction and replaceable later via `set_comparator`. The comparator
//! must describe a total order for searches to be meaningful; this is not
//! validated.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree supports operations to insert, find, and delete
//! stored keys. The most important invariants of a BST are:
//!
//! 1. For every node in a BST, all the nodes in its left subtree have a
//!    key comparing `Less` than its own key.
//! 2. For every node in a BST, all the nodes in its right subtree have a
//!    key comparing `Greater` than or `Equal` to its own key.
//!
//! The tree here is deliberately *not* self-balancing: its shape depends on
//! insertion order, and adversarial input degrades it to O(n) depth. It also
//! permits duplicate keys, which always land in the right subtree of their
//! equal-keyed ancestors.
//!
//! Several operations come in two flavors, selected by [`Mode`]: a canonical
//! iterative implementation with O(1) auxiliary space and a recursive one
//! that trades O(depth) call stack for clarity. Both must agree; the tests
//! hold them to that.
//!
//! # Examples
//!
//! ```
//! use arena_collections::bst::Tree;
//! use arena_collections::Mode;
//!
//! let mut tree = Tree::new();
//! for key in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(key, Mode::Iterative);
//! }
//!
//! let mut inorder = Vec::new();
//! tree.inorder_walk(tree.root(), |k| inorder.push(*k)).unwrap();
//! assert_eq!(inorder, [1, 3, 4, 5, 7, 8, 9]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod arena;
pub mod bst;
mod error;
pub mod stack;


pub use arena::NodeId;
pub use error::Error;

/// Selects between the iterative and recursive implementation of an
/// operation that supports both.
///
/// The two code paths are required to produce identical results; the
/// recursive one exists for parity with the textbook presentation and costs
/// O(depth) call stack instead of O(1) auxiliary space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    /// Loop-based traversal, O(1) auxiliary space.
    #[default]
    Iterative,
    /// Call-stack-based traversal, O(depth) auxiliary space.
    Recursive,
}
