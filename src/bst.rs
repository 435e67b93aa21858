//! An unbalanced Binary Search Tree over arena-allocated nodes.
//!
//! Every node carries `parent`/`left`/`right` handles. The BST property is
//! maintained relative to the tree's comparator: keys in a node's left
//! subtree compare `Less` than the node's key, keys in its right subtree
//! compare `Greater` *or `Equal`*: duplicates are allowed and always land
//! to the right of their equal-keyed ancestors.
//!
//! There is no rebalancing. The tree's shape is whatever the insertion
//! order dictates, so adversarial (e.g. sorted) input degrades every
//! O(depth) operation to O(n).
//!
//! # Examples
//!
//! ```
//! use arena_collections::bst::Tree;
//! use arena_collections::Mode;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&1, Mode::Iterative), None);
//!
//! let one = tree.insert(1, Mode::Iterative);
//! assert_eq!(tree.search(&1, Mode::Iterative), Some(one));
//!
//! // Deleting a node returns its key and invalidates the handle.
//! assert_eq!(tree.delete(one), Ok(1));
//! assert_eq!(tree.search(&1, Mode::Iterative), None);
//! ```

use std::cmp::Ordering;

use crate::arena::{Arena, NodeId};
use crate::{Error, Mode};

fn default_comparator<K: Ord>(a: &K, b: &K) -> Ordering {
    a.cmp(b)
}

struct Node<K> {
    key: K,
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

/// An unbalanced Binary Search Tree ordered by a caller-supplied
/// comparator.
///
/// The comparator defaults to `K::cmp` behind a `fn` pointer so `Tree::new`
/// works for any `K: Ord`; [`Tree::with_comparator`] accepts any
/// `Fn(&K, &K) -> Ordering` for keys with no intrinsic order. The
/// comparator must be a total order; the tree does not validate this.
pub struct Tree<K, C = fn(&K, &K) -> Ordering>
where
    C: Fn(&K, &K) -> Ordering,
{
    arena: Arena<Node<K>>,
    root: Option<NodeId>,
    comparator: C,
}

impl<K: Ord> Tree<K> {
    /// Generates a new, empty `Tree` ordered by `K::cmp`.
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K: Ord> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> Tree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    /// Generates a new, empty `Tree` that compares keys with `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            comparator,
        }
    }

    /// Replaces the comparator without rebuilding the tree.
    ///
    /// Nodes already in the tree keep their positions; if the new
    /// comparator orders existing keys differently than the one they were
    /// inserted under, subsequent searches may miss them.
    pub fn set_comparator(&mut self, comparator: C) {
        self.comparator = comparator;
    }

    /// Handle of the root node, or `None` for the empty tree.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Number of nodes currently in the tree.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// True iff the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.root.is_none(), self.arena.is_empty());
        self.root.is_none()
    }

    /// Reads the key of the node named by `id`. `None` if the handle is
    /// stale.
    pub fn key(&self, id: NodeId) -> Option<&K> {
        self.arena.get(id).map(|node| &node.key)
    }

    /// Inserts `key` as a new leaf and returns its handle.
    ///
    /// The walk from the root goes left when the new key compares `Less`
    /// than the current node's key and right otherwise, so equal keys are
    /// routed into the right subtree. The iterative and recursive modes
    /// build identically-shaped trees.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_collections::bst::Tree;
    /// use arena_collections::Mode;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2, Mode::Iterative);
    /// let dup = tree.insert(2, Mode::Recursive);
    ///
    /// // Both copies are present.
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.key(dup), Some(&2));
    /// ```
    pub fn insert(&mut self, key: K, mode: Mode) -> NodeId {
        let new = self.arena.alloc(Node {
            key,
            parent: None,
            left: None,
            right: None,
        });
        match mode {
            Mode::Iterative => self.iterative_insert(new),
            Mode::Recursive => match self.root {
                Some(root) => self.recursive_insert(root, new),
                None => self.root = Some(new),
            },
        }
        new
    }

    fn iterative_insert(&mut self, new: NodeId) {
        let mut prev = None;
        let mut curr = self.root;
        while let Some(curr_id) = curr {
            prev = Some(curr_id);
            curr = if self.compare_nodes(new, curr_id) == Ordering::Less {
                self.node(curr_id).left
            } else {
                self.node(curr_id).right
            };
        }

        self.node_mut(new).parent = prev;
        match prev {
            // The tree was empty; the new node becomes the root.
            None => self.root = Some(new),
            Some(parent) => {
                if self.compare_nodes(new, parent) == Ordering::Less {
                    self.node_mut(parent).left = Some(new);
                } else {
                    self.node_mut(parent).right = Some(new);
                }
            }
        }
    }

    fn recursive_insert(&mut self, curr: NodeId, new: NodeId) {
        if self.compare_nodes(new, curr) == Ordering::Less {
            match self.node(curr).left {
                Some(left) => self.recursive_insert(left, new),
                None => {
                    self.node_mut(curr).left = Some(new);
                    self.node_mut(new).parent = Some(curr);
                }
            }
        } else {
            match self.node(curr).right {
                Some(right) => self.recursive_insert(right, new),
                None => {
                    self.node_mut(curr).right = Some(new);
                    self.node_mut(new).parent = Some(curr);
                }
            }
        }
    }

    /// Finds a node whose key compares `Equal` to `target`, or `None` when
    /// no such node exists. Read-only; both modes agree.
    ///
    /// With duplicate keys this returns the shallowest match on the descent
    /// path from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_collections::bst::Tree;
    /// use arena_collections::Mode;
    ///
    /// let mut tree = Tree::new();
    /// let node = tree.insert(1, Mode::Iterative);
    ///
    /// assert_eq!(tree.search(&1, Mode::Iterative), Some(node));
    /// assert_eq!(tree.search(&42, Mode::Recursive), None);
    /// ```
    pub fn search(&self, target: &K, mode: Mode) -> Option<NodeId> {
        match mode {
            Mode::Iterative => self.iterative_search(target),
            Mode::Recursive => self.recursive_search(self.root, target),
        }
    }

    fn iterative_search(&self, target: &K) -> Option<NodeId> {
        let mut curr = self.root;
        while let Some(id) = curr {
            let node = self.node(id);
            curr = match (self.comparator)(target, &node.key) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(id),
                Ordering::Greater => node.right,
            };
        }
        None
    }

    fn recursive_search(&self, curr: Option<NodeId>, target: &K) -> Option<NodeId> {
        let id = curr?;
        let node = self.node(id);
        match (self.comparator)(target, &node.key) {
            Ordering::Less => self.recursive_search(node.left, target),
            Ordering::Equal => Some(id),
            Ordering::Greater => self.recursive_search(node.right, target),
        }
    }

    /// Smallest node of the subtree rooted at `start`, found by following
    /// left links until none remain. O(depth).
    ///
    /// # Errors
    ///
    /// [`Error::StaleHandle`] if `start` no longer names a live node.
    pub fn min(&self, start: NodeId) -> Result<NodeId, Error> {
        self.live(start)?;
        Ok(self.subtree_min(start))
    }

    /// Largest node of the subtree rooted at `start`, found by following
    /// right links until none remain. O(depth).
    ///
    /// # Errors
    ///
    /// [`Error::StaleHandle`] if `start` no longer names a live node.
    pub fn max(&self, start: NodeId) -> Result<NodeId, Error> {
        self.live(start)?;
        Ok(self.subtree_max(start))
    }

    fn subtree_min(&self, mut curr: NodeId) -> NodeId {
        while let Some(left) = self.node(curr).left {
            curr = left;
        }
        curr
    }

    fn subtree_max(&self, mut curr: NodeId) -> NodeId {
        while let Some(right) = self.node(curr).right {
            curr = right;
        }
        curr
    }

    /// The node immediately before `id` in inorder sequence: the maximum of
    /// its left subtree when one exists, otherwise the nearest ancestor
    /// reached from a right child. `Ok(None)` when `id` is the minimum.
    ///
    /// # Errors
    ///
    /// [`Error::StaleHandle`] if `id` no longer names a live node.
    pub fn predecessor(&self, id: NodeId) -> Result<Option<NodeId>, Error> {
        self.live(id)?;
        if let Some(left) = self.node(id).left {
            return Ok(Some(self.subtree_max(left)));
        }

        // Climb while we arrive from a left child; the first ancestor we
        // reach from its right child precedes `id` in inorder.
        let mut node = id;
        let mut pred = self.node(id).parent;
        while let Some(parent) = pred {
            if self.node(parent).left != Some(node) {
                break;
            }
            node = parent;
            pred = self.node(parent).parent;
        }
        Ok(pred)
    }

    /// The node immediately after `id` in inorder sequence: the minimum of
    /// its right subtree when one exists, otherwise the nearest ancestor
    /// reached from a left child. `Ok(None)` when `id` is the maximum.
    ///
    /// # Errors
    ///
    /// [`Error::StaleHandle`] if `id` no longer names a live node.
    pub fn successor(&self, id: NodeId) -> Result<Option<NodeId>, Error> {
        self.live(id)?;
        if let Some(right) = self.node(id).right {
            return Ok(Some(self.subtree_min(right)));
        }

        let mut node = id;
        let mut succ = self.node(id).parent;
        while let Some(parent) = succ {
            if self.node(parent).right != Some(node) {
                break;
            }
            node = parent;
            succ = self.node(parent).parent;
        }
        Ok(succ)
    }

    /// Removes the node named by `id`, returning its key and releasing its
    /// arena slot. All other handles stay valid.
    ///
    /// A node with fewer than two children is replaced in its parent's slot
    /// by its only subtree (possibly none). A node with two children is
    /// replaced by the minimum of its right subtree, spliced out of its own
    /// position first. Either way the BST property is preserved without any
    /// rebalancing.
    ///
    /// # Errors
    ///
    /// [`Error::StaleHandle`] if `id` no longer names a live node; the tree
    /// is untouched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_collections::bst::Tree;
    /// use arena_collections::{Error, Mode};
    ///
    /// let mut tree = Tree::new();
    /// let node = tree.insert(1, Mode::Iterative);
    ///
    /// assert_eq!(tree.delete(node), Ok(1));
    /// // The handle is now stale.
    /// assert_eq!(tree.delete(node), Err(Error::StaleHandle));
    /// ```
    pub fn delete(&mut self, id: NodeId) -> Result<K, Error> {
        self.live(id)?;
        match (self.node(id).left, self.node(id).right) {
            (None, right) => self.transplant(id, right),
            (left, None) => self.transplant(id, left),
            (Some(left), Some(right)) => {
                let min = self.subtree_min(right);
                if self.node(min).parent != Some(id) {
                    // Splice the minimum out of its own position before it
                    // adopts the deleted node's right subtree.
                    let min_right = self.node(min).right;
                    self.transplant(min, min_right);
                    self.node_mut(min).right = Some(right);
                    self.node_mut(right).parent = Some(min);
                }
                self.transplant(id, Some(min));
                self.node_mut(min).left = Some(left);
                self.node_mut(left).parent = Some(min);
            }
        }

        let node = self.arena.free(id).expect("delete target was checked live");
        Ok(node.key)
    }

    /// Replaces the subtree rooted at `u` with the subtree rooted at `v` in
    /// `u`'s parent's child slot. `v`'s own children are untouched; `u`'s
    /// links are left dangling for the caller to rewire or free.
    fn transplant(&mut self, u: NodeId, v: Option<NodeId>) {
        let parent = self.node(u).parent;
        match parent {
            None => self.root = v,
            Some(p) => {
                if self.node(p).left == Some(u) {
                    self.node_mut(p).left = v;
                } else {
                    self.node_mut(p).right = v;
                }
            }
        }
        if let Some(v) = v {
            self.node_mut(v).parent = parent;
        }
    }

    /// Visits the subtree rooted at `start` in inorder (left, self, right),
    /// calling `visit` once per key. Inorder visits keys in non-decreasing
    /// comparator order. No-op when `start` is `None`; read-only.
    ///
    /// # Errors
    ///
    /// [`Error::StaleHandle`] if `start` is `Some` but no longer names a
    /// live node.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_collections::bst::Tree;
    /// use arena_collections::Mode;
    ///
    /// let mut tree = Tree::new();
    /// for key in [2, 1, 3] {
    ///     tree.insert(key, Mode::Iterative);
    /// }
    ///
    /// let mut keys = Vec::new();
    /// tree.inorder_walk(tree.root(), |k| keys.push(*k)).unwrap();
    /// assert_eq!(keys, [1, 2, 3]);
    /// ```
    pub fn inorder_walk<F>(&self, start: Option<NodeId>, mut visit: F) -> Result<(), Error>
    where
        F: FnMut(&K),
    {
        self.check_walk_start(start)?;
        self.walk_inorder(start, &mut visit);
        Ok(())
    }

    /// Visits the subtree rooted at `start` in preorder (self, left,
    /// right). Same contract as [`Tree::inorder_walk`] otherwise.
    pub fn preorder_walk<F>(&self, start: Option<NodeId>, mut visit: F) -> Result<(), Error>
    where
        F: FnMut(&K),
    {
        self.check_walk_start(start)?;
        self.walk_preorder(start, &mut visit);
        Ok(())
    }

    /// Visits the subtree rooted at `start` in postorder (left, right,
    /// self). Same contract as [`Tree::inorder_walk`] otherwise.
    pub fn postorder_walk<F>(&self, start: Option<NodeId>, mut visit: F) -> Result<(), Error>
    where
        F: FnMut(&K),
    {
        self.check_walk_start(start)?;
        self.walk_postorder(start, &mut visit);
        Ok(())
    }

    fn check_walk_start(&self, start: Option<NodeId>) -> Result<(), Error> {
        match start {
            Some(id) => self.live(id),
            None => Ok(()),
        }
    }

    fn walk_inorder<F: FnMut(&K)>(&self, curr: Option<NodeId>, visit: &mut F) {
        if let Some(id) = curr {
            let node = self.node(id);
            self.walk_inorder(node.left, visit);
            visit(&node.key);
            self.walk_inorder(node.right, visit);
        }
    }

    fn walk_preorder<F: FnMut(&K)>(&self, curr: Option<NodeId>, visit: &mut F) {
        if let Some(id) = curr {
            let node = self.node(id);
            visit(&node.key);
            self.walk_preorder(node.left, visit);
            self.walk_preorder(node.right, visit);
        }
    }

    fn walk_postorder<F: FnMut(&K)>(&self, curr: Option<NodeId>, visit: &mut F) {
        if let Some(id) = curr {
            let node = self.node(id);
            self.walk_postorder(node.left, visit);
            self.walk_postorder(node.right, visit);
            visit(&node.key);
        }
    }

    fn compare_nodes(&self, a: NodeId, b: NodeId) -> Ordering {
        (self.comparator)(&self.node(a).key, &self.node(b).key)
    }

    fn live(&self, id: NodeId) -> Result<(), Error> {
        if self.arena.contains(id) {
            Ok(())
        } else {
            Err(Error::StaleHandle)
        }
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
