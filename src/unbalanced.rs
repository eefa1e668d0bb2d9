//! A plain, unbalanced BST. Nodes are heap allocated and exclusively owned
//! by their parent, so the structure is a strict tree with no sharing and
//! no back-references. Nothing here rotates or rebalances; the shape of the
//! tree is exactly the shape the insertion order dictates.
//!
//! `insert`/`find` come in two independent formulations: an iterative walk
//! over child links and a structural recursion that rebuilds each
//! ancestor's link on the way back up. Both implement the same contract and
//! produce identical trees, which makes them convenient to test against
//! each other. The iterative forms use constant stack space and are the
//! safer choice when the tree may be degenerate.
//!
//! # Examples
//!
//! ```
//! use bstree::unbalanced::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.find(&1).is_none());
//!
//! tree.insert(2);
//! tree.insert(1);
//! tree.insert(3);
//!
//! // In-order traversal of a BST is always sorted.
//! assert_eq!(tree.dfs_in_order(), vec![&1, &2, &3]);
//!
//! // Removing a value reports what was removed.
//! assert_eq!(tree.remove(&2), Some(2));
//! assert_eq!(tree.dfs_in_order(), vec![&1, &3]);
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::mem;

/// A binary search tree storing each distinct value exactly once. The tree
/// never rebalances itself: operations cost `O(height)`, which is `O(lg N)`
/// for friendly insertion orders and `O(N)` when values arrive pre-sorted.
#[derive(Debug, Clone)]
pub struct Tree<V> {
    root: Option<Box<Node<V>>>,
    len: usize,
}

impl<V> Default for Tree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Tree<V> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Generates a `Tree` pre-seeded with a single root value.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::unbalanced::Tree;
    ///
    /// let tree = Tree::with_root(7);
    /// assert_eq!(tree.len(), 1);
    /// assert!(tree.find(&7).is_some());
    /// ```
    pub fn with_root(value: V) -> Self {
        Self {
            root: Some(Box::new(Node::new(value))),
            len: 1,
        }
    }

    /// Returns the number of values stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the root node, if the tree is non-empty. Together with
    /// [`Node::left`]/[`Node::right`] this allows read-only walks over the
    /// structure itself.
    pub fn root(&self) -> Option<&Node<V>> {
        self.root.as_deref()
    }

    /// Returns `true` if the tree stores no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts the given value, keeping the tree's ordering invariant.
    /// Returns whether a new node was attached: inserting a value that is
    /// already present is a no-op and returns `false`.
    ///
    /// This walks the tree iteratively, so it uses constant stack space
    /// even on a degenerate tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: V) -> bool
    where
        V: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            match value.cmp(&node.value) {
                Ordering::Less => link = &mut node.left,
                Ordering::Equal => return false,
                Ordering::Greater => link = &mut node.right,
            }
        }
        *link = Some(Box::new(Node::new(value)));
        self.len += 1;
        true
    }

    /// Inserts the given value using structural recursion, rebuilding each
    /// ancestor's child link on the way back up. Same contract as
    /// [`insert`][Self::insert], and for any insertion sequence the two
    /// produce trees of identical shape.
    ///
    /// Recursion depth equals the tree height, so prefer
    /// [`insert`][Self::insert] when the tree may be deeply unbalanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert_recursively(1));
    /// assert!(!tree.insert_recursively(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert_recursively(&mut self, value: V) -> bool
    where
        V: Ord,
    {
        let (root, inserted) = Self::insert_node(self.root.take(), value);
        self.root = root;
        if inserted {
            self.len += 1;
        }
        inserted
    }

    fn insert_node(node: Option<Box<Node<V>>>, value: V) -> (Option<Box<Node<V>>>, bool)
    where
        V: Ord,
    {
        match node {
            None => (Some(Box::new(Node::new(value))), true),
            Some(mut n) => {
                let inserted = match value.cmp(&n.value) {
                    Ordering::Less => {
                        let (left, inserted) = Self::insert_node(n.left.take(), value);
                        n.left = left;
                        inserted
                    }
                    Ordering::Equal => false,
                    Ordering::Greater => {
                        let (right, inserted) = Self::insert_node(n.right.take(), value);
                        n.right = right;
                        inserted
                    }
                };
                (Some(n), inserted)
            }
        }
    }

    /// Potentially finds the node holding the given value. Absence is a
    /// normal outcome: a miss returns `None`, never an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1).map(|node| node.value()), Some(&1));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &V) -> Option<&Node<V>>
    where
        V: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match value.cmp(&node.value) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => current = node.right.as_deref(),
            }
        }
        None
    }

    /// Recursive formulation of [`find`][Self::find]. Agrees with the
    /// iterative form on every query.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find_recursively(&1).map(|node| node.value()), Some(&1));
    /// assert!(tree.find_recursively(&42).is_none());
    /// ```
    pub fn find_recursively(&self, value: &V) -> Option<&Node<V>>
    where
        V: Ord,
    {
        Self::find_node(self.root.as_deref(), value)
    }

    fn find_node<'a>(node: Option<&'a Node<V>>, value: &V) -> Option<&'a Node<V>>
    where
        V: Ord,
    {
        let node = node?;
        match value.cmp(&node.value) {
            Ordering::Less => Self::find_node(node.left.as_deref(), value),
            Ordering::Equal => Some(node),
            Ordering::Greater => Self::find_node(node.right.as_deref(), value),
        }
    }

    /// Returns the values in pre-order: each node before its left subtree,
    /// then its right subtree. Empty tree gives an empty `Vec`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for v in [10, 5, 15, 3, 7, 12, 18] {
    ///     tree.insert(v);
    /// }
    ///
    /// assert_eq!(tree.dfs_pre_order(), vec![&10, &5, &3, &7, &15, &12, &18]);
    /// ```
    pub fn dfs_pre_order(&self) -> Vec<&V> {
        let mut out = Vec::with_capacity(self.len);
        Self::pre_order(self.root.as_deref(), &mut out);
        out
    }

    fn pre_order<'a>(node: Option<&'a Node<V>>, out: &mut Vec<&'a V>) {
        if let Some(node) = node {
            out.push(&node.value);
            Self::pre_order(node.left.as_deref(), out);
            Self::pre_order(node.right.as_deref(), out);
        }
    }

    /// Returns the values in in-order: left subtree, node, right subtree.
    /// For any valid BST this is strictly ascending, which makes it the
    /// canonical correctness check for the whole structure.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for v in [10, 5, 15, 3, 7, 12, 18] {
    ///     tree.insert(v);
    /// }
    ///
    /// assert_eq!(tree.dfs_in_order(), vec![&3, &5, &7, &10, &12, &15, &18]);
    /// ```
    pub fn dfs_in_order(&self) -> Vec<&V> {
        let mut out = Vec::with_capacity(self.len);
        Self::in_order(self.root.as_deref(), &mut out);
        out
    }

    fn in_order<'a>(node: Option<&'a Node<V>>, out: &mut Vec<&'a V>) {
        if let Some(node) = node {
            Self::in_order(node.left.as_deref(), out);
            out.push(&node.value);
            Self::in_order(node.right.as_deref(), out);
        }
    }

    /// Returns the values in post-order: left subtree, right subtree, node.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for v in [10, 5, 15, 3, 7, 12, 18] {
    ///     tree.insert(v);
    /// }
    ///
    /// assert_eq!(tree.dfs_post_order(), vec![&3, &7, &5, &12, &18, &15, &10]);
    /// ```
    pub fn dfs_post_order(&self) -> Vec<&V> {
        let mut out = Vec::with_capacity(self.len);
        Self::post_order(self.root.as_deref(), &mut out);
        out
    }

    fn post_order<'a>(node: Option<&'a Node<V>>, out: &mut Vec<&'a V>) {
        if let Some(node) = node {
            Self::post_order(node.left.as_deref(), out);
            Self::post_order(node.right.as_deref(), out);
            out.push(&node.value);
        }
    }

    /// Returns the values level by level, left-to-right within a level,
    /// using an explicit FIFO queue seeded with the root. Each dequeued
    /// node's children are enqueued left-then-right.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for v in [10, 5, 15, 3, 7, 12, 18] {
    ///     tree.insert(v);
    /// }
    ///
    /// assert_eq!(tree.bfs(), vec![&10, &5, &15, &3, &7, &12, &18]);
    /// ```
    pub fn bfs(&self) -> Vec<&V> {
        let mut out = Vec::with_capacity(self.len);
        let mut queue = VecDeque::new();
        if let Some(root) = self.root.as_deref() {
            queue.push_back(root);
        }
        while let Some(node) = queue.pop_front() {
            out.push(&node.value);
            if let Some(left) = node.left.as_deref() {
                queue.push_back(left);
            }
            if let Some(right) = node.right.as_deref() {
                queue.push_back(right);
            }
        }
        out
    }

    /// Removes the node holding the given value and returns the value that
    /// was removed, restoring the ordering invariant. Removing an absent
    /// value returns `None` and leaves the tree untouched.
    ///
    /// A node with two children isn't detached: its value is overwritten
    /// with its in-order successor (the minimum of its right subtree) and
    /// the successor's old node, which has at most one child, is removed
    /// from the right subtree instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for v in [10, 5, 15, 3, 7, 12, 18] {
    ///     tree.insert(v);
    /// }
    ///
    /// // 5 has two children; its slot is taken over by its successor, 7.
    /// assert_eq!(tree.remove(&5), Some(5));
    /// assert_eq!(tree.dfs_in_order(), vec![&3, &7, &10, &12, &15, &18]);
    ///
    /// // Removing a value that isn't there is a normal outcome.
    /// assert_eq!(tree.remove(&99), None);
    /// ```
    pub fn remove(&mut self, value: &V) -> Option<V>
    where
        V: Ord,
    {
        let (root, removed) = Self::remove_node(self.root.take(), value);
        self.root = root;
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    fn remove_node(node: Option<Box<Node<V>>>, value: &V) -> (Option<Box<Node<V>>>, Option<V>)
    where
        V: Ord,
    {
        match node {
            None => (None, None),
            Some(mut n) => match value.cmp(&n.value) {
                Ordering::Less => {
                    let (left, removed) = Self::remove_node(n.left.take(), value);
                    n.left = left;
                    (Some(n), removed)
                }
                Ordering::Greater => {
                    let (right, removed) = Self::remove_node(n.right.take(), value);
                    n.right = right;
                    (Some(n), removed)
                }
                Ordering::Equal => match (n.left.take(), n.right.take()) {
                    (None, None) => {
                        let Node { value, .. } = *n;
                        (None, Some(value))
                    }
                    (Some(child), None) | (None, Some(child)) => {
                        let Node { value, .. } = *n;
                        (Some(child), Some(value))
                    }
                    (Some(left), Some(right)) => {
                        let (right, successor) = Self::take_min(right);
                        let removed = mem::replace(&mut n.value, successor);
                        n.left = Some(left);
                        n.right = right;
                        (Some(n), Some(removed))
                    }
                },
            },
        }
    }

    /// Detaches the minimum-valued node of a non-empty subtree and returns
    /// its value along with the subtree's remaining root. Taking an owned
    /// node instead of an optional link makes the "subtree must be
    /// non-empty" precondition impossible to violate.
    fn take_min(mut node: Box<Node<V>>) -> (Option<Box<Node<V>>>, V) {
        match node.left.take() {
            Some(left) => {
                let (left, min) = Self::take_min(left);
                node.left = left;
                (Some(node), min)
            }
            None => {
                let Node { value, right, .. } = *node;
                (right, value)
            }
        }
    }

    /// Returns the smallest value in the tree, or `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.min(), None);
    ///
    /// tree.insert(10);
    /// tree.insert(5);
    /// assert_eq!(tree.min(), Some(&5));
    /// ```
    pub fn min(&self) -> Option<&V> {
        self.root.as_deref().map(Node::min_value)
    }

    /// Returns whether every node's left and right subtrees differ in
    /// height by at most 1.
    ///
    /// This is a single post-order pass that computes heights bottom-up and
    /// stops at the first imbalanced node it finds; no subtree is measured
    /// twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.is_balanced());
    ///
    /// // Sorted insertion order degenerates the tree into a chain.
    /// tree.insert(1);
    /// tree.insert(2);
    /// assert!(tree.is_balanced());
    /// tree.insert(3);
    /// assert!(!tree.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        Self::balanced_height(self.root.as_deref()).is_some()
    }

    /// Returns the height of the subtree, or `None` as soon as any node in
    /// it is height-imbalanced.
    fn balanced_height(node: Option<&Node<V>>) -> Option<usize> {
        match node {
            None => Some(0),
            Some(node) => {
                let left = Self::balanced_height(node.left.as_deref())?;
                let right = Self::balanced_height(node.right.as_deref())?;
                if left.abs_diff(right) <= 1 {
                    Some(left.max(right) + 1)
                } else {
                    None
                }
            }
        }
    }

    /// Returns the second-largest value in the tree, or `None` if the tree
    /// holds fewer than two values.
    ///
    /// The largest value sits at the bottom of the rightmost spine. The
    /// second-largest is that node's parent, unless the rightmost node has
    /// a left subtree, in which case it is that subtree's maximum.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.find_second_highest(), None);
    ///
    /// for v in [10, 5, 15, 3, 7, 12, 18] {
    ///     tree.insert(v);
    /// }
    /// assert_eq!(tree.find_second_highest(), Some(&15));
    /// ```
    pub fn find_second_highest(&self) -> Option<&V> {
        let mut node = self.root.as_deref()?;
        loop {
            let right = match node.right.as_deref() {
                Some(right) => right,
                None => break,
            };
            if right.right.is_none() {
                // `right` holds the largest value.
                return match right.left.as_deref() {
                    Some(left) => Some(left.max_value()),
                    None => Some(&node.value),
                };
            }
            node = right;
        }
        // The root holds the largest value.
        node.left.as_deref().map(Node::max_value)
    }
}

/// A `Node` holds one value and owns up to two children. `Node`s are only
/// created by insertion and only handed out by reference, so callers can
/// inspect the structure but never detach or share a subtree.
#[derive(Debug, Clone)]
pub struct Node<V> {
    value: V,
    left: Option<Box<Node<V>>>,
    right: Option<Box<Node<V>>>,
}

impl<V> Node<V> {
    fn new(value: V) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// This node's left child, if it has one.
    pub fn left(&self) -> Option<&Node<V>> {
        self.left.as_deref()
    }

    /// This node's right child, if it has one.
    pub fn right(&self) -> Option<&Node<V>> {
        self.right.as_deref()
    }

    fn min_value(&self) -> &V {
        let mut node = self;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        &node.value
    }

    fn max_value(&self) -> &V {
        let mut node = self;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        &node.value
    }
}
