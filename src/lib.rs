//! This crate exposes an unbalanced Binary Search Tree (BST) over
//! totally-ordered values.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value
//! and will sometimes have child `Node`s. The most important invariants
//! of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support
//! sorted traversal by visiting the left subtree, then the subtree root, then
//! the right subtree.
//!
//! The tree here does **not** rebalance itself. Inserting values in a
//! friendly order keeps the height near `O(lg N)` (where `N` is the number
//! of nodes in the tree) and operations cheap, while inserting values in
//! sorted order degenerates the tree into a linked list with `O(N)`
//! operations. That asymmetry is inherent to unbalanced BSTs and is left
//! visible rather than papered over.

#![deny(missing_docs)]


pub mod unbalanced;
