//! This crate exposes an unbalanced Binary Search Tree (BST) over any totally
//! ordered element type.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined
//! as the longest path from the root `Node` to a leaf `Node`). This tree does no
//! rebalancing, so inserting values in sorted order degrades it into a chain with
//! a height of `N`. Every walk over the tree is iterative so such chains are
//! handled without recursion.
//!
//! BSTs also naturally support sorted iteration by visiting the left subtree,
//! then the subtree root, then the right subtree. See [`Tree::iter`].
//!
//! # Examples
//!
//! ```
//! use bstree::Tree;
//!
//! let mut tree = Tree::new();
//! tree.insert("Telerik".to_string());
//! tree.insert("Google".to_string());
//! tree.insert("Microsoft".to_string());
//!
//! assert_eq!(tree.to_string(), "Google Microsoft Telerik");
//! assert!(tree.contains("Telerik"));
//! assert!(!tree.contains("IBM"));
//!
//! tree.remove("Telerik");
//! assert!(!tree.contains("Telerik"));
//! assert_eq!(tree.to_string(), "Google Microsoft");
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod iter;
mod tree;

#[cfg(test)]
mod test;

pub use error::{Error, Result};
pub use iter::Iter;
pub use tree::Tree;
