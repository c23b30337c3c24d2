//! An unbalanced BST whose nodes know their parent.
//!
//! Nodes are stored in an arena owned by the [`Tree`]. Each node refers to its children and its
//! parent by arena [`Index`]. The child slots are what place a node in the tree; the `parent`
//! handle is only read when relinking during removal, so it never keeps anything alive.
//!
//! # Examples
//!
//! ```
//! use bstree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Equal values are never stored twice.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Taking a value hands it back.
//! assert_eq!(tree.take(&1), Some(1));
//! assert!(!tree.contains(&1));
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use generational_arena::{Arena, Index};
use log::{debug, trace};

use crate::error::{Error, Result};
use crate::iter::Iter;

/// An unbalanced Binary Search Tree of distinct values. This can be used for inserting, finding,
/// and removing values, and for walking them in ascending order.
#[derive(Clone)]
pub struct Tree<T> {
    nodes: Arena<Node<T>>,
    root: Option<Index>,
}

#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Option<Index>,
    pub(crate) right: Option<Index>,
    /// `None` only for the root.
    pub(crate) parent: Option<Index>,
}

impl<T> Node<T> {
    fn new(value: T, parent: Option<Index>) -> Self {
        Self {
            value,
            left: None,
            right: None,
            parent,
        }
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// The number of values stored in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0 and a tree with a single value has a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(Index, usize)> = self.root.map(|root| (root, 1)).into_iter().collect();
        while let Some((idx, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.nodes[idx];
            stack.extend(node.left.map(|left| (left, depth + 1)));
            stack.extend(node.right.map(|right| (right, depth + 1)));
        }
        height
    }

    /// Returns an iterator over the values of the tree in ascending order. Every call starts a
    /// fresh walk; the tree is never modified by iterating.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 7, 9].into_iter().collect();
    ///
    /// assert!(tree.iter().eq(&[3, 5, 7, 8, 9]));
    /// assert_eq!(tree.iter().count(), 5);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.nodes, self.root)
    }

    /// Inserts the given value into the tree. Returns `false`, leaving the tree untouched, if an
    /// equal value is already stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let Some(mut current) = self.root else {
            self.root = Some(self.nodes.insert(Node::new(value, None)));
            trace!("placed value at the root");
            return true;
        };

        let side = loop {
            let node = &self.nodes[current];
            let ordering = value.cmp(&node.value);
            let next = match ordering {
                Ordering::Less => node.left,
                Ordering::Equal => {
                    debug!("ignoring insert of a value already in the tree");
                    return false;
                }
                Ordering::Greater => node.right,
            };
            match next {
                Some(child) => current = child,
                None => break ordering,
            }
        };

        let new_node = self.nodes.insert(Node::new(value, Some(current)));
        let parent = &mut self.nodes[current];
        if side == Ordering::Less {
            parent.left = Some(new_node);
        } else {
            parent.right = Some(new_node);
        }
        trace!("placed value under {:?} ({:?})", current, side);

        if cfg!(debug_assertions) {
            self.assert_ordered_at(current);
        }
        true
    }

    /// Like [`Tree::insert`], but for callers holding a value that may be absent. An absent value
    /// is rejected with [`Error::InvalidArgument`] before the tree is touched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.try_insert(Some(1)), Ok(true));
    /// assert!(matches!(tree.try_insert(None), Err(Error::InvalidArgument(_))));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn try_insert(&mut self, value: Option<T>) -> Result<bool>
    where
        T: Ord,
    {
        match value {
            Some(value) => Ok(self.insert(value)),
            None => {
                debug!("rejecting insert of an absent value");
                Err(Error::InvalidArgument("cannot insert an absent value"))
            }
        }
    }

    /// Whether a value equal to the given one is stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert("Telerik".to_string());
    ///
    /// assert!(tree.contains("Telerik"));
    /// assert!(!tree.contains("IBM"));
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(value).is_some()
    }

    /// Removes the value equal to the given one from the tree. Returns whether anything was
    /// removed; removing a value that isn't stored does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8, 7, 9].into_iter().collect();
    ///
    /// assert!(tree.remove(&8));
    /// assert!(!tree.remove(&8));
    /// assert!(tree.iter().eq(&[3, 5, 7, 9]));
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.take(value).is_some()
    }

    /// Removes the value equal to the given one from the tree and returns it, or `None` if no
    /// such value is stored.
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.find(value) {
            Some(idx) => Some(self.take_node(idx)),
            None => {
                debug!("ignoring removal of a value not in the tree");
                None
            }
        }
    }

    /// Descends from the root to the node holding a value equal to `value`.
    pub(crate) fn find<Q>(&self, value: &Q) -> Option<Index>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root;
        while let Some(idx) = current {
            let node = &self.nodes[idx];
            current = match value.cmp(node.value.borrow()) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(idx),
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Removes the value held by the node at `target` from the tree.
    ///
    /// When `target` has two children, the node itself stays where it is and receives its
    /// in-order successor's value. The successor node, which has no left child, is the one that
    /// gets spliced out. So `target` may survive holding a different value.
    fn take_node(&mut self, target: Index) -> T {
        let node = &self.nodes[target];
        match (node.left, node.right) {
            (Some(_), Some(right)) => {
                let successor = self.leftmost(right);
                trace!("{:?} has two children, promoting successor {:?}", target, successor);
                let promoted = self.splice_out(successor);
                std::mem::replace(&mut self.nodes[target].value, promoted)
            }
            _ => self.splice_out(target),
        }
    }

    /// Unlinks a node with at most one child, handing that child (if any) to the node's parent,
    /// and releases it.
    fn splice_out(&mut self, idx: Index) -> T {
        let Node {
            value,
            left,
            right,
            parent,
        } = self
            .nodes
            .remove(idx)
            .expect("Spliced node must be in the arena");
        debug_assert!(left.is_none() || right.is_none());

        let child = left.or(right);
        if let Some(child) = child {
            self.nodes[child].parent = parent;
        }
        match parent {
            None => self.root = child,
            Some(parent) => {
                let parent = &mut self.nodes[parent];
                if parent.left == Some(idx) {
                    parent.left = child;
                } else {
                    parent.right = child;
                }
            }
        }
        trace!("spliced out {:?}", idx);
        value
    }

    /// Follows left children from `idx` until there are none.
    fn leftmost(&self, mut idx: Index) -> Index {
        while let Some(left) = self.nodes[idx].left {
            idx = left;
        }
        idx
    }

    /// Panics if the children of the node at `idx` are out of order with it.
    fn assert_ordered_at(&self, idx: Index)
    where
        T: Ord,
    {
        let node = &self.nodes[idx];
        if let Some(left) = node.left {
            assert!(self.nodes[left].value < node.value);
        }
        if let Some(right) = node.right {
            assert!(self.nodes[right].value > node.value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// Two trees are equal when they hold the same values, whatever their shapes.
impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Tree<T> {}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len())
            .field("values", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

/// Writes the values in ascending order separated by single spaces.
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
impl<T: Ord> Tree<T> {
    /// Walks the whole tree checking that every node is ordered against its children, that every
    /// child points back at the node holding it, that the root has no parent, and that every node
    /// in the arena is reachable exactly once from the root.
    pub(crate) fn assert_consistent(&self) {
        match self.root {
            None => assert_eq!(self.nodes.len(), 0, "empty tree still owns nodes"),
            Some(root) => assert_eq!(self.nodes[root].parent, None, "root has a parent"),
        }

        let mut visited = 0;
        let mut stack: Vec<Index> = self.root.into_iter().collect();
        while let Some(idx) = stack.pop() {
            visited += 1;
            assert!(visited <= self.nodes.len(), "cycle in tree");

            self.assert_ordered_at(idx);
            let node = &self.nodes[idx];
            for child in node.left.into_iter().chain(node.right) {
                assert_eq!(self.nodes[child].parent, Some(idx), "stale parent link");
                stack.push(child);
            }
        }
        assert_eq!(visited, self.nodes.len(), "unreachable nodes in arena");

        // Local ordering plus a strictly ascending walk gives the full BST order.
        assert!(self.iter().zip(self.iter().skip(1)).all(|(a, b)| a < b));
    }
}
