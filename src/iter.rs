use std::iter::FusedIterator;

use generational_arena::{Arena, Index};

use crate::tree::Node;

/// An in-order iterator over the values of a [`Tree`](crate::Tree), created by
/// [`Tree::iter`](crate::Tree::iter).
///
/// The walk keeps its own stack of pending nodes instead of recursing, so a tree that has
/// degenerated into a long chain is walked in constant call depth.
pub struct Iter<'a, T> {
    nodes: &'a Arena<Node<T>>,
    /// Nodes whose left subtree has been pushed but whose value hasn't been yielded yet.
    stack: Vec<Index>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(nodes: &'a Arena<Node<T>>, root: Option<Index>) -> Self {
        let mut iter = Self {
            nodes,
            stack: Vec::new(),
            remaining: nodes.len(),
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<Index>) {
        while let Some(idx) = current {
            self.stack.push(idx);
            current = self.nodes[idx].left;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let nodes: &'a Arena<Node<T>> = self.nodes;
        let node = &nodes[idx];
        self.push_left_spine(node.right);
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Manual implementation of `Clone` so iterators can be cloned when `T` isn't `Clone`.
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}
