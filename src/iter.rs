use core::iter::FusedIterator;

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::Redwood;
use crate::node::NodeIndex;

/// Ascending iterator over the values of a [`Redwood`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct RedwoodSortedIterator<'a, T> {
    pub(crate) tree: &'a Redwood<T>,
    pub(crate) curr: Option<NodeIndex>,
    pub(crate) stack: Vec<NodeIndex>,
}

impl<'a, T> Iterator for RedwoodSortedIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(curr) = self.curr {
            self.stack.push(curr);
            self.curr = self.tree.get_node_by_idx(curr).left_child();
        }

        let node = self.stack.pop()?;
        self.curr = self.tree.get_node_by_idx(node).right_child();

        Some(&self.tree.get_node_by_idx(node).value)
    }
}

impl<T> FusedIterator for RedwoodSortedIterator<'_, T> {}

/// Breadth-first iterator over the values of a [`Redwood`], left to right on each level.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct RedwoodLevelOrderIterator<'a, T> {
    pub(crate) tree: &'a Redwood<T>,
    pub(crate) queue: VecDeque<NodeIndex>,
}

impl<'a, T> Iterator for RedwoodLevelOrderIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.tree.get_node_by_idx(self.queue.pop_front()?);

        self.queue.extend(node.left_child());
        self.queue.extend(node.right_child());

        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.tree.len()))
    }
}

impl<T> FusedIterator for RedwoodLevelOrderIterator<'_, T> {}

impl<T> Redwood<T> {
    /// Iterates over the values in ascending order.
    #[must_use]
    pub fn iter(&self) -> RedwoodSortedIterator<'_, T> {
        RedwoodSortedIterator {
            tree: self,
            curr: self.root,
            stack: Vec::new(),
        }
    }

    /// Iterates over the values level by level, starting from the root.
    #[must_use]
    pub fn level_order(&self) -> RedwoodLevelOrderIterator<'_, T> {
        RedwoodLevelOrderIterator {
            tree: self,
            queue: self.root.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Redwood<T> {
    type Item = &'a T;
    type IntoIter = RedwoodSortedIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
