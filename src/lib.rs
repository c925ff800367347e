//! Red-Black Tree based ordered set.
//!
//! Nodes are stored in a single vector and refer to each other by index, so parent back-links
//! never create ownership cycles. Values are unique and totally ordered; insertion is
//! `O(log n)` thanks to the usual recoloring / rotation repair after each insert.
//!
//! ```rust
//! use redwood::{Redwood, TreeError};
//!
//! let mut tree = Redwood::new();
//! tree.insert(420).unwrap();
//! tree.insert(911).unwrap();
//! tree.insert(69).unwrap();
//!
//! assert_eq!(tree.insert(69), Err(TreeError::DuplicateValue(69)));
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.to_in_order_sequence(), vec![&69, &420, &911]);
//! ```

extern crate alloc;

mod balance;
mod error;
mod iter;
mod node;
#[cfg(test)]
mod test_utils;

use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use log::{debug, error};

pub use error::TreeError;
pub use iter::{RedwoodLevelOrderIterator, RedwoodSortedIterator};
use node::{Direction, NodeColor, NodeIndex, RedwoodNode};

/// An ordered set of unique values, kept balanced as a red-black tree.
///
/// Nodes are never removed, so the storage length is also the number of stored values.
#[derive(Debug)]
pub struct Redwood<T> {
    storage: Vec<RedwoodNode<T>>,
    root: Option<NodeIndex>,
}

impl<T> Redwood<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Vec::new(),
            root: None,
        }
    }

    /// Creates an empty tree with room for at least `capacity` values before reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
            root: None,
        }
    }

    /// Reserves room for at least `additional` more values.
    pub fn reserve(&mut self, additional: usize) {
        self.storage.reserve(additional);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Smallest value of the tree.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.extremum(Direction::Left)
    }

    /// Largest value of the tree.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.extremum(Direction::Right)
    }

    /// Number of nodes on the longest path from the root down to a leaf.
    #[must_use]
    pub fn height(&self) -> usize {
        self.subtree_height(self.root)
    }

    /// Values in ascending order.
    #[must_use]
    pub fn to_in_order_sequence(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Values level by level, left to right, starting from the root.
    #[must_use]
    pub fn to_level_order_sequence(&self) -> Vec<&T> {
        self.level_order().collect()
    }

    pub(crate) fn get_node_by_idx(&self, node_idx: NodeIndex) -> &RedwoodNode<T> {
        &self.storage[node_idx.0]
    }

    pub(crate) fn get_node_by_idx_mut(&mut self, node_idx: NodeIndex) -> &mut RedwoodNode<T> {
        &mut self.storage[node_idx.0]
    }

    /// Color of a node, empty subtrees being black.
    pub(crate) fn color_of(&self, node_idx: Option<NodeIndex>) -> NodeColor {
        node_idx.map_or(NodeColor::Black, |idx| self.get_node_by_idx(idx).color)
    }

    pub(crate) fn set_color(&mut self, node_idx: NodeIndex, color: NodeColor) {
        self.get_node_by_idx_mut(node_idx).color = color;
    }

    /// Returns `true` if the node has a parent and is that parent's left child.
    pub(crate) fn is_left_child(&self, node_idx: NodeIndex) -> bool {
        let Some(parent) = self.get_node_by_idx(node_idx).parent else {
            return false;
        };

        self.get_node_by_idx(parent).left_child() == Some(node_idx)
    }

    /// Side of its parent the node hangs from. Only meaningful for non-root nodes.
    pub(crate) fn direction_of(&self, node_idx: NodeIndex) -> Direction {
        if self.is_left_child(node_idx) {
            Direction::Left
        } else {
            Direction::Right
        }
    }

    fn extremum(&self, dir: Direction) -> Option<&T> {
        let mut current_node = self.root?;

        while let Some(next) = self.get_node_by_idx(current_node).child(dir) {
            current_node = next;
        }

        Some(&self.get_node_by_idx(current_node).value)
    }

    fn subtree_height(&self, node_idx: Option<NodeIndex>) -> usize {
        match node_idx {
            None => 0,
            Some(idx) => {
                let node = self.get_node_by_idx(idx);
                let left = self.subtree_height(node.left_child());
                let right = self.subtree_height(node.right_child());

                1 + left.max(right)
            }
        }
    }
}

impl<T: Ord> Redwood<T> {
    /// Returns `true` if the tree stores a value equal to `value`.
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current_node = self.root;

        while let Some(curr_idx) = current_node {
            let curr_node_storage = self.get_node_by_idx(curr_idx);

            match value.cmp(curr_node_storage.value.borrow()) {
                Ordering::Less => {
                    current_node = curr_node_storage.left_child();
                }
                Ordering::Equal => {
                    return true;
                }
                Ordering::Greater => {
                    current_node = curr_node_storage.right_child();
                }
            }
        }

        false
    }

    /// Inserts a value into the tree.
    ///
    /// Fails with [`TreeError::DuplicateValue`] if an equal value is already stored, in which
    /// case the tree is left untouched and the value is handed back.
    ///
    /// ```rust
    /// # use redwood::Redwood;
    /// let mut tree = Redwood::new();
    ///
    /// assert!(tree.insert(5).is_ok());
    /// assert!(tree.insert(5).is_err());
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> Result<(), TreeError<T>> {
        let mut current_node = self.root;
        let mut parent_node = None;
        let mut side = Direction::Left;

        while let Some(curr_idx) = current_node {
            let curr_node_storage = self.get_node_by_idx(curr_idx);

            side = match value.cmp(&curr_node_storage.value) {
                Ordering::Less => Direction::Left,
                Ordering::Greater => Direction::Right,
                Ordering::Equal => {
                    debug!("rejected duplicate value (matches node {})", curr_idx.0);
                    return Err(TreeError::DuplicateValue(value));
                }
            };

            parent_node = current_node;
            current_node = curr_node_storage.child(side);
        }

        let new_node_pos = NodeIndex(self.storage.len());
        let mut new_node = RedwoodNode::new_isolated(value);
        new_node.parent = parent_node;
        self.storage.push(new_node);

        match parent_node {
            None => self.root = Some(new_node_pos),
            Some(parent_idx) => {
                let parent = self.get_node_by_idx_mut(parent_idx);
                parent.set_child(side, Some(new_node_pos));
                self.fix_red_violation(new_node_pos)?;
            }
        }

        if let Some(root) = self.root {
            self.set_color(root, NodeColor::Black);
        }

        Ok(())
    }
}

impl<T: fmt::Display> Redwood<T> {
    /// Renders the in-order traversal, e.g. `[ 1, 2, 3 ]`.
    #[must_use]
    pub fn to_in_order_string(&self) -> String {
        render_sequence(self.iter())
    }

    /// Renders the level-order traversal, e.g. `[ 2, 1, 3 ]`.
    #[must_use]
    pub fn to_level_order_string(&self) -> String {
        render_sequence(self.level_order())
    }
}

fn render_sequence<'a, T: fmt::Display + 'a>(values: impl Iterator<Item = &'a T>) -> String {
    let values: Vec<String> = values.map(ToString::to_string).collect();

    alloc::format!("[ {} ]", values.join(", "))
}

impl<T> Default for Redwood<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for Redwood<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "level order: {}\nin order: {}",
            self.to_level_order_string(),
            self.to_in_order_string()
        )
    }
}

impl<T: Ord> Extend<T> for Redwood<T> {
    /// Inserts every value, skipping the ones already present.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            match self.insert(value) {
                // duplicates are ignored
                Ok(()) | Err(TreeError::DuplicateValue(_)) => {}
                Err(err) => error!("bulk insertion failed: {err}"),
            }
        }
    }
}

impl<T: Ord> FromIterator<T> for Redwood<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);

        tree
    }
}
