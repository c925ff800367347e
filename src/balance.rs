use log::trace;

use crate::node::{Direction, NodeColor, NodeIndex};
use crate::{Redwood, TreeError};

impl<T> Redwood<T> {
    /// Swaps the positions of `child` and its direct parent `parent`.
    ///
    /// A left child causes a right rotation around `parent`, a right child a left rotation.
    /// Colors are left untouched.
    pub(crate) fn rotate(
        &mut self,
        child: NodeIndex,
        parent: NodeIndex,
    ) -> Result<(), TreeError<T>> {
        if child.0 >= self.storage.len() || parent.0 >= self.storage.len() {
            return Err(TreeError::InvalidArgument("node index out of bounds"));
        }

        let parent_node = self.get_node_by_idx(parent);
        let side = if parent_node.left_child() == Some(child) {
            Direction::Left
        } else if parent_node.right_child() == Some(child) {
            Direction::Right
        } else {
            return Err(TreeError::InvalidArgument(
                "rotated nodes are not a parent/child pair",
            ));
        };

        let rotation = match side {
            Direction::Left => "right",
            Direction::Right => "left",
        };
        trace!("rotating {rotation} around {}", parent.0);

        let grandparent_idx = parent_node.parent;
        let inner_idx = self.get_node_by_idx(child).child(side.opposite());

        self.get_node_by_idx_mut(parent).set_child(side, inner_idx);
        if let Some(inner_idx) = inner_idx {
            self.get_node_by_idx_mut(inner_idx).parent = Some(parent);
        }

        match grandparent_idx {
            Some(grandparent_idx) => {
                let slot = self.direction_of(parent);
                let grandparent = self.get_node_by_idx_mut(grandparent_idx);
                grandparent.set_child(slot, Some(child));
            }
            None => self.root = Some(child),
        }

        let child_node = self.get_node_by_idx_mut(child);
        child_node.set_child(side.opposite(), Some(parent));
        child_node.parent = grandparent_idx;
        self.get_node_by_idx_mut(parent).parent = Some(child);

        Ok(())
    }

    /// Restores the red-black properties after `start_node_idx` was attached as a red leaf.
    ///
    /// Walks up the tree while a red node has a red parent. The root color is left to the caller.
    pub(crate) fn fix_red_violation(
        &mut self,
        start_node_idx: NodeIndex,
    ) -> Result<(), TreeError<T>> {
        let mut curr_node = start_node_idx;

        while let Some(parent_idx) = self.get_node_by_idx(curr_node).parent {
            if !self.color_of(Some(parent_idx)).is_red() {
                break;
            }

            // red parent is the root, the caller blackens it
            let Some(grandparent_idx) = self.get_node_by_idx(parent_idx).parent else {
                break;
            };

            if self.color_of(Some(grandparent_idx)).is_red() {
                break;
            }

            let parent_side = self.direction_of(parent_idx);
            let grandparent = self.get_node_by_idx(grandparent_idx);
            let uncle_idx = grandparent.child(parent_side.opposite());

            if let Some(uncle_idx) = uncle_idx.filter(|&u| self.color_of(Some(u)).is_red()) {
                trace!("recoloring below node {}", grandparent_idx.0);

                self.set_color(parent_idx, NodeColor::Black);
                self.set_color(uncle_idx, NodeColor::Black);
                self.set_color(grandparent_idx, NodeColor::Red);

                curr_node = grandparent_idx;
                continue;
            }

            if self.direction_of(curr_node) != parent_side {
                trace!("straightening triangle at node {}", parent_idx.0);

                self.rotate(curr_node, parent_idx)?;

                curr_node = parent_idx;
                continue;
            }

            trace!("rebalancing line at node {}", grandparent_idx.0);

            self.set_color(parent_idx, NodeColor::Black);
            self.set_color(grandparent_idx, NodeColor::Red);
            self.rotate(parent_idx, grandparent_idx)?;

            break;
        }

        Ok(())
    }
}
