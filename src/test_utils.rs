use simplelog::{Config, LevelFilter, TestLogger};

use crate::Redwood;
use crate::node::{NodeColor, NodeIndex};

pub(crate) fn init_logging() {
    // another test may have installed it already
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

/// Follows a path of `L` / `R` steps from the root. The empty path is the root.
pub(crate) fn node_at<T>(tree: &Redwood<T>, path: &str) -> NodeIndex {
    let mut current_node = tree.root.expect("tree is empty");

    for step in path.chars() {
        let node = tree.get_node_by_idx(current_node);
        let next = match step {
            'L' => node.left_child(),
            'R' => node.right_child(),
            _ => panic!("invalid path step {step:?}"),
        };

        current_node = next.unwrap_or_else(|| panic!("no node at path {path:?}"));
    }

    current_node
}

pub(crate) fn value_at<T: Copy>(tree: &Redwood<T>, path: &str) -> T {
    tree.get_node_by_idx(node_at(tree, path)).value
}

pub(crate) fn color_at<T>(tree: &Redwood<T>, path: &str) -> NodeColor {
    tree.get_node_by_idx(node_at(tree, path)).color
}

pub(crate) fn force_color<T>(tree: &mut Redwood<T>, path: &str, color: NodeColor) {
    let node_idx = node_at(tree, path);
    tree.set_color(node_idx, color);
}

/// Checks search order, parent links, black root, absence of red-red edges and uniform
/// black-height, and that every stored node is reachable from the root.
pub(crate) fn assert_red_black_invariants<T: Ord>(tree: &Redwood<T>) {
    let Some(root) = tree.root else {
        assert!(tree.is_empty());
        return;
    };

    let root_color = tree.color_of(Some(root));
    assert_eq!(root_color, NodeColor::Black, "root must be black");
    assert!(tree.get_node_by_idx(root).parent.is_none());

    let mut reachable = 0;
    check_subtree(tree, Some(root), None, None, &mut reachable);
    assert_eq!(reachable, tree.len(), "unreachable nodes in storage");
}

/// Returns the black-height of the subtree, nil leaves counting as black.
fn check_subtree<T: Ord>(
    tree: &Redwood<T>,
    node_idx: Option<NodeIndex>,
    lower: Option<&T>,
    upper: Option<&T>,
    reachable: &mut usize,
) -> usize {
    let Some(idx) = node_idx else {
        return 1;
    };
    *reachable += 1;

    let node = tree.get_node_by_idx(idx);
    if let Some(lower) = lower {
        assert!(node.value > *lower, "node {} breaks search order", idx.0);
    }
    if let Some(upper) = upper {
        assert!(node.value < *upper, "node {} breaks search order", idx.0);
    }

    let children = [node.left_child(), node.right_child()];
    for child in children.into_iter().flatten() {
        let child_node = tree.get_node_by_idx(child);

        assert_eq!(child_node.parent, Some(idx), "broken parent link");
        if node.color.is_red() {
            assert!(!child_node.color.is_red(), "red-red edge at {}", idx.0);
        }
    }

    let value = Some(&node.value);
    let left = check_subtree(tree, node.left_child(), lower, value, reachable);
    let right = check_subtree(tree, node.right_child(), value, upper, reachable);
    assert_eq!(left, right, "black-height differs at {}", idx.0);

    left + usize::from(!node.color.is_red())
}
