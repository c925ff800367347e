#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum NodeColor {
    #[default]
    Red,
    Black,
}

impl NodeColor {
    pub(crate) fn is_red(self) -> bool {
        matches!(self, NodeColor::Red)
    }
}

/// Position of a node in the tree storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeIndex(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Left,
    Right,
}

impl Direction {
    pub(crate) fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Debug)]
pub(crate) struct RedwoodNode<T> {
    pub(crate) value: T,
    pub(crate) color: NodeColor,
    pub(crate) parent: Option<NodeIndex>,
    pub(crate) left: Option<NodeIndex>,
    pub(crate) right: Option<NodeIndex>,
}

impl<T> RedwoodNode<T> {
    pub(crate) fn new_isolated(value: T) -> Self {
        Self {
            value,
            color: NodeColor::default(),
            parent: None,
            left: None,
            right: None,
        }
    }

    pub(crate) fn left_child(&self) -> Option<NodeIndex> {
        self.left
    }

    pub(crate) fn right_child(&self) -> Option<NodeIndex> {
        self.right
    }

    pub(crate) fn child(&self, dir: Direction) -> Option<NodeIndex> {
        match dir {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, dir: Direction, child: Option<NodeIndex>) {
        match dir {
            Direction::Left => self.left = child,
            Direction::Right => self.right = child,
        }
    }
}
