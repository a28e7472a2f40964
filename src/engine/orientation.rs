//! The orientation expander: turns a direction-less `PartitionTree` into two
//! `OrientedTree`s (root horizontal, root vertical), alternating direction
//! at every group boundary.

use super::partition::PartitionTree;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn opposite(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// A partition tree annotated with an orientation at every node. A run's
/// effective orientation is its parent group's; a group's children always
/// carry the opposite orientation of the group itself.
#[derive(Debug, Clone)]
pub enum OrientedTree {
    Run { len: usize, orientation: Orientation },
    Group { children: Vec<OrientedTree>, orientation: Orientation },
}

impl OrientedTree {
    pub fn orientation(&self) -> Orientation {
        match self {
            OrientedTree::Run { orientation, .. } => *orientation,
            OrientedTree::Group { orientation, .. } => *orientation,
        }
    }
}

fn orient(tree: &PartitionTree, orientation: Orientation) -> OrientedTree {
    match tree {
        PartitionTree::Run { len } => OrientedTree::Run { len: *len, orientation },
        PartitionTree::Group { children } => {
            let child_orientation = orientation.opposite();
            OrientedTree::Group {
                children: children.iter().map(|child| orient(child, child_orientation)).collect(),
                orientation,
            }
        }
    }
}

/// Emits the two oriented trees (root horizontal, root vertical) for a
/// partition tree.
pub fn both_orientations(tree: &PartitionTree) -> [OrientedTree; 2] {
    [orient(tree, Orientation::Horizontal), orient(tree, Orientation::Vertical)]
}
