//! The parameter solver: walks an oriented tree bottom-up, assigning each
//! node the linear relations `w = a*h + b` and `h = c*w + d` between its
//! rectangle's width and height.

use super::container::Spacing;
use super::image::ImageSize;
use super::orientation::{Orientation, OrientedTree};

/// Both linear-relation pairs for a node. `a*c == 1` and `a*d + b == 0`
/// always hold; only one pair is ever computed directly from children (per
/// the node's own orientation) and the other is derived by inversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl LayoutParams {
    fn from_direct_horizontal(a: f64, b: f64) -> Self {
        Self { a, b, c: 1.0 / a, d: -b / a }
    }

    fn from_direct_vertical(c: f64, d: f64) -> Self {
        Self { a: 1.0 / c, b: -d / c, c, d }
    }
}

/// An oriented tree decorated with the solved `LayoutParams` at every node,
/// plus enough bookkeeping (`start`, `len`) for a `Run` to know which slice
/// of the image sequence it covers.
#[derive(Debug, Clone)]
pub enum ParamNode {
    Run { start: usize, len: usize, orientation: Orientation, params: LayoutParams },
    Group { children: Vec<ParamNode>, orientation: Orientation, params: LayoutParams },
}

impl ParamNode {
    pub fn params(&self) -> LayoutParams {
        match self {
            ParamNode::Run { params, .. } => *params,
            ParamNode::Group { params, .. } => *params,
        }
    }

    pub fn orientation(&self) -> Orientation {
        match self {
            ParamNode::Run { orientation, .. } => *orientation,
            ParamNode::Group { orientation, .. } => *orientation,
        }
    }
}

/// Solves layout parameters for every node of `tree`, threading a running
/// leaf index so each `Run` sees its correct slice of `images`.
pub fn solve(tree: &OrientedTree, images: &[ImageSize], spacing: Spacing) -> ParamNode {
    let (node, end) = solve_from(tree, images, 0, spacing);
    debug_assert_eq!(end, images.len(), "solver did not consume every image");
    node
}

fn solve_from(tree: &OrientedTree, images: &[ImageSize], start: usize, spacing: Spacing) -> (ParamNode, usize) {
    match tree {
        OrientedTree::Run { len, orientation } => {
            let end = start + len;
            let slice = &images[start..end];
            let params = match orientation {
                Orientation::Horizontal => {
                    let a: f64 = slice.iter().map(ImageSize::aspect).sum();
                    let b = spacing.horizontal * (len - 1) as f64;
                    LayoutParams::from_direct_horizontal(a, b)
                }
                Orientation::Vertical => {
                    let c: f64 = slice.iter().map(ImageSize::inverse_aspect).sum();
                    let d = spacing.vertical * (len - 1) as f64;
                    LayoutParams::from_direct_vertical(c, d)
                }
            };
            (ParamNode::Run { start, len: *len, orientation: *orientation, params }, end)
        }
        OrientedTree::Group { children, orientation } => {
            let mut solved_children = Vec::with_capacity(children.len());
            let mut cursor = start;
            for child in children {
                let (solved, next) = solve_from(child, images, cursor, spacing);
                solved_children.push(solved);
                cursor = next;
            }

            let n = solved_children.len() as f64;
            let params = match orientation {
                Orientation::Horizontal => {
                    let a: f64 = solved_children.iter().map(|c| c.params().a).sum();
                    let b = spacing.horizontal * (n - 1.0)
                        + solved_children.iter().map(|c| c.params().b).sum::<f64>();
                    LayoutParams::from_direct_horizontal(a, b)
                }
                Orientation::Vertical => {
                    let c: f64 = solved_children.iter().map(|c| c.params().c).sum();
                    let d = spacing.vertical * (n - 1.0)
                        + solved_children.iter().map(|c| c.params().d).sum::<f64>();
                    LayoutParams::from_direct_vertical(c, d)
                }
            };
            (ParamNode::Group { children: solved_children, orientation: *orientation, params }, cursor)
        }
    }
}
