//! The geometric realizer: turns a solved parameter tree into concrete,
//! axis-aligned slot rectangles inside a container, or rejects the tree if
//! any rectangle would come out non-positive.

use serde::{Deserialize, Serialize};

use super::container::{Container, Spacing};
use super::image::ImageSize;
use super::orientation::Orientation;
use super::params::ParamNode;

/// An axis-aligned rectangle, origin at the container's top-left, y-down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Realizes `root` inside `container`, returning one rectangle per image in
/// image order, or `None` if the tree cannot be instantiated (spacing
/// exceeds an internal dimension somewhere in the tree).
pub fn realize(root: &ParamNode, images: &[ImageSize], container: Container, spacing: Spacing) -> Option<Vec<Rect>> {
    let (width, height) = root_size(root, container);

    let origin_x = (container.width - width) / 2.0;
    let origin_y = (container.height - height) / 2.0;

    let mut regions = vec![Rect::default(); images.len()];
    let root_rect = Rect { x: origin_x, y: origin_y, width, height };
    slice(root, root_rect, images, spacing, &mut regions)?;
    Some(regions)
}

/// Picks the unique root size that fills the container in one axis without
/// exceeding the other. Branch 2 is mathematically guaranteed to succeed
/// whenever branch 1 fails (given `a=1/c`, `b=-d/c`, `c>0`), so the
/// "neither fits" case is a solver bug, not a realizable-but-rejected tree.
fn root_size(root: &ParamNode, container: Container) -> (f64, f64) {
    let p = root.params();

    let height = container.height;
    let width = p.a * height + p.b;
    if width <= container.width {
        return (width, height);
    }

    let width2 = container.width;
    let height2 = p.c * width2 + p.d;
    if height2 <= container.height {
        return (width2, height2);
    }

    unreachable!("root sizing produced contradictory parameters for container {container:?}: neither axis fits");
}

fn slice(node: &ParamNode, rect: Rect, images: &[ImageSize], spacing: Spacing, out: &mut [Rect]) -> Option<()> {
    match node {
        ParamNode::Run { start, len, orientation, .. } => {
            slice_run(*start, *len, *orientation, rect, images, spacing, out)
        }
        ParamNode::Group { children, orientation, .. } => slice_group(children, *orientation, rect, images, spacing, out),
    }
}

fn slice_run(
    start: usize,
    len: usize,
    orientation: Orientation,
    rect: Rect,
    images: &[ImageSize],
    spacing: Spacing,
    out: &mut [Rect],
) -> Option<()> {
    match orientation {
        Orientation::Horizontal => {
            if rect.width <= spacing.horizontal * (len - 1) as f64 {
                log::trace!("realizer rejected horizontal run: no room for {len} slots");
                return None;
            }
            let mut x = rect.x;
            for offset in 0..len {
                let width = rect.height * images[start + offset].aspect();
                if width <= 0.0 {
                    return None;
                }
                out[start + offset] = Rect { x, y: rect.y, width, height: rect.height };
                x += width + spacing.horizontal;
            }
            Some(())
        }
        Orientation::Vertical => {
            if rect.height <= spacing.vertical * (len - 1) as f64 {
                log::trace!("realizer rejected vertical run: no room for {len} slots");
                return None;
            }
            let mut y = rect.y;
            for offset in 0..len {
                let height = rect.width * images[start + offset].inverse_aspect();
                if height <= 0.0 {
                    return None;
                }
                out[start + offset] = Rect { x: rect.x, y, width: rect.width, height };
                y += height + spacing.vertical;
            }
            Some(())
        }
    }
}

fn slice_group(
    children: &[ParamNode],
    orientation: Orientation,
    rect: Rect,
    images: &[ImageSize],
    spacing: Spacing,
    out: &mut [Rect],
) -> Option<()> {
    let n = children.len();
    match orientation {
        Orientation::Horizontal => {
            if rect.width <= spacing.horizontal * (n - 1) as f64 {
                log::trace!("realizer rejected horizontal group: no room for {n} children");
                return None;
            }
            let mut x = rect.x;
            for child in children {
                let p = child.params();
                let width = rect.height * p.a + p.b;
                if width <= 0.0 {
                    return None;
                }
                slice(child, Rect { x, y: rect.y, width, height: rect.height }, images, spacing, out)?;
                x += width + spacing.horizontal;
            }
            Some(())
        }
        Orientation::Vertical => {
            if rect.height <= spacing.vertical * (n - 1) as f64 {
                log::trace!("realizer rejected vertical group: no room for {n} children");
                return None;
            }
            let mut y = rect.y;
            for child in children {
                let p = child.params();
                let height = rect.width * p.c + p.d;
                if height <= 0.0 {
                    return None;
                }
                slice(child, Rect { x: rect.x, y, width: rect.width, height }, images, spacing, out)?;
                y += height + spacing.vertical;
            }
            Some(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::orientation::both_orientations;
    use crate::engine::params::solve;
    use crate::engine::partition::PartitionTree;
    use float_cmp::approx_eq;

    fn square(side: f64) -> ImageSize {
        ImageSize::new(side, side)
    }

    #[test]
    fn single_image_centers_and_fills_container() {
        let images = vec![square(100.0)];
        let tree = PartitionTree::Run { len: 1 };
        let [horizontal, _] = both_orientations(&tree);
        let container = Container::new(200.0, 200.0);
        let root = solve(&horizontal, &images, Spacing::zero());

        let regions = realize(&root, &images, container, Spacing::zero()).expect("should realize");
        assert_eq!(regions.len(), 1);
        let r = regions[0];
        assert!(approx_eq!(f64, r.width, 200.0, ulps = 4));
        assert!(approx_eq!(f64, r.height, 200.0, ulps = 4));
        assert!(approx_eq!(f64, r.x, 0.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, r.y, 0.0, epsilon = 1e-9));
    }

    #[test]
    fn horizontal_run_of_two_squares_fills_width_and_centers_vertically() {
        let images = vec![square(100.0), square(100.0)];
        let tree = PartitionTree::Run { len: 2 };
        let [horizontal, _] = both_orientations(&tree);
        let container = Container::new(300.0, 100.0);
        let root = solve(&horizontal, &images, Spacing::zero());

        let regions = realize(&root, &images, container, Spacing::zero()).expect("should realize");
        assert!(approx_eq!(f64, regions[0].x, 50.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, regions[0].width, 100.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, regions[1].x, 150.0, epsilon = 1e-9));
    }

    #[test]
    fn oversized_spacing_rejects_the_layout() {
        let images = vec![square(100.0), square(100.0)];
        let tree = PartitionTree::Run { len: 2 };
        let [horizontal, vertical] = both_orientations(&tree);
        let container = Container::new(10.0, 10.0);
        let spacing = Spacing::new(20.0, 20.0);

        let horizontal_root = solve(&horizontal, &images, spacing);
        assert!(realize(&horizontal_root, &images, container, spacing).is_none());

        let vertical_root = solve(&vertical, &images, spacing);
        assert!(realize(&vertical_root, &images, container, spacing).is_none());
    }

    #[test]
    fn two_by_two_grid_achieves_full_coverage() {
        let images = vec![square(100.0); 4];
        let tree = PartitionTree::Group {
            children: vec![PartitionTree::Run { len: 2 }, PartitionTree::Run { len: 2 }],
        };
        let [horizontal, _] = both_orientations(&tree);
        let container = Container::new(200.0, 200.0);
        let root = solve(&horizontal, &images, Spacing::zero());
        let regions = realize(&root, &images, container, Spacing::zero()).expect("should realize");
        assert_eq!(regions.len(), 4);
        for region in &regions {
            assert!(approx_eq!(f64, region.width, 100.0, epsilon = 1e-9));
            assert!(approx_eq!(f64, region.height, 100.0, epsilon = 1e-9));
        }
    }
}
