//! The top-level entry point: wires the partition enumerator, orientation
//! expander, parameter solver, realizer, scorer and top-K collector
//! together into a single `generate_layouts` call.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::collector::TopKCollector;
use crate::engine::container::{Container, Spacing};
use crate::engine::image::ImageSize;
use crate::engine::orientation::both_orientations;
use crate::engine::params::solve;
use crate::engine::realize::{realize, Rect};
use crate::engine::score::score_layout;

/// Generator configuration: spacing between slots and the enumerator's
/// split-depth cap (`None` = unbounded).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    pub spacing: Spacing,
    pub split_level_limit: Option<usize>,
}

impl GeneratorConfig {
    pub fn new(spacing: Spacing, split_level_limit: Option<usize>) -> Self {
        Self { spacing, split_level_limit }
    }
}

/// One realized, scored arrangement of the input images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedImageLayout {
    pub regions: Vec<Rect>,
    pub score_of_coverage: f64,
    pub score_of_scale_accordance: f64,
    pub score_of_area_accordance: f64,
    pub score: f64,
}

/// Generates every realizable aligned layout of `images` inside `container`,
/// sorted by score descending. If `result_count_limit` is `Some(k)`, at most
/// `k` layouts are returned (`Some(0)` short-circuits without enumerating).
pub fn generate_layouts(
    images: &[ImageSize],
    container: Container,
    config: &GeneratorConfig,
    result_count_limit: Option<usize>,
) -> Vec<AlignedImageLayout> {
    assert!(!images.is_empty(), "generate_layouts requires at least one image");

    let mut collector = TopKCollector::new(result_count_limit);
    if collector.is_short_circuited() {
        return Vec::new();
    }

    let trees = crate::engine::partition::enumerate(images.len(), config.split_level_limit);

    let layouts: Vec<AlignedImageLayout> = trees
        .par_iter()
        .flat_map_iter(|tree| {
            both_orientations(tree)
                .into_iter()
                .filter_map(|oriented| build_layout(&oriented, images, container, config.spacing))
        })
        .collect();

    for layout in layouts {
        collector.push(layout, |layout| layout.score);
    }
    collector.finish(|layout| layout.score)
}

fn build_layout(
    oriented: &crate::engine::orientation::OrientedTree,
    images: &[ImageSize],
    container: Container,
    spacing: Spacing,
) -> Option<AlignedImageLayout> {
    let root = solve(oriented, images, spacing);
    let regions = realize(&root, images, container, spacing)?;
    let scores = score_layout(&regions, images, container);
    Some(AlignedImageLayout {
        regions,
        score_of_coverage: scores.coverage,
        score_of_scale_accordance: scores.scale_accordance,
        score_of_area_accordance: scores.area_accordance,
        score: scores.overall,
    })
}
