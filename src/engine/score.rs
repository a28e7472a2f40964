//! The scorer: coverage, scale-accordance and area-accordance over a
//! realized layout, combined into a single overall score.

use super::container::Container;
use super::image::ImageSize;
use super::realize::Rect;
use crate::constants::GEOMETRIC_EPSILON;
use crate::helpers::{dampened_std, mean};

/// The three sub-scores plus their product, each asserted to lie in
/// `[0,1]` on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scores {
    pub coverage: f64,
    pub scale_accordance: f64,
    pub area_accordance: f64,
    pub overall: f64,
}

impl Scores {
    fn new(coverage: f64, scale_accordance: f64, area_accordance: f64) -> Self {
        let overall = coverage * scale_accordance * area_accordance;
        for (name, value) in [
            ("coverage", coverage),
            ("scale_accordance", scale_accordance),
            ("area_accordance", area_accordance),
            ("overall", overall),
        ] {
            assert!(
                value >= -GEOMETRIC_EPSILON && value <= 1.0 + GEOMETRIC_EPSILON,
                "{name} score out of [0,1]: {value}"
            );
        }
        Self { coverage, scale_accordance, area_accordance, overall }
    }
}

/// Scores a realized layout against the original images and container.
pub fn score_layout(regions: &[Rect], images: &[ImageSize], container: Container) -> Scores {
    let root = bounding_rect(regions);
    let coverage_ratio = (root.width * root.height) / (container.width * container.height);
    let coverage = coverage_ratio.sqrt();

    let scale_logs: Vec<f64> = regions
        .iter()
        .zip(images)
        .map(|(region, image)| (image.width / region.width).ln())
        .collect();
    let scale_mean = mean(&scale_logs);
    let scale_accordance = 2f64.powf(-dampened_std(&scale_logs, scale_mean));

    let area_logs: Vec<f64> = regions.iter().map(|region| (region.width * region.height).ln()).collect();
    let area_mean = mean(&area_logs);
    let area_accordance = 2f64.powf(-dampened_std(&area_logs, area_mean));

    Scores::new(coverage, scale_accordance, area_accordance)
}

fn bounding_rect(regions: &[Rect]) -> Rect {
    let min_x = regions.iter().map(|r| r.x).fold(f64::INFINITY, f64::min);
    let min_y = regions.iter().map(|r| r.y).fold(f64::INFINITY, f64::min);
    let max_x = regions.iter().map(|r| r.x + r.width).fold(f64::NEG_INFINITY, f64::max);
    let max_y = regions.iter().map(|r| r.y + r.height).fold(f64::NEG_INFINITY, f64::max);
    Rect { x: min_x, y: min_y, width: max_x - min_x, height: max_y - min_y }
}
