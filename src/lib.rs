//! mosaic: an enumerative engine for aligned image layouts.
//!
//! Arranges a fixed, ordered sequence of images inside a rectangular
//! container such that every slot keeps its image's aspect ratio and slot
//! edges align to a grid. The engine enumerates abstract partition trees
//! over the image sequence, solves a linear width/height relation bottom-up
//! for each one, realizes it geometrically inside the container, scores it,
//! and returns either the top-K or every realizable layout, sorted by
//! score.

pub mod constants;
mod helpers;

pub mod engine;
mod generate;

pub mod prelude;

pub use engine::container::{Container, Spacing};
pub use engine::image::ImageSize;
pub use engine::realize::Rect;
pub use generate::{generate_layouts, AlignedImageLayout, GeneratorConfig};
