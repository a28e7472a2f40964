//! Common imports from mosaic.

pub use crate::engine::container::{Container, Spacing};
pub use crate::engine::image::ImageSize;
pub use crate::engine::realize::Rect;
pub use crate::generate::{generate_layouts, AlignedImageLayout, GeneratorConfig};
