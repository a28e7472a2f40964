//! The image descriptor: a positive `(width, height)` pair and the two
//! derived scalars the rest of the engine works with.

use serde::{Deserialize, Serialize};

/// A positive image size. The engine never inspects pixels; this is the
/// entire surface it needs from a caller's image type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: f64,
    pub height: f64,
}

impl ImageSize {
    pub fn new(width: f64, height: f64) -> Self {
        assert!(width > 0.0, "image width must be positive, got {width}");
        assert!(height > 0.0, "image height must be positive, got {height}");
        Self { width, height }
    }

    /// `α = width / height`.
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }

    /// `α⁻¹ = height / width`.
    pub fn inverse_aspect(&self) -> f64 {
        self.height / self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn aspect_and_inverse_are_reciprocal() {
        let image = ImageSize::new(16.0, 9.0);
        assert!(approx_eq!(f64, image.aspect() * image.inverse_aspect(), 1.0, ulps = 4));
    }

    #[test]
    #[should_panic(expected = "width must be positive")]
    fn rejects_non_positive_width() {
        ImageSize::new(0.0, 10.0);
    }
}
