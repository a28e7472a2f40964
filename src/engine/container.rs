//! The container a layout is realized into, and the spacing applied between
//! slots.

use serde::{Deserialize, Serialize};

/// A positive `(width, height)` rectangle that a layout is realized into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub width: f64,
    pub height: f64,
}

impl Container {
    pub fn new(width: f64, height: f64) -> Self {
        assert!(width > 0.0, "container width must be positive, got {width}");
        assert!(height > 0.0, "container height must be positive, got {height}");
        Self { width, height }
    }
}

/// Fixed horizontal and vertical gaps applied between adjacent slots,
/// constant for a single generation call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spacing {
    pub horizontal: f64,
    pub vertical: f64,
}

impl Spacing {
    pub fn new(horizontal: f64, vertical: f64) -> Self {
        assert!(horizontal >= 0.0, "horizontal spacing must be non-negative");
        assert!(vertical >= 0.0, "vertical spacing must be non-negative");
        Self { horizontal, vertical }
    }

    pub fn zero() -> Self {
        Self { horizontal: 0.0, vertical: 0.0 }
    }
}
