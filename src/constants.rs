//! Hard-coded constants for mosaic and its dependents.

/// Tolerance used when comparing floats derived from the same geometry
/// (container fit, aspect-ratio round-trips) against an expected bound.
pub const GEOMETRIC_EPSILON: f64 = 1e-9;
