//! The enumerative layout engine: partition trees, orientation, the
//! parameter algebra, geometric realization, scoring, and top-K collection.

pub mod collector;
pub mod container;
pub mod image;
pub mod orientation;
pub mod params;
pub mod partition;
pub mod realize;
pub mod score;
