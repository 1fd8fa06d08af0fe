//! Geometric primitives: Point, Size, Rect, EdgeInsets

mod geometry;

pub use geometry::*;
