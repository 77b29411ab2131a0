// File: crates/dial-core/src/geometry.rs
// Summary: Lightweight geometry helpers for points on the dial circle.

use serde::Serialize;

/// Point in drawing-surface units, y axis pointing up.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `self` along the drawing-plane direction `rad`.
    #[inline]
    pub fn polar(self, radius: f64, rad: f64) -> Self {
        Self::new(self.x + radius * rad.cos(), self.y + radius * rad.sin())
    }
}

/// Straight stroke between two points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Radial segment from `inner` to `outer` distance along `rad`.
    pub fn radial(center: Point, inner: f64, outer: f64, rad: f64) -> Self {
        Self::new(center.polar(inner, rad), center.polar(outer, rad))
    }

    pub fn dy(&self) -> f64 { self.end.y - self.start.y }
}

/// Convert a clockwise-increasing physical angle (degrees) into
/// counter-clockwise drawing-plane radians.
#[inline]
pub fn dial_radians(physical_deg: f64) -> f64 {
    (360.0 - physical_deg).to_radians()
}
