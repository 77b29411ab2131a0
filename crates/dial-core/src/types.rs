// File: crates/dial-core/src/types.rs
// Summary: Shared types and constants (units, rotation offset, tick classes).

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

/// Logical angle 0 is drawn at this physical angle (upper-left of the dial), in degrees.
pub const ROTATION_OFFSET_DEG: f64 = 135.0;
/// Extra page size around the dial circle, in millimeters (total, not per side).
pub const PAGE_MARGIN_MM: f64 = 20.0;
/// PDF points per millimeter.
pub const PT_PER_MM: f64 = 72.0 / 25.4;
/// Outer tick segments with a smaller |dy| than this (points) count as horizontal.
pub const HORIZONTAL_EPSILON: f64 = 1e-6;
/// Labels next to horizontal ticks are lowered by this fraction of the font size.
pub const LABEL_DROP_FACTOR: f64 = 0.3;

#[inline]
pub fn mm_to_pt(mm: f64) -> f64 {
    mm * PT_PER_MM
}

/// Temperature used as an ordered map key.
/// Contract: never NaN (config and anchor parsing reject non-finite values).
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(transparent)]
pub struct Temperature(pub f64);

impl Temperature {
    pub const fn value(self) -> f64 { self.0 }
}

impl PartialEq for Temperature {
    fn eq(&self, other: &Self) -> bool { self.cmp(other) == Ordering::Equal }
}

impl Eq for Temperature {}

impl PartialOrd for Temperature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for Temperature {
    fn cmp(&self, other: &Self) -> Ordering {
        // -0.0 and 0.0 must collapse onto one key
        (self.0 + 0.0).total_cmp(&(other.0 + 0.0))
    }
}

impl From<f64> for Temperature {
    fn from(v: f64) -> Self { Self(v) }
}

/// Temperature -> physical angle (degrees), ascending by temperature.
pub type AngleMap = BTreeMap<Temperature, f64>;

/// Three-tier visual hierarchy of marks along the dial arc.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TickClass {
    Major,
    MinorMiddle,
    MinorRegular,
}

/// A tick temperature with the physical angle it is drawn at.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ResolvedTick {
    pub temperature: f64,
    pub physical_angle: f64,
    pub class: TickClass,
}

/// True when `value` is an integer multiple of `step`, within float noise.
pub fn is_multiple_of(value: f64, step: f64) -> bool {
    if step == 0.0 {
        return false;
    }
    let q = value / step;
    (q - q.round()).abs() <= 1e-9 * q.abs().max(1.0)
}

/// Number of whole `step`s in `span`, tolerating a quotient that lands just below an integer.
pub fn whole_steps(span: f64, step: f64) -> usize {
    let q = span / step;
    let n = q.round();
    if (q - n).abs() <= 1e-9 * q.abs().max(1.0) {
        n.max(0.0) as usize
    } else {
        q.floor().max(0.0) as usize
    }
}
