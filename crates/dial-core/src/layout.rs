// File: crates/dial-core/src/layout.rs
// Summary: Tick classification and stroke geometry on the dial circle.

use serde::Serialize;

use crate::geometry::{dial_radians, Point, Segment};
use crate::types::{is_multiple_of, AngleMap, ResolvedTick, TickClass};

/// Dial circle in drawing-surface units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DialCircle {
    pub center: Point,
    pub radius: f64,
}

/// Lengths in surface units, widths in points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinorStyle {
    pub length: f64,
    pub middle_length: f64,
    pub width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MajorStyle {
    pub length: f64,
    pub width: f64,
    pub inner_width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MinorTick {
    pub tick: ResolvedTick,
    pub segment: Segment,
    pub width: f64,
}

/// Major tick drawn as two strokes meeting at the radial midpoint.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MajorTick {
    pub tick: ResolvedTick,
    pub inner: Segment,
    pub inner_width: f64,
    pub outer: Segment,
    pub outer_width: f64,
}

/// Half-step minors are `MinorMiddle`, the rest `MinorRegular`.
pub fn classify_minor(temperature: f64, major_step: f64) -> TickClass {
    if is_multiple_of(temperature, major_step / 2.0) {
        TickClass::MinorMiddle
    } else {
        TickClass::MinorRegular
    }
}

pub fn layout_minor(circle: DialCircle, angles: &AngleMap, major_step: f64, style: MinorStyle) -> Vec<MinorTick> {
    angles
        .iter()
        .map(|(t, &angle)| {
            let class = classify_minor(t.value(), major_step);
            let length = match class {
                TickClass::MinorMiddle => style.middle_length,
                _ => style.length,
            };
            let rad = dial_radians(angle);
            MinorTick {
                tick: ResolvedTick { temperature: t.value(), physical_angle: angle, class },
                segment: Segment::radial(circle.center, circle.radius - length, circle.radius, rad),
                width: style.width,
            }
        })
        .collect()
}

pub fn layout_major(circle: DialCircle, angles: &AngleMap, style: MajorStyle) -> Vec<MajorTick> {
    let mid = circle.radius - style.length / 2.0;
    angles
        .iter()
        .map(|(t, &angle)| {
            let rad = dial_radians(angle);
            MajorTick {
                tick: ResolvedTick { temperature: t.value(), physical_angle: angle, class: TickClass::Major },
                inner: Segment::radial(circle.center, circle.radius - style.length, mid, rad),
                inner_width: style.inner_width,
                outer: Segment::radial(circle.center, mid, circle.radius, rad),
                outer_width: style.width,
            }
        })
        .collect()
}
