// File: crates/dial-core/src/label.rs
// Summary: Numeric label placement for major ticks.

use serde::Serialize;

use crate::geometry::{dial_radians, Point};
use crate::layout::MajorTick;
use crate::types::{HORIZONTAL_EPSILON, LABEL_DROP_FACTOR};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Label {
    pub text: String,
    pub anchor: Point,
    /// Added to `anchor.y` in a local translation before drawing; never horizontal.
    pub vertical_correction: f64,
}

/// Integer part of the temperature, truncated toward zero.
pub fn label_text(temperature: f64) -> String {
    (temperature.trunc() as i64).to_string()
}

pub fn place_label(center: Point, tick: &MajorTick, label_radius: f64, font_size: f64) -> Label {
    let rad = dial_radians(tick.tick.physical_angle);
    let vertical_correction = if tick.outer.dy().abs() < HORIZONTAL_EPSILON {
        -LABEL_DROP_FACTOR * font_size
    } else {
        0.0
    };
    Label {
        text: label_text(tick.tick.temperature),
        anchor: center.polar(label_radius, rad),
        vertical_correction,
    }
}
