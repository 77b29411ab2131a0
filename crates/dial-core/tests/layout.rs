// File: crates/dial-core/tests/layout.rs
// Purpose: Validate tick classes, stroke endpoints and label placement on the dial circle.

use approx::assert_relative_eq;
use dial_core::geometry::Point;
use dial_core::label::{label_text, place_label};
use dial_core::layout::{classify_minor, layout_major, layout_minor, DialCircle, MajorStyle, MinorStyle};
use dial_core::types::AngleMap;
use dial_core::{Temperature, TickClass};

const CIRCLE: DialCircle = DialCircle { center: Point { x: 0.0, y: 0.0 }, radius: 100.0 };

fn angles(pairs: &[(f64, f64)]) -> AngleMap {
    pairs.iter().map(|&(t, a)| (Temperature(t), a)).collect()
}

fn assert_point(p: Point, x: f64, y: f64) {
    assert_relative_eq!(p.x, x, epsilon = 1e-9);
    assert_relative_eq!(p.y, y, epsilon = 1e-9);
}

#[test]
fn middle_minor_classification() {
    assert_eq!(classify_minor(5.0, 10.0), TickClass::MinorMiddle);
    assert_eq!(classify_minor(15.0, 10.0), TickClass::MinorMiddle);
    assert_eq!(classify_minor(3.0, 10.0), TickClass::MinorRegular);
    assert_eq!(classify_minor(0.25, 0.5), TickClass::MinorMiddle);
}

#[test]
fn minor_ticks_use_tiered_lengths() {
    let style = MinorStyle { length: 5.0, middle_length: 7.0, width: 0.5 };
    let ticks = layout_minor(CIRCLE, &angles(&[(3.0, 0.0), (5.0, 90.0)]), 10.0, style);

    // physical 0 points along +x
    assert_eq!(ticks[0].tick.class, TickClass::MinorRegular);
    assert_point(ticks[0].segment.start, 95.0, 0.0);
    assert_point(ticks[0].segment.end, 100.0, 0.0);

    // physical 90 is clockwise, so it points down in the drawing plane
    assert_eq!(ticks[1].tick.class, TickClass::MinorMiddle);
    assert_point(ticks[1].segment.start, 0.0, -93.0);
    assert_point(ticks[1].segment.end, 0.0, -100.0);
    assert_eq!(ticks[1].width, 0.5);
}

#[test]
fn major_ticks_split_at_midpoint() {
    let style = MajorStyle { length: 10.0, width: 1.0, inner_width: 3.0 };
    let ticks = layout_major(CIRCLE, &angles(&[(0.0, 180.0)]), style);
    let m = &ticks[0];

    assert_eq!(m.tick.class, TickClass::Major);
    assert_point(m.inner.start, -90.0, 0.0);
    assert_point(m.inner.end, -95.0, 0.0);
    assert_eq!(m.inner.end, m.outer.start);
    assert_point(m.outer.end, -100.0, 0.0);
    assert_eq!((m.inner_width, m.outer_width), (3.0, 1.0));
}

#[test]
fn labels_next_to_horizontal_ticks_drop() {
    let style = MajorStyle { length: 10.0, width: 1.0, inner_width: 3.0 };
    let ticks = layout_major(CIRCLE, &angles(&[(0.0, 180.0), (50.0, 270.0), (100.0, 360.0)]), style);

    let left = place_label(CIRCLE.center, &ticks[0], 60.0, 12.0);
    assert_relative_eq!(left.vertical_correction, -3.6);
    assert_point(left.anchor, -60.0, 0.0);
    assert_relative_eq!(left.anchor.y + left.vertical_correction, -3.6, epsilon = 1e-9);

    let top = place_label(CIRCLE.center, &ticks[1], 60.0, 12.0);
    assert_eq!(top.vertical_correction, 0.0);
    assert_point(top.anchor, 0.0, 60.0);
    assert_eq!(top.text, "50");

    let right = place_label(CIRCLE.center, &ticks[2], 60.0, 12.0);
    assert_relative_eq!(right.vertical_correction, -3.6);
    assert_eq!(right.anchor.y, 0.0);
}

#[test]
fn label_text_truncates_toward_zero() {
    assert_eq!(label_text(100.0), "100");
    assert_eq!(label_text(12.7), "12");
    assert_eq!(label_text(-5.5), "-5");
    assert_eq!(label_text(-0.4), "0");
}
