// File: crates/dial-core/tests/interpolate.rs
// Purpose: Validate anchor interpolation, tick classification and segment boundaries.

use approx::assert_relative_eq;
use dial_core::{interpolate, AnchorTable, DialError, Temperature};

fn table(pairs: &[(f64, f64)]) -> AnchorTable {
    pairs.iter().copied().collect()
}

#[test]
fn midpoint_of_single_segment() {
    let angles = interpolate(&table(&[(0.0, 0.0), (100.0, 270.0)]), 10.0, 1.0).expect("interpolate");

    assert_relative_eq!(angles.major[&Temperature(50.0)], 135.0);
    assert!(!angles.minor.contains_key(&Temperature(50.0)));
    assert_eq!(angles.major.len(), 11);
    assert_eq!(angles.minor.len(), 90);
    assert_relative_eq!(angles.minor[&Temperature(37.0)], 99.9, epsilon = 1e-9);
}

#[test]
fn non_uniform_segments_interpolate_independently() {
    let angles = interpolate(&table(&[(0.0, 0.0), (50.0, 90.0), (100.0, 270.0)]), 10.0, 1.0).unwrap();

    assert_relative_eq!(angles.angle_at(25.0).unwrap(), 45.0);
    assert_relative_eq!(angles.angle_at(75.0).unwrap(), 180.0);
    assert_relative_eq!(angles.angle_at(51.0).unwrap(), 93.6, epsilon = 1e-9);
}

#[test]
fn anchor_temperatures_keep_their_exact_angle() {
    let anchors = table(&[(0.0, 0.1), (10.0, 0.3), (20.0, 1.0), (35.0, 200.0), (100.0, 405.0)]);
    let angles = interpolate(&anchors, 10.0, 1.0).unwrap();

    for (t, a) in anchors.iter() {
        assert_eq!(angles.angle_at(t), Some(a), "anchor {t} drifted");
    }
    // 35 is not a multiple of the major step, so it stays a minor tick
    assert!(angles.minor.contains_key(&Temperature(35.0)));
    assert!(angles.major.contains_key(&Temperature(20.0)));
}

#[test]
fn nothing_outside_anchor_range() {
    let angles = interpolate(&table(&[(-20.0, 0.0), (40.0, 180.0), (120.0, 270.0)]), 10.0, 2.0).unwrap();
    for t in angles.major.keys().chain(angles.minor.keys()) {
        assert!((-20.0..=120.0).contains(&t.value()), "{t:?} out of range");
    }
    assert_eq!(angles.major.keys().next().map(|t| t.value()), Some(-20.0));
    assert_eq!(angles.major.keys().last().map(|t| t.value()), Some(120.0));
}

#[test]
fn major_and_minor_are_disjoint() {
    let angles = interpolate(&table(&[(0.0, 0.0), (30.0, 100.0), (60.0, 270.0)]), 10.0, 1.0).unwrap();
    for t in angles.major.keys() {
        assert!(!angles.minor.contains_key(t));
    }
    assert_eq!(angles.len(), 61);
}

#[test]
fn angles_are_monotonic_for_increasing_anchors() {
    let angles = interpolate(&table(&[(0.0, 135.0), (20.0, 150.0), (80.0, 330.0), (200.0, 405.0)]), 10.0, 1.0).unwrap();
    let mut all: Vec<(f64, f64)> = angles
        .major
        .iter()
        .chain(angles.minor.iter())
        .map(|(t, a)| (t.value(), *a))
        .collect();
    all.sort_by(|a, b| a.0.total_cmp(&b.0));
    assert!(all.windows(2).all(|w| w[1].1 >= w[0].1));
}

#[test]
fn fractional_steps_do_not_drift() {
    let angles = interpolate(&table(&[(0.0, 0.0), (1.0, 100.0)]), 0.5, 0.1).unwrap();

    assert_eq!(angles.major.len(), 3);
    assert_eq!(angles.minor.len(), 8);
    assert_eq!(angles.major[&Temperature(1.0)], 100.0);
    assert_relative_eq!(angles.major[&Temperature(0.5)], 50.0);
}

#[test]
fn needs_two_anchors() {
    let err = interpolate(&table(&[(10.0, 45.0)]), 10.0, 1.0).unwrap_err();
    assert!(matches!(err, DialError::InsufficientAnchors(1)));

    let err = interpolate(&AnchorTable::new(), 10.0, 1.0).unwrap_err();
    assert!(matches!(err, DialError::InsufficientAnchors(0)));
}
