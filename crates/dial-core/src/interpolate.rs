// File: crates/dial-core/src/interpolate.rs
// Summary: Piecewise-linear expansion of sparse anchors into major and minor tick angles.

use crate::anchors::AnchorTable;
use crate::error::{DialError, Result};
use crate::types::{is_multiple_of, whole_steps, AngleMap, Temperature};

/// Dense tick angles; `major` and `minor` never share a temperature.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickAngles {
    pub major: AngleMap,
    pub minor: AngleMap,
}

impl TickAngles {
    pub fn len(&self) -> usize { self.major.len() + self.minor.len() }

    pub fn is_empty(&self) -> bool { self.major.is_empty() && self.minor.is_empty() }

    /// Angle of `temperature`, whichever class it landed in.
    pub fn angle_at(&self, temperature: f64) -> Option<f64> {
        let key = Temperature(temperature);
        self.major.get(&key).or_else(|| self.minor.get(&key)).copied()
    }
}

/// Walk every consecutive anchor pair in steps of `minor_step` and linearly
/// interpolate the angle of each generated temperature.
///
/// Temperatures are derived from an integer step counter so they never drift,
/// and a step landing on the next anchor takes that anchor's angle verbatim.
/// A temperature that is a multiple of `major_step` goes into `major`, all
/// others into `minor`. A shared boundary temperature is emitted by both
/// neighbouring segments; the later one wins.
pub fn interpolate(anchors: &AnchorTable, major_step: f64, minor_step: f64) -> Result<TickAngles> {
    if anchors.len() < 2 {
        return Err(DialError::InsufficientAnchors(anchors.len()));
    }
    let points: Vec<(f64, f64)> = anchors.iter().collect();
    let mut out = TickAngles::default();

    for pair in points.windows(2) {
        let (t1, a1) = pair[0];
        let (t2, a2) = pair[1];
        let gap = t2 - t1;
        let tolerance = 1e-9 * gap.abs().max(1.0);

        for k in 0..=whole_steps(gap, minor_step) {
            let t = t1 + k as f64 * minor_step;
            let (t, angle) = if (t - t2).abs() <= tolerance {
                (t2, a2)
            } else if t > t2 {
                break;
            } else {
                (t, a1 + (t - t1) / gap * (a2 - a1))
            };

            let target = if is_multiple_of(t, major_step) { &mut out.major } else { &mut out.minor };
            target.insert(Temperature(t), angle);
        }
    }

    log::debug!(
        "interpolated {} anchors into {} major / {} minor ticks",
        anchors.len(),
        out.major.len(),
        out.minor.len()
    );
    Ok(out)
}
