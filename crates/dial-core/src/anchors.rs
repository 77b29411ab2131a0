// File: crates/dial-core/src/anchors.rs
// Summary: Major tick anchors (temperature -> angle) and the ways they are collected.

use crate::error::{DialError, Result};
use crate::types::{whole_steps, AngleMap, Temperature};

/// Sparse temperature -> angle mapping, unique by temperature and kept sorted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnchorTable {
    entries: AngleMap,
}

/// One temperature/angle row as typed into a form or passed on the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnchorRow {
    pub temperature: String,
    pub angle: String,
}

impl AnchorRow {
    pub fn new(temperature: impl Into<String>, angle: impl Into<String>) -> Self {
        Self { temperature: temperature.into(), angle: angle.into() }
    }
}

impl AnchorTable {
    pub fn new() -> Self { Self::default() }

    /// Insert or overwrite the angle for `temperature`.
    pub fn insert(&mut self, temperature: f64, angle: f64) {
        self.entries.insert(Temperature(temperature), angle);
    }

    pub fn get(&self, temperature: f64) -> Option<f64> {
        self.entries.get(&Temperature(temperature)).copied()
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Entries in ascending temperature order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.entries.iter().map(|(t, a)| (t.value(), *a))
    }

    pub fn as_angle_map(&self) -> &AngleMap { &self.entries }

    /// Copy of the table with `offset` degrees added to every angle.
    pub fn rotated(&self, offset: f64) -> Self {
        self.iter().map(|(t, a)| (t, a + offset)).collect()
    }

    /// Evenly spaced anchors over the temperature range, already rotated by `rotation`.
    ///
    /// One anchor per `major_step` from `temp_start`, up to the last step that
    /// still fits in the range; the angle offset is the linear position of the
    /// temperature within `[angle_start, angle_end]`.
    pub fn evenly_spaced(
        temp_start: f64,
        temp_end: f64,
        angle_start: f64,
        angle_end: f64,
        major_step: f64,
        rotation: f64,
    ) -> Self {
        let temp_span = temp_end - temp_start;
        let steps = whole_steps(temp_span, major_step);
        (0..=steps)
            .map(|i| {
                let temp = temp_start + i as f64 * major_step;
                let offset = (temp - temp_start) / temp_span * (angle_end - angle_start) + angle_start;
                (temp, rotation + offset)
            })
            .collect()
    }

    /// Lenient parse of a persisted anchor section: entries whose key or value
    /// is not a finite number are skipped.
    pub fn from_lenient<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut table = Self::new();
        for (t, a) in pairs {
            match (parse_finite(t), parse_finite(a)) {
                (Some(t), Some(a)) => table.insert(t, a),
                _ => log::warn!("skipping unparsable major tick position '{t}' = '{a}'"),
            }
        }
        table
    }

    /// Strict parse of form rows. Rows with both fields blank are ignored; a row
    /// with only one field filled is `AnchorIncomplete`, a non-numeric field is
    /// `AnchorParse`.
    pub fn from_rows(rows: &[AnchorRow]) -> Result<Self> {
        let mut table = Self::new();
        for (i, row) in rows.iter().enumerate() {
            let number = i + 1;
            let t = row.temperature.trim();
            let a = row.angle.trim();
            match (t.is_empty(), a.is_empty()) {
                (true, true) => continue,
                (true, false) | (false, true) => return Err(DialError::AnchorIncomplete(number)),
                (false, false) => {}
            }
            let parse = |s: &str| {
                parse_finite(s).ok_or_else(|| DialError::AnchorParse { row: number, value: s.to_string() })
            };
            table.insert(parse(t)?, parse(a)?);
        }
        Ok(table)
    }
}

impl FromIterator<(f64, f64)> for AnchorTable {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (t, a) in iter {
            table.insert(t, a);
        }
        table
    }
}

fn parse_finite(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
