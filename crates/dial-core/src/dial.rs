// File: crates/dial-core/src/dial.rs
// Summary: Dial orchestrator; resolves anchors, interpolates, lays out and draws one page.

use std::path::Path;

use serde::Serialize;

use crate::anchors::AnchorTable;
use crate::config::DialConfig;
use crate::error::Result;
use crate::geometry::Point;
use crate::interpolate::{interpolate, TickAngles};
use crate::label::{place_label, Label};
use crate::layout::{layout_major, layout_minor, DialCircle, MajorStyle, MajorTick, MinorStyle, MinorTick};
use crate::surface::{DrawingSurface, SurfaceBackend};
use crate::types::{mm_to_pt, AngleMap, PAGE_MARGIN_MM, ROTATION_OFFSET_DEG};

/// A configured dial: settings plus optional user anchors (angle offsets
/// relative to the dial's visual zero).
#[derive(Clone, Debug)]
pub struct Dial {
    config: DialConfig,
    anchors: Option<AnchorTable>,
}

/// Anchors in physical angles, ready for interpolation.
#[derive(Clone, Debug)]
pub struct AnchorsResolved<'a> {
    dial: &'a Dial,
    pub physical: AnchorTable,
    /// True when the anchors were synthesised from the angle range.
    pub synthesized: bool,
}

/// Interpolated angles plus the set of temperatures drawn as major ticks.
#[derive(Clone, Debug)]
pub struct Interpolated<'a> {
    dial: &'a Dial,
    pub angles: TickAngles,
    pub majors: AngleMap,
}

/// Full page geometry in points, y axis up.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DialPlan {
    pub page_size: f64,
    pub center: Point,
    pub radius: f64,
    pub minor: Vec<MinorTick>,
    pub major: Vec<MajorTick>,
    pub labels: Vec<Label>,
    pub font_family: String,
    pub font_size: f64,
}

impl Dial {
    pub fn new(config: DialConfig, anchors: Option<AnchorTable>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, anchors })
    }

    pub fn config(&self) -> &DialConfig { &self.config }

    pub fn anchors(&self) -> Option<&AnchorTable> { self.anchors.as_ref() }

    /// Configured -> AnchorsResolved.
    pub fn resolve_anchors(&self) -> AnchorsResolved<'_> {
        let c = &self.config;
        match &self.anchors {
            Some(user) => AnchorsResolved {
                dial: self,
                physical: user.rotated(ROTATION_OFFSET_DEG),
                synthesized: false,
            },
            None => AnchorsResolved {
                dial: self,
                physical: AnchorTable::evenly_spaced(
                    c.temperature_start,
                    c.temperature_end,
                    c.angle_start,
                    c.angle_end,
                    c.major_tick_division,
                    ROTATION_OFFSET_DEG,
                ),
                synthesized: true,
            },
        }
    }

    /// Run every stage up to layout without drawing.
    pub fn plan(&self) -> Result<DialPlan> {
        Ok(self.resolve_anchors().interpolate()?.plan())
    }

    /// Run the whole pipeline against a fresh page from `backend`, persisted at `target`.
    pub fn render(&self, backend: &dyn SurfaceBackend, target: &Path) -> Result<DialPlan> {
        self.resolve_anchors().interpolate()?.render(backend, target)
    }
}

impl<'a> AnchorsResolved<'a> {
    /// AnchorsResolved -> Interpolated.
    ///
    /// Synthesised anchors are themselves the major ticks; user anchors take
    /// their majors from the interpolation. A synthesised table with a single
    /// anchor (range shorter than one major step) is drawn as that lone major.
    pub fn interpolate(self) -> Result<Interpolated<'a>> {
        let c = &self.dial.config;
        let angles = if self.synthesized && self.physical.len() < 2 {
            TickAngles::default()
        } else {
            interpolate(&self.physical, c.major_tick_division, c.minor_tick_division)?
        };
        let majors = if self.synthesized {
            self.physical.as_angle_map().clone()
        } else {
            angles.major.clone()
        };
        Ok(Interpolated { dial: self.dial, angles, majors })
    }
}

impl Interpolated<'_> {
    pub fn plan(&self) -> DialPlan {
        let c = &self.dial.config;
        let radius = mm_to_pt(c.dial_radius_mm);
        let page_size = radius * 2.0 + mm_to_pt(PAGE_MARGIN_MM);
        let center = Point::new(page_size / 2.0, page_size / 2.0);
        let circle = DialCircle { center, radius };

        let minor = layout_minor(
            circle,
            &self.angles.minor,
            c.major_tick_division,
            MinorStyle {
                length: mm_to_pt(c.minor_tick_length_mm),
                middle_length: mm_to_pt(c.middle_minor_tick_length_mm),
                width: c.minor_tick_width,
            },
        );
        let major = layout_major(
            circle,
            &self.majors,
            MajorStyle {
                length: mm_to_pt(c.major_tick_length_mm),
                width: c.major_tick_width,
                inner_width: c.major_tick_inner_width,
            },
        );
        let label_radius = mm_to_pt(c.scale_text_radius_mm);
        let labels = major.iter().map(|m| place_label(center, m, label_radius, c.font_size)).collect();

        DialPlan {
            page_size,
            center,
            radius,
            minor,
            major,
            labels,
            font_family: c.font_family.clone(),
            font_size: c.font_size,
        }
    }

    /// Interpolated -> Rendered.
    pub fn render(&self, backend: &dyn SurfaceBackend, target: &Path) -> Result<DialPlan> {
        backend.initialize()?;
        if self.angles.is_empty() {
            log::debug!("no interpolated ticks, drawing {} anchor major(s) only", self.majors.len());
        }
        let plan = self.plan();
        let mut surface = backend.create_page(plan.page_size, plan.page_size, target)?;
        draw_plan(surface.as_mut(), &plan);
        surface.finish()?;
        log::info!(
            "thermometer dial saved as {} ({} major, {} minor ticks)",
            target.display(),
            plan.major.len(),
            plan.minor.len()
        );
        Ok(plan)
    }
}

// ---- helpers ----------------------------------------------------------------

/// Replay a plan onto a surface: minors first, then majors with their labels.
pub fn draw_plan(surface: &mut dyn DrawingSurface, plan: &DialPlan) {
    for tick in &plan.minor {
        surface.set_line_width(tick.width);
        surface.line(tick.segment.start, tick.segment.end);
    }

    for (tick, label) in plan.major.iter().zip(&plan.labels) {
        surface.set_line_width(tick.inner_width);
        surface.line(tick.inner.start, tick.inner.end);
        surface.set_line_width(tick.outer_width);
        surface.line(tick.outer.start, tick.outer.end);

        surface.set_font(&plan.font_family, plan.font_size);
        surface.save_state();
        surface.translate(label.anchor.x, label.anchor.y);
        if label.vertical_correction != 0.0 {
            surface.translate(0.0, label.vertical_correction);
        }
        surface.draw_centred_string(Point::new(0.0, 0.0), &label.text);
        surface.restore_state();
    }
}
