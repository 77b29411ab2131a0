// File: crates/dial-core/src/surface.rs
// Summary: Drawing-surface collaborator interface plus an in-memory recording implementation.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::{DialError, Result};
use crate::geometry::Point;

/// One page of a vector document, y axis pointing up, units in points.
pub trait DrawingSurface {
    fn set_line_width(&mut self, width: f64);
    fn line(&mut self, from: Point, to: Point);
    fn set_font(&mut self, family: &str, size: f64);
    fn save_state(&mut self);
    fn restore_state(&mut self);
    fn translate(&mut self, dx: f64, dy: f64);
    fn rotate(&mut self, degrees: f64);
    /// Draw `text` horizontally centred on `at` (baseline at `at.y`).
    fn draw_centred_string(&mut self, at: Point, text: &str);
    /// Close the page and persist the document to the target it was created for.
    fn finish(self: Box<Self>) -> Result<()>;
}

/// Creates independent pages; one backend may serve many renders.
pub trait SurfaceBackend {
    /// One-time process setup (fonts, output directory). Must be idempotent.
    fn initialize(&self) -> Result<()> {
        Ok(())
    }

    fn create_page(&self, width: f64, height: f64, target: &Path) -> Result<Box<dyn DrawingSurface>>;
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    LineWidth(f64),
    Line(Point, Point),
    Font { family: String, size: f64 },
    Save,
    Restore,
    Translate(f64, f64),
    Rotate(f64),
    CentredString(Point, String),
}

/// Finished page captured by [`RecordingBackend`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedPage {
    pub target: PathBuf,
    pub width: f64,
    pub height: f64,
    pub ops: Vec<DrawOp>,
}

/// Surface that only records draw calls.
pub struct RecordingSurface {
    page: RecordedPage,
    sink: Arc<Mutex<Vec<RecordedPage>>>,
}

impl DrawingSurface for RecordingSurface {
    fn set_line_width(&mut self, width: f64) { self.page.ops.push(DrawOp::LineWidth(width)); }
    fn line(&mut self, from: Point, to: Point) { self.page.ops.push(DrawOp::Line(from, to)); }
    fn set_font(&mut self, family: &str, size: f64) {
        self.page.ops.push(DrawOp::Font { family: family.to_string(), size });
    }
    fn save_state(&mut self) { self.page.ops.push(DrawOp::Save); }
    fn restore_state(&mut self) { self.page.ops.push(DrawOp::Restore); }
    fn translate(&mut self, dx: f64, dy: f64) { self.page.ops.push(DrawOp::Translate(dx, dy)); }
    fn rotate(&mut self, degrees: f64) { self.page.ops.push(DrawOp::Rotate(degrees)); }
    fn draw_centred_string(&mut self, at: Point, text: &str) {
        self.page.ops.push(DrawOp::CentredString(at, text.to_string()));
    }

    fn finish(self: Box<Self>) -> Result<()> {
        let this = *self;
        let mut pages = this.sink.lock().map_err(|_| DialError::render("recording sink poisoned"))?;
        pages.push(this.page);
        Ok(())
    }
}

/// Backend handing out [`RecordingSurface`]s; finished pages are kept in order.
#[derive(Clone, Default)]
pub struct RecordingBackend {
    pages: Arc<Mutex<Vec<RecordedPage>>>,
}

impl RecordingBackend {
    pub fn new() -> Self { Self::default() }

    pub fn pages(&self) -> Vec<RecordedPage> {
        self.pages.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

impl SurfaceBackend for RecordingBackend {
    fn create_page(&self, width: f64, height: f64, target: &Path) -> Result<Box<dyn DrawingSurface>> {
        Ok(Box::new(RecordingSurface {
            page: RecordedPage { target: target.to_path_buf(), width, height, ops: Vec::new() },
            sink: Arc::clone(&self.pages),
        }))
    }
}
