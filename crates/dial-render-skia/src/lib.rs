// File: crates/dial-render-skia/src/lib.rs
// Summary: Skia PDF backend; records draw calls for one page and writes the document on finish.

pub mod fonts;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use dial_core::surface::{DrawOp, DrawingSurface, SurfaceBackend};
use dial_core::{DialError, Point, Result};
use skia_safe as skia;

use crate::fonts::FontResolver;

pub use fonts::register_font_file;

/// Process-wide state a render relies on: the output directory and label fonts.
#[derive(Clone, Debug, Default)]
pub struct RenderEnvironment {
    pub output_dir: PathBuf,
    /// (family, font file) pairs made available to `set_font`.
    pub font_files: Vec<(String, PathBuf)>,
}

/// Create the output directory and register label fonts. Safe to call repeatedly.
pub fn initialize_rendering_environment(env: &RenderEnvironment) -> Result<()> {
    if !env.output_dir.as_os_str().is_empty() {
        std::fs::create_dir_all(&env.output_dir)?;
    }
    for (family, path) in &env.font_files {
        fonts::register_font_file(family, path)?;
    }
    Ok(())
}

pub struct SkiaPdfBackend {
    env: RenderEnvironment,
}

impl SkiaPdfBackend {
    pub fn new(env: RenderEnvironment) -> Self {
        Self { env }
    }

    pub fn environment(&self) -> &RenderEnvironment { &self.env }
}

impl SurfaceBackend for SkiaPdfBackend {
    fn initialize(&self) -> Result<()> {
        initialize_rendering_environment(&self.env)
    }

    fn create_page(&self, width: f64, height: f64, target: &Path) -> Result<Box<dyn DrawingSurface>> {
        if !(width > 0.0 && height > 0.0) {
            return Err(DialError::render(format!("invalid page size {width}x{height}")));
        }
        Ok(Box::new(SkiaPdfSurface::new(width, height, target)))
    }
}

/// Page surface. Draw calls are buffered and replayed onto a PDF canvas in
/// `finish`, so the document lives only as long as the write.
pub struct SkiaPdfSurface {
    width: f64,
    height: f64,
    target: PathBuf,
    ops: Vec<DrawOp>,
}

impl SkiaPdfSurface {
    pub fn new(width: f64, height: f64, target: &Path) -> Self {
        Self { width, height, target: target.to_path_buf(), ops: Vec::new() }
    }

    /// Render the buffered page into PDF bytes.
    pub fn to_pdf_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes: Vec<u8> = Vec::new();
        {
            let document = skia::pdf::new_document(&mut bytes, None);
            let mut page = document.begin_page((self.width as f32, self.height as f32), None);
            replay(page.canvas(), self.height as f32, &self.ops);
            page.end_page().close();
        }
        if bytes.is_empty() {
            return Err(DialError::render("PDF backend produced no output"));
        }
        Ok(bytes)
    }
}

impl DrawingSurface for SkiaPdfSurface {
    fn set_line_width(&mut self, width: f64) { self.ops.push(DrawOp::LineWidth(width)); }
    fn line(&mut self, from: Point, to: Point) { self.ops.push(DrawOp::Line(from, to)); }
    fn set_font(&mut self, family: &str, size: f64) {
        self.ops.push(DrawOp::Font { family: family.to_string(), size });
    }
    fn save_state(&mut self) { self.ops.push(DrawOp::Save); }
    fn restore_state(&mut self) { self.ops.push(DrawOp::Restore); }
    fn translate(&mut self, dx: f64, dy: f64) { self.ops.push(DrawOp::Translate(dx, dy)); }
    fn rotate(&mut self, degrees: f64) { self.ops.push(DrawOp::Rotate(degrees)); }
    fn draw_centred_string(&mut self, at: Point, text: &str) {
        self.ops.push(DrawOp::CentredString(at, text.to_string()));
    }

    fn finish(self: Box<Self>) -> Result<()> {
        let bytes = self.to_pdf_bytes()?;
        write_atomically(&self.target, &bytes)
    }
}

// ---- helpers ----------------------------------------------------------------

const DEFAULT_FAMILY: &str = "Helvetica";
const DEFAULT_SIZE: f64 = 12.0;

fn replay(canvas: &skia::Canvas, page_height: f32, ops: &[DrawOp]) {
    // y axis up, origin bottom-left
    canvas.translate((0.0, page_height));
    canvas.scale((1.0, -1.0));

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_color(skia::Color::BLACK);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(skia::Color::BLACK);

    let mut resolver = FontResolver::new();
    let mut font: Option<skia::Font> = None;

    for op in ops {
        match op {
            DrawOp::LineWidth(w) => {
                stroke.set_stroke_width(*w as f32);
            }
            DrawOp::Line(a, b) => {
                canvas.draw_line(pt(*a), pt(*b), &stroke);
            }
            DrawOp::Font { family, size } => {
                font = Some(resolver.font(family, *size));
            }
            DrawOp::Save => {
                canvas.save();
            }
            DrawOp::Restore => {
                canvas.restore();
            }
            DrawOp::Translate(dx, dy) => {
                canvas.translate((*dx as f32, *dy as f32));
            }
            DrawOp::Rotate(deg) => {
                canvas.rotate(*deg as f32, None);
            }
            DrawOp::CentredString(at, text) => {
                let f = match &font {
                    Some(f) => f.clone(),
                    None => resolver.font(DEFAULT_FAMILY, DEFAULT_SIZE),
                };
                let (width, _) = f.measure_str(text, Some(&fill));
                canvas.save();
                canvas.translate(pt(*at));
                // glyphs are drawn y-down
                canvas.scale((1.0, -1.0));
                canvas.draw_str(text, (-width / 2.0, 0.0), &f, &fill);
                canvas.restore();
            }
        }
    }
}

#[inline]
fn pt(p: Point) -> skia::Point {
    skia::Point::new(p.x as f32, p.y as f32)
}

/// Write to `<target>.partial` and rename, so a failure never leaves a
/// truncated file under the final name.
fn write_atomically(target: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut tmp: OsString = target.as_os_str().to_owned();
    tmp.push(".partial");
    let tmp = PathBuf::from(tmp);

    if let Err(e) = std::fs::write(&tmp, bytes).and_then(|_| std::fs::rename(&tmp, target)) {
        let _ = std::fs::remove_file(&tmp);
        return Err(DialError::render(format!("cannot write {}: {e}", target.display())));
    }
    Ok(())
}
