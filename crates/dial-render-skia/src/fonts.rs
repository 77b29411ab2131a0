// File: crates/dial-render-skia/src/fonts.rs
// Summary: Process-wide label font registry and per-page typeface lookup.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex, OnceLock};

use dial_core::{DialError, Result};
use skia_safe as skia;

/// Font files registered by family name; shared by every render in the process.
fn registry() -> &'static Mutex<HashMap<String, Arc<Vec<u8>>>> {
    static REGISTRY: OnceLock<Mutex<HashMap<String, Arc<Vec<u8>>>>> = OnceLock::new();
    REGISTRY.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Register a TTF/OTF file under `family`. Registering a family twice is a no-op.
pub fn register_font_file(family: &str, path: &Path) -> Result<()> {
    let mut fonts = registry().lock().map_err(|_| DialError::render("font registry poisoned"))?;
    if fonts.contains_key(family) {
        return Ok(());
    }
    let data = std::fs::read(path)?;
    log::info!("registered font '{}' from {}", family, path.display());
    fonts.insert(family.to_string(), Arc::new(data));
    Ok(())
}

pub fn is_registered(family: &str) -> bool {
    registry().lock().map(|f| f.contains_key(family)).unwrap_or(false)
}

fn registered_data(family: &str) -> Option<Arc<Vec<u8>>> {
    registry().lock().ok().and_then(|f| f.get(family).cloned())
}

/// Resolves families to typefaces for one page; caches per family.
pub struct FontResolver {
    mgr: skia::FontMgr,
    cache: HashMap<String, skia::Typeface>,
}

impl FontResolver {
    pub fn new() -> Self {
        Self { mgr: skia::FontMgr::default(), cache: HashMap::new() }
    }

    /// Registered files win over system fonts; unknown families fall back to the default face.
    pub fn typeface(&mut self, family: &str) -> Option<skia::Typeface> {
        if let Some(tf) = self.cache.get(family) {
            return Some(tf.clone());
        }
        let tf = registered_data(family)
            .and_then(|data| self.mgr.new_from_data(&data, None))
            .or_else(|| self.mgr.match_family_style(family, skia::FontStyle::normal()))
            .or_else(|| {
                log::warn!("font family '{family}' not found, using default typeface");
                self.mgr.legacy_make_typeface(None::<&str>,skia::FontStyle::normal())
            })?;
        self.cache.insert(family.to_string(), tf.clone());
        Some(tf)
    }

    /// Font at `size` points; skia's built-in default when no typeface resolves.
    pub fn font(&mut self, family: &str, size: f64) -> skia::Font {
        let size = size.max(1.0) as f32;
        match self.typeface(family) {
            Some(tf) => skia::Font::from_typeface(tf, size),
            None => {
                let mut font = skia::Font::default();
                font.set_size(size);
                font
            }
        }
    }
}

impl Default for FontResolver {
    fn default() -> Self { Self::new() }
}
