// File: crates/dial-core/src/config.rs
// Summary: Typed dial settings and the two-section config file they persist in.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::anchors::AnchorTable;
use crate::error::{DialError, Result};

/// Directory (relative to the config file) rendered dials are written to.
pub const DEFAULT_OUTPUT_DIR: &str = "dials";
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Settings for one render pass. Lengths are millimeters, widths and font size points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DialConfig {
    pub filename: String,
    pub dial_radius_mm: f64,
    pub temperature_start: f64,
    pub temperature_end: f64,
    pub angle_start: f64,
    pub angle_end: f64,
    pub major_tick_division: f64,
    pub minor_tick_division: f64,
    pub major_tick_length_mm: f64,
    pub major_tick_width: f64,
    pub major_tick_inner_width: f64,
    pub minor_tick_length_mm: f64,
    pub minor_tick_width: f64,
    pub middle_minor_tick_length_mm: f64,
    pub scale_text_radius_mm: f64,
    pub font_size: f64,
    pub font_family: String,
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            filename: "thermometer_dial.pdf".to_string(),
            dial_radius_mm: 90.0,
            temperature_start: 0.0,
            temperature_end: 200.0,
            angle_start: 0.0,
            angle_end: 270.0,
            major_tick_division: 10.0,
            minor_tick_division: 1.0,
            major_tick_length_mm: 10.0,
            major_tick_width: 1.0,
            major_tick_inner_width: 3.0,
            minor_tick_length_mm: 5.0,
            minor_tick_width: 0.5,
            middle_minor_tick_length_mm: 7.0,
            scale_text_radius_mm: 29.0,
            font_size: 12.0,
            font_family: "Helvetica".to_string(),
        }
    }
}

impl DialConfig {
    /// Check the invariants the render pipeline relies on.
    pub fn validate(&self) -> Result<()> {
        let numbers = [
            ("dial_radius_mm", self.dial_radius_mm),
            ("temperature_start", self.temperature_start),
            ("temperature_end", self.temperature_end),
            ("angle_start", self.angle_start),
            ("angle_end", self.angle_end),
            ("major_tick_division", self.major_tick_division),
            ("minor_tick_division", self.minor_tick_division),
            ("major_tick_length_mm", self.major_tick_length_mm),
            ("major_tick_width", self.major_tick_width),
            ("major_tick_inner_width", self.major_tick_inner_width),
            ("minor_tick_length_mm", self.minor_tick_length_mm),
            ("minor_tick_width", self.minor_tick_width),
            ("middle_minor_tick_length_mm", self.middle_minor_tick_length_mm),
            ("scale_text_radius_mm", self.scale_text_radius_mm),
            ("font_size", self.font_size),
        ];
        if let Some((field, _)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(*field, "must be a finite number"));
        }
        if self.temperature_end <= self.temperature_start {
            return Err(invalid("temperature_end", "must be greater than temperature_start"));
        }
        let positive = [
            ("dial_radius_mm", self.dial_radius_mm),
            ("major_tick_division", self.major_tick_division),
            ("minor_tick_division", self.minor_tick_division),
            ("font_size", self.font_size),
        ];
        if let Some((field, _)) = positive.iter().find(|(_, v)| *v <= 0.0) {
            return Err(invalid(*field, "must be greater than zero"));
        }
        if self.filename.trim().is_empty() {
            return Err(invalid("filename", "must not be empty"));
        }
        Ok(())
    }

    /// Output path: an absolute `override_path` (or absolute `filename`) is used
    /// verbatim, anything relative lands under `output_dir`.
    pub fn resolve_output(&self, output_dir: &Path, override_path: Option<&Path>) -> PathBuf {
        let name = override_path.unwrap_or_else(|| Path::new(&self.filename));
        if name.is_absolute() {
            name.to_path_buf()
        } else {
            output_dir.join(name)
        }
    }
}

fn invalid(field: &'static str, reason: &str) -> DialError {
    DialError::InvalidConfig { field, reason: reason.to_string() }
}

/// On-disk layout: `[DialSettings]` plus an optional `[MajorTickPositions]` table.
#[derive(Deserialize)]
struct RawConfigFile {
    #[serde(rename = "DialSettings", default)]
    settings: DialConfig,
    #[serde(rename = "MajorTickPositions")]
    positions: Option<toml::Table>,
}

#[derive(Serialize)]
struct RawConfigFileOut<'a> {
    #[serde(rename = "DialSettings")]
    settings: &'a DialConfig,
    #[serde(rename = "MajorTickPositions", skip_serializing_if = "Option::is_none")]
    positions: Option<toml::Table>,
}

/// Settings plus the optional user anchor table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigFile {
    pub settings: DialConfig,
    /// `None` when the file has no `[MajorTickPositions]` section.
    pub anchors: Option<AnchorTable>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DialError::ConfigMissing(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let file = Self::parse(&content)?;
        log::info!("configuration loaded from {}", path.display());
        Ok(file)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let raw: RawConfigFile = toml::from_str(content).map_err(|e| DialError::ConfigParse(e.to_string()))?;
        raw.settings.validate()?;

        let anchors = raw.positions.map(|table| {
            let pairs: Vec<(String, String)> = table
                .iter()
                .map(|(k, v)| {
                    let value = match v {
                        toml::Value::String(s) => s.clone(),
                        toml::Value::Integer(i) => i.to_string(),
                        toml::Value::Float(f) => f.to_string(),
                        other => other.to_string(),
                    };
                    (k.clone(), value)
                })
                .collect();
            AnchorTable::from_lenient(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        });
        Ok(Self { settings: raw.settings, anchors })
    }

    pub fn to_toml_string(&self) -> Result<String> {
        let positions = self.anchors.as_ref().filter(|a| !a.is_empty()).map(|anchors| {
            anchors
                .iter()
                .map(|(t, a)| (t.to_string(), toml::Value::Float(a)))
                .collect::<toml::Table>()
        });
        let out = RawConfigFileOut { settings: &self.settings, positions };
        toml::to_string_pretty(&out).map_err(|e| DialError::ConfigParse(e.to_string()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_toml_string()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        log::info!("configuration saved to {}", path.display());
        Ok(())
    }
}
