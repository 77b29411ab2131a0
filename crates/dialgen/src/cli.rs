// File: crates/dialgen/src/cli.rs
// Summary: Command-line arguments and their mapping onto dial inputs.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use dial_core::config::{DEFAULT_CONFIG_FILE, DEFAULT_OUTPUT_DIR};
use dial_core::{AnchorRow, AnchorTable};

#[derive(Debug, Parser)]
#[command(name = "dialgen", version, about = "Generate thermometer dial scales as PDF")]
pub struct Cli {
    /// Configuration file ([DialSettings] and optional [MajorTickPositions]).
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write a configuration file with default settings.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
    /// Render the dial to a PDF.
    Render(RenderArgs),
    /// Print the resolved tick and label geometry as JSON.
    Inspect {
        #[command(flatten)]
        anchors: AnchorArgs,
    },
}

#[derive(Debug, Args)]
pub struct AnchorArgs {
    /// Major tick position as TEMP:ANGLE; repeat for more. Replaces the config's table.
    #[arg(short, long = "anchor", value_name = "TEMP:ANGLE", allow_hyphen_values = true)]
    pub anchors: Vec<String>,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub anchors: AnchorArgs,

    /// Output file; relative paths land in the output directory.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output directory (default: `dials` next to the config file).
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Label font file registered under the configured font family.
    #[arg(long, value_name = "TTF")]
    pub font_file: Option<PathBuf>,

    /// Persist the given anchors into the config file before rendering.
    #[arg(long)]
    pub save: bool,
}

impl AnchorArgs {
    /// Each flag becomes one form row; a missing `:` leaves the angle blank.
    pub fn rows(&self) -> Vec<AnchorRow> {
        self.anchors
            .iter()
            .map(|raw| match raw.split_once(':') {
                Some((t, a)) => AnchorRow::new(t, a),
                None => AnchorRow::new(raw.as_str(), ""),
            })
            .collect()
    }

    /// Strictly parsed anchors; `None` when every row is blank, which falls
    /// back to even spacing like a config without a positions section.
    pub fn table(&self) -> dial_core::Result<Option<AnchorTable>> {
        let table = AnchorTable::from_rows(&self.rows())?;
        Ok(Some(table).filter(|t| !t.is_empty()))
    }
}

pub fn default_output_dir(config: &Path) -> PathBuf {
    config
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
        .join(DEFAULT_OUTPUT_DIR)
}
