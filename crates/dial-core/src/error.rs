// File: crates/dial-core/src/error.rs
// Summary: Error type shared by config loading, anchor parsing and rendering.

use std::path::PathBuf;

pub type Result<T, E = DialError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum DialError {
    #[error("configuration file '{}' not found", .0.display())]
    ConfigMissing(PathBuf),

    #[error("invalid configuration: {0}")]
    ConfigParse(String),

    #[error("invalid value for {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// Row numbers are 1-based, as shown to the user.
    #[error("major tick position {0} is incomplete")]
    AnchorIncomplete(usize),

    #[error("invalid float values for major tick position {row}: '{value}'")]
    AnchorParse { row: usize, value: String },

    #[error("at least 2 major tick anchors are required, got {0}")]
    InsufficientAnchors(usize),

    #[error("render failed: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DialError {
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}
