// File: crates/dial-core/src/lib.rs
// Summary: Core library entry point; exports anchor interpolation, tick layout and the dial pipeline.

pub mod anchors;
pub mod config;
pub mod dial;
pub mod error;
pub mod geometry;
pub mod interpolate;
pub mod label;
pub mod layout;
pub mod surface;
pub mod types;

pub use anchors::{AnchorRow, AnchorTable};
pub use config::{ConfigFile, DialConfig};
pub use dial::{Dial, DialPlan};
pub use error::{DialError, Result};
pub use geometry::{Point, Segment};
pub use interpolate::{interpolate, TickAngles};
pub use label::Label;
pub use layout::{MajorTick, MinorTick};
pub use surface::{DrawOp, DrawingSurface, RecordingBackend, SurfaceBackend};
pub use types::{ResolvedTick, Temperature, TickClass};
