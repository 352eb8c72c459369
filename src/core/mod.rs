//! Platform-agnostic core - shared between the WASM front-end and CLI

pub mod camera;
pub mod config;
pub mod constellation;
pub mod content;
pub mod error;
pub mod field;
pub mod frame;
pub mod palette;
pub mod reveal;
pub mod segments;
pub mod tracker;

pub use camera::{OrbitCamera, Viewport};
pub use config::ConstellationConfig;
pub use constellation::{Constellation, TickOutcome};
pub use content::{Portfolio, Section};
pub use error::{Error, Result};
pub use field::{Point, PointField, PointId, StarShell};
pub use frame::RenderFrame;
pub use segments::{Segment, SegmentBuffer};
pub use tracker::{ProximityTracker, Selection};
