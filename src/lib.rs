//! chart-surface: interactive event-dispatch engine for chart displays.
//!
//! This crate arbitrates pointer/scroll input between independently
//! registered handlers (live gesture handlers and always-run auxiliaries),
//! provides the screen/data coordinate math behind pan and zoom, and
//! composites transient overlays over externally rendered chart content.

pub mod chart;
pub mod core;
pub mod error;
pub mod interaction;
pub mod overlay;
pub mod render;
pub mod surface;
pub mod telemetry;

pub use error::{SurfaceError, SurfaceResult};
pub use surface::{Surface, SurfaceState};
