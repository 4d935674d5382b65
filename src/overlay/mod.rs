//! Transient visual overlays composited over the rendered chart.

mod compositor;
mod crosshair;

pub use compositor::OverlayCompositor;
pub use crosshair::{Crosshair, CrosshairOverlay};

use std::cell::RefCell;
use std::rc::Rc;

use crate::chart::{Chart, RenderingInfo};
use crate::core::signal::ChangeSignal;
use crate::error::SurfaceResult;
use crate::render::DrawTarget;

/// Overlay handle shared between the surface (which paints it) and the host
/// (which mutates its visual parameters).
pub type SharedOverlay = Rc<RefCell<dyn Overlay>>;

/// Read-only view an overlay paints against: the latest rendering-info
/// snapshot and the chart, never the base renderer internals.
pub struct OverlayContext<'a> {
    pub rendering_info: Option<&'a RenderingInfo>,
    pub chart: Option<&'a Chart>,
}

/// A paintable, change-notifying object drawn after the base chart render.
///
/// The surface subscribes the overlay to its change signal on add, so
/// overlay-internal mutations trigger a redraw; implementations raise the
/// subscribed signal from every mutating setter.
pub trait Overlay {
    fn subscribe(&mut self, signal: ChangeSignal);

    fn unsubscribe(&mut self);

    fn paint(&self, target: &mut dyn DrawTarget, ctx: &OverlayContext<'_>) -> SurfaceResult<()>;
}
