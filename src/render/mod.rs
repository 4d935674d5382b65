mod primitives;
mod recording;

pub use primitives::{Color, LinePrimitive};
pub use recording::{RecordedChartRender, RecordingRenderer};

use crate::chart::{Chart, RenderingInfo};
use crate::core::geometry::{Point, Rectangle};
use crate::error::SurfaceResult;

/// Drawing operations available to overlays.
///
/// Overlays paint into the same target as the base chart, strictly after the
/// base render, so a target implementation only needs immediate-mode
/// primitives and a clip stack.
pub trait DrawTarget {
    fn clear(&mut self, bounds: Rectangle) -> SurfaceResult<()>;
    fn draw_line(&mut self, line: LinePrimitive) -> SurfaceResult<()>;
    fn push_clip(&mut self, area: Rectangle) -> SurfaceResult<()>;
    fn pop_clip(&mut self) -> SurfaceResult<()>;
}

/// Contract implemented by any chart rendering backend.
///
/// The backend consumes the canvas bounds and the transient anchor point,
/// draws the chart into its own target, and returns the rendering-info
/// snapshot the surface uses for hit-testing until the next draw.
pub trait ChartRenderer: DrawTarget {
    fn render_chart(
        &mut self,
        chart: &Chart,
        bounds: Rectangle,
        anchor: Option<Point>,
    ) -> SurfaceResult<RenderingInfo>;
}
