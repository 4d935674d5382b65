use crate::chart::rendering_info::PlotRenderingInfo;
use crate::core::geometry::Point;
use crate::core::transform::{AxisEdge, AxisRange, Orientation};

/// Capability boundary between the surface's input handlers and a plot
/// implementation.
///
/// Handlers query capabilities before starting a gesture and treat missing
/// capabilities as silent no-ops. Mutating operations take the plot rendering
/// info and the gesture source point so implementations can anchor the
/// mutation; they never notify — change notification is the owning
/// [`Chart`](crate::chart::Chart)'s concern.
pub trait PlotBehavior {
    fn orientation(&self) -> Orientation;

    fn is_domain_pannable(&self) -> bool {
        false
    }

    fn is_range_pannable(&self) -> bool {
        false
    }

    /// Whether the plot supports value-axis zooming at all. Plots returning
    /// `false` may still consume wheel input via [`PlotBehavior::wheel_rotate`].
    fn supports_axis_zoom(&self) -> bool {
        false
    }

    fn domain_axis_edge(&self) -> AxisEdge {
        match self.orientation() {
            Orientation::Vertical => AxisEdge::Bottom,
            Orientation::Horizontal => AxisEdge::Left,
        }
    }

    fn range_axis_edge(&self) -> AxisEdge {
        match self.orientation() {
            Orientation::Vertical => AxisEdge::Left,
            Orientation::Horizontal => AxisEdge::Bottom,
        }
    }

    /// Current domain axis bounds, when the plot has a domain value axis.
    fn domain_bounds(&self) -> Option<AxisRange> {
        None
    }

    fn range_bounds(&self) -> Option<AxisRange> {
        None
    }

    fn pan_domain_axes(&mut self, percent: f64, info: &PlotRenderingInfo, source: Point) {
        let _ = (percent, info, source);
    }

    fn pan_range_axes(&mut self, percent: f64, info: &PlotRenderingInfo, source: Point) {
        let _ = (percent, info, source);
    }

    /// Zooms the domain axes by a multiplicative factor. With
    /// `anchor_on_point` the value under `source` keeps its screen position.
    fn zoom_domain_axes(
        &mut self,
        factor: f64,
        info: &PlotRenderingInfo,
        source: Point,
        anchor_on_point: bool,
    ) {
        let _ = (factor, info, source, anchor_on_point);
    }

    fn zoom_range_axes(
        &mut self,
        factor: f64,
        info: &PlotRenderingInfo,
        source: Point,
        anchor_on_point: bool,
    ) {
        let _ = (factor, info, source, anchor_on_point);
    }

    /// Replaces the domain axis bounds (used by rubber-band zoom).
    fn set_domain_bounds(&mut self, bounds: AxisRange) {
        let _ = bounds;
    }

    fn set_range_bounds(&mut self, bounds: AxisRange) {
        let _ = bounds;
    }

    /// Consumes a raw wheel rotation for plots without value axes (circular
    /// plots rotate instead of zooming). Returns `true` when handled.
    fn wheel_rotate(&mut self, ticks: i32) -> bool {
        let _ = ticks;
        false
    }
}
