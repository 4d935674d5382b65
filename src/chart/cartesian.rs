use tracing::warn;

use crate::chart::plot::PlotBehavior;
use crate::chart::rendering_info::PlotRenderingInfo;
use crate::core::geometry::Point;
use crate::core::transform::{AxisRange, Orientation, point_to_axis_value};

/// An axis-backed plot with one domain and one range value axis.
///
/// This is the plot implementation hosts use for ordinary xy charts; the
/// pan/zoom operations derive new axis bounds and nothing else, so the same
/// instance works under any renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartesianPlot {
    domain: AxisRange,
    range: AxisRange,
    orientation: Orientation,
    domain_pannable: bool,
    range_pannable: bool,
}

impl CartesianPlot {
    #[must_use]
    pub fn new(domain: AxisRange, range: AxisRange) -> Self {
        Self {
            domain,
            range,
            orientation: Orientation::Vertical,
            domain_pannable: true,
            range_pannable: true,
        }
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_pannable(mut self, domain: bool, range: bool) -> Self {
        self.domain_pannable = domain;
        self.range_pannable = range;
        self
    }

    #[must_use]
    pub fn domain(&self) -> AxisRange {
        self.domain
    }

    #[must_use]
    pub fn range(&self) -> AxisRange {
        self.range
    }

    fn anchor_value(
        &self,
        range: AxisRange,
        info: &PlotRenderingInfo,
        source: Point,
        edge: crate::core::transform::AxisEdge,
        anchor_on_point: bool,
    ) -> f64 {
        if anchor_on_point {
            match point_to_axis_value(range, source, info.data_area(), edge) {
                Ok(value) => return value,
                Err(err) => {
                    warn!(error = %err, "zoom anchor mapping degenerated, falling back to midpoint");
                }
            }
        }
        (range.lower() + range.upper()) / 2.0
    }
}

impl PlotBehavior for CartesianPlot {
    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn is_domain_pannable(&self) -> bool {
        self.domain_pannable
    }

    fn is_range_pannable(&self) -> bool {
        self.range_pannable
    }

    fn supports_axis_zoom(&self) -> bool {
        true
    }

    fn domain_bounds(&self) -> Option<AxisRange> {
        Some(self.domain)
    }

    fn range_bounds(&self) -> Option<AxisRange> {
        Some(self.range)
    }

    fn pan_domain_axes(&mut self, percent: f64, _info: &PlotRenderingInfo, _source: Point) {
        if self.domain_pannable {
            self.domain = self.domain.panned(percent);
        }
    }

    fn pan_range_axes(&mut self, percent: f64, _info: &PlotRenderingInfo, _source: Point) {
        if self.range_pannable {
            self.range = self.range.panned(percent);
        }
    }

    fn zoom_domain_axes(
        &mut self,
        factor: f64,
        info: &PlotRenderingInfo,
        source: Point,
        anchor_on_point: bool,
    ) {
        let anchor = self.anchor_value(
            self.domain,
            info,
            source,
            self.domain_axis_edge(),
            anchor_on_point,
        );
        self.domain = self.domain.zoomed_about(factor, anchor);
    }

    fn zoom_range_axes(
        &mut self,
        factor: f64,
        info: &PlotRenderingInfo,
        source: Point,
        anchor_on_point: bool,
    ) {
        let anchor = self.anchor_value(
            self.range,
            info,
            source,
            self.range_axis_edge(),
            anchor_on_point,
        );
        self.range = self.range.zoomed_about(factor, anchor);
    }

    fn set_domain_bounds(&mut self, bounds: AxisRange) {
        self.domain = bounds;
    }

    fn set_range_bounds(&mut self, bounds: AxisRange) {
        self.range = bounds;
    }
}
