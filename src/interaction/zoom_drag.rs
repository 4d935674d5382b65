use tracing::warn;

use crate::chart::Chart;
use crate::core::geometry::{Point, Rectangle};
use crate::core::transform::{AxisEdge, AxisRange};
use crate::error::SurfaceResult;
use crate::interaction::event::{ModifierMask, PointerEvent};
use crate::interaction::handler::{HandlerBase, InputHandler};
use crate::surface::SurfaceState;

/// Selections narrower than this on every zoomable screen axis are treated
/// as an accidental drag and zoom nothing.
const MIN_SELECTION_PIXELS: f64 = 2.0;

/// Live handler implementing rubber-band zoom.
///
/// Press inside the data area starts a selection; dragging updates the
/// host-visible zoom rectangle (clamped to the data area and collapsed to
/// the full extent of any non-zoomable screen axis); release maps the
/// rectangle corners back to axis values and applies them as new bounds.
pub struct ZoomDragHandler {
    base: HandlerBase,
    start: Option<Point>,
    data_area: Rectangle,
}

impl ZoomDragHandler {
    pub fn new(id: impl Into<String>) -> SurfaceResult<Self> {
        Ok(Self {
            base: HandlerBase::new(id)?,
            start: None,
            data_area: Rectangle::new(0.0, 0.0, 0.0, 0.0),
        })
    }

    pub fn with_modifiers(id: impl Into<String>, modifiers: ModifierMask) -> SurfaceResult<Self> {
        Ok(Self {
            base: HandlerBase::new(id)?.with_modifiers(modifiers),
            start: None,
            data_area: Rectangle::new(0.0, 0.0, 0.0, 0.0),
        })
    }

    /// The selection rectangle for the current pointer position, stretched
    /// to the full data-area extent along any axis the surface cannot zoom.
    fn selection_rect(
        &self,
        state: &SurfaceState,
        chart: &Chart,
        start: Point,
        current: Point,
    ) -> Rectangle {
        let end = self.data_area.clamp_point(current);
        let mut rect = Rectangle::from_corners(start, end);

        let domain_along_x = chart.domain_axis_edge().maps_along_x();
        let x_zoomable = if domain_along_x {
            state.is_domain_zoomable()
        } else {
            state.is_range_zoomable()
        };
        let y_zoomable = if domain_along_x {
            state.is_range_zoomable()
        } else {
            state.is_domain_zoomable()
        };

        if !x_zoomable {
            rect.x = self.data_area.min_x();
            rect.width = self.data_area.width;
        }
        if !y_zoomable {
            rect.y = self.data_area.min_y();
            rect.height = self.data_area.height;
        }
        rect
    }

    fn selected_bounds(
        bounds: AxisRange,
        rect: Rectangle,
        data_area: Rectangle,
        edge: AxisEdge,
    ) -> SurfaceResult<AxisRange> {
        let (p1, p2) = if edge.maps_along_x() {
            (rect.min_x(), rect.max_x())
        } else {
            (rect.min_y(), rect.max_y())
        };
        let v1 = bounds.pixel_to_value(p1, data_area, edge)?;
        let v2 = bounds.pixel_to_value(p2, data_area, edge)?;
        AxisRange::new(v1.min(v2), v1.max(v2))
    }
}

impl InputHandler for ZoomDragHandler {
    fn base(&self) -> &HandlerBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut HandlerBase {
        &mut self.base
    }

    fn on_press(&mut self, state: &mut SurfaceState, event: &PointerEvent) {
        let Some(chart) = state.chart().cloned() else {
            state.relinquish_live_handler();
            return;
        };
        if !chart.borrow().supports_axis_zoom() {
            state.relinquish_live_handler();
            return;
        }
        let point = event.point();
        let Some(data_area) = state.find_data_area(point) else {
            state.relinquish_live_handler();
            return;
        };
        if !data_area.contains(point) {
            state.relinquish_live_handler();
            return;
        }
        self.data_area = data_area;
        self.start = Some(point);
    }

    fn on_drag(&mut self, state: &mut SurfaceState, event: &PointerEvent) {
        let Some(start) = self.start else {
            state.relinquish_live_handler();
            return;
        };
        let Some(chart) = state.chart().cloned() else {
            return;
        };
        let rect = self.selection_rect(state, &chart.borrow(), start, event.point());
        state.set_zoom_rectangle(Some(rect));
    }

    fn on_release(&mut self, state: &mut SurfaceState, event: &PointerEvent) {
        let Some(start) = self.start.take() else {
            state.relinquish_live_handler();
            return;
        };
        state.set_zoom_rectangle(None);
        let Some(chart) = state.chart().cloned() else {
            state.relinquish_live_handler();
            return;
        };
        let mut chart = chart.borrow_mut();
        let rect = self.selection_rect(state, &chart, start, event.point());

        let domain_along_x = chart.domain_axis_edge().maps_along_x();
        let domain_span_px = if domain_along_x { rect.width } else { rect.height };
        let range_span_px = if domain_along_x { rect.height } else { rect.width };

        let zoom_domain =
            state.is_domain_zoomable() && domain_span_px >= MIN_SELECTION_PIXELS;
        let zoom_range = state.is_range_zoomable() && range_span_px >= MIN_SELECTION_PIXELS;
        if !zoom_domain && !zoom_range {
            state.relinquish_live_handler();
            return;
        }

        let saved_notify = chart.is_notify();
        chart.set_notify(false);
        if zoom_domain {
            if let Some(bounds) = chart.domain_bounds() {
                match Self::selected_bounds(bounds, rect, self.data_area, chart.domain_axis_edge())
                {
                    Ok(selected) => chart.set_domain_bounds(selected),
                    Err(err) => warn!(error = %err, "skipping domain zoom, selection degenerated"),
                }
            }
        }
        if zoom_range {
            if let Some(bounds) = chart.range_bounds() {
                match Self::selected_bounds(bounds, rect, self.data_area, chart.range_axis_edge()) {
                    Ok(selected) => chart.set_range_bounds(selected),
                    Err(err) => warn!(error = %err, "skipping range zoom, selection degenerated"),
                }
            }
        }
        chart.set_notify(saved_notify);

        state.relinquish_live_handler();
    }
}
