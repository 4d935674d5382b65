use crate::core::geometry::Point;
use crate::core::transform::pan_percentages;
use crate::error::SurfaceResult;
use crate::interaction::event::{ModifierMask, PointerEvent};
use crate::interaction::handler::{HandlerBase, InputHandler};
use crate::surface::SurfaceState;

/// Live handler that pans the plot by dragging.
///
/// The gesture starts only when the plot is pannable and the press lands
/// inside the data area; otherwise the handler relinquishes live status so
/// the next press can re-resolve. Dragging converts the pixel delta into pan
/// fractions of the recorded data-area size, honoring the orientation swap,
/// and applies both axes under one suppressed-notify batch so the gesture
/// redraws once per drag event.
pub struct PanHandler {
    base: HandlerBase,
    last: Option<Point>,
    pan_width: f64,
    pan_height: f64,
}

impl PanHandler {
    pub fn new(id: impl Into<String>) -> SurfaceResult<Self> {
        Ok(Self {
            base: HandlerBase::new(id)?,
            last: None,
            pan_width: 0.0,
            pan_height: 0.0,
        })
    }

    pub fn with_modifiers(id: impl Into<String>, modifiers: ModifierMask) -> SurfaceResult<Self> {
        Ok(Self {
            base: HandlerBase::new(id)?.with_modifiers(modifiers),
            last: None,
            pan_width: 0.0,
            pan_height: 0.0,
        })
    }
}

impl InputHandler for PanHandler {
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
        let point = event.point();
        if !chart.borrow().is_pannable() {
            state.relinquish_live_handler();
            return;
        }
        let Some(data_area) = state.find_data_area(point) else {
            state.relinquish_live_handler();
            return;
        };
        if !data_area.contains(point) {
            state.relinquish_live_handler();
            return;
        }
        self.pan_width = data_area.width;
        self.pan_height = data_area.height;
        self.last = Some(point);
        // the actual panning happens in on_drag
    }

    fn on_drag(&mut self, state: &mut SurfaceState, event: &PointerEvent) {
        let Some(last) = self.last else {
            // no start point recorded, give the live slot back
            state.relinquish_live_handler();
            return;
        };
        let Some(chart) = state.chart().cloned() else {
            return;
        };
        let dx = event.x - last.x;
        let dy = event.y - last.y;
        if dx == 0.0 && dy == 0.0 {
            return;
        }
        let Some(info) = state.rendering_info().cloned() else {
            return;
        };

        let area = crate::core::geometry::Rectangle::new(0.0, 0.0, self.pan_width, self.pan_height);
        let mut chart = chart.borrow_mut();
        let (domain_percent, range_percent) =
            pan_percentages(dx, dy, area, chart.orientation());

        let saved_notify = chart.is_notify();
        chart.set_notify(false);
        chart.pan_domain_axes(domain_percent, info.plot_info(), last);
        chart.pan_range_axes(range_percent, info.plot_info(), last);
        chart.set_notify(saved_notify);

        self.last = Some(event.point());
    }

    fn on_release(&mut self, state: &mut SurfaceState, _event: &PointerEvent) {
        self.last = None;
        state.relinquish_live_handler();
    }
}
