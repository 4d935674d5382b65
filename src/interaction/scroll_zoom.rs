use crate::error::SurfaceResult;
use crate::interaction::event::ScrollEvent;
use crate::interaction::handler::{HandlerBase, InputHandler};
use crate::surface::SurfaceState;

/// Auxiliary handler that zooms the plot axes on scroll-wheel input.
///
/// Plots without value axes (circular plots) get the raw wheel rotation
/// delegated instead. Axis zooming is gated on the pointer being inside the
/// data area and applies domain/range independently per the surface's
/// zoomable flags, with notification suppressed until both axes are updated.
pub struct ScrollZoomHandler {
    base: HandlerBase,
    step_percent: f64,
}

impl ScrollZoomHandler {
    pub fn new(id: impl Into<String>) -> SurfaceResult<Self> {
        Ok(Self {
            base: HandlerBase::new(id)?,
            step_percent: 0.1,
        })
    }

    #[must_use]
    pub fn step_percent(&self) -> f64 {
        self.step_percent
    }

    #[must_use]
    pub fn with_step_percent(mut self, step_percent: f64) -> Self {
        self.step_percent = step_percent;
        self
    }
}

impl InputHandler for ScrollZoomHandler {
    fn base(&self) -> &HandlerBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut HandlerBase {
        &mut self.base
    }

    fn on_scroll(&mut self, state: &mut SurfaceState, event: &ScrollEvent) {
        let Some(chart) = state.chart().cloned() else {
            return;
        };

        #[allow(clippy::cast_possible_truncation)]
        let ticks = event.delta as i32;
        // some input backends emit spurious zero-delta wheel events
        let Some(factor) = crate::core::transform::zoom_factor(ticks, self.step_percent) else {
            return;
        };

        if !chart.borrow().supports_axis_zoom() {
            chart.borrow_mut().wheel_rotate(ticks);
            return;
        }

        let point = event.point();
        let Some(info) = state.rendering_info().cloned() else {
            return;
        };
        if !info.plot_info().data_area().contains(point) {
            return;
        }

        let mut chart = chart.borrow_mut();
        let saved_notify = chart.is_notify();
        chart.set_notify(false);
        if state.is_domain_zoomable() {
            chart.zoom_domain_axes(factor, info.plot_info(), point, true);
        }
        if state.is_range_zoomable() {
            chart.zoom_range_axes(factor, info.plot_info(), point, true);
        }
        // restoring the flag emits the coalesced change notification
        chart.set_notify(saved_notify);
    }
}
