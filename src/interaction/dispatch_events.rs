use crate::core::geometry::Point;
use crate::error::SurfaceResult;
use crate::interaction::event::{ChartPointerEvent, PointerEvent};
use crate::interaction::handler::{HandlerBase, InputHandler};
use crate::surface::SurfaceState;

/// Auxiliary handler that turns raw pointer events into semantic
/// [`ChartPointerEvent`]s for application listeners.
///
/// Moves and clicks look up the entity under the pointer in the current
/// rendering-info snapshot and broadcast to every registered listener in
/// registration order. This handler is the sole producer of listener events.
pub struct DispatchHandler {
    base: HandlerBase,
    pressed: Option<Point>,
}

impl DispatchHandler {
    pub fn new(id: impl Into<String>) -> SurfaceResult<Self> {
        Ok(Self {
            base: HandlerBase::new(id)?,
            pressed: None,
        })
    }

    fn build_event(state: &SurfaceState, event: &PointerEvent) -> Option<ChartPointerEvent> {
        let chart = state.chart().cloned()?;
        let entity = state
            .rendering_info()
            .and_then(|info| info.entity_at(event.x, event.y))
            .cloned();
        Some(ChartPointerEvent::new(chart, *event, entity))
    }
}

impl InputHandler for DispatchHandler {
    fn base(&self) -> &HandlerBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut HandlerBase {
        &mut self.base
    }

    fn on_press(&mut self, _state: &mut SurfaceState, event: &PointerEvent) {
        self.pressed = Some(event.point());
    }

    fn on_move(&mut self, state: &mut SurfaceState, event: &PointerEvent) {
        let Some(chart_event) = Self::build_event(state, event) else {
            return;
        };
        state.broadcast_pointer_moved(&chart_event);
    }

    fn on_click(&mut self, state: &mut SurfaceState, event: &PointerEvent) {
        if self.pressed.take().is_none() {
            return;
        }
        let Some(chart_event) = Self::build_event(state, event) else {
            return;
        };
        state.broadcast_pointer_clicked(&chart_event);
    }
}
