use crate::error::SurfaceResult;
use crate::interaction::event::PointerEvent;
use crate::interaction::handler::{HandlerBase, InputHandler};
use crate::surface::SurfaceState;

/// Auxiliary handler that keeps the surface tooltip in sync with the entity
/// under the pointer. Absence of an entity (or of tooltip text) clears the
/// tooltip.
pub struct TooltipHandler {
    base: HandlerBase,
}

impl TooltipHandler {
    pub fn new(id: impl Into<String>) -> SurfaceResult<Self> {
        Ok(Self {
            base: HandlerBase::new(id)?,
        })
    }

    fn tooltip_text(state: &SurfaceState, x: f64, y: f64) -> Option<String> {
        state
            .rendering_info()?
            .entity_at(x, y)?
            .tooltip
            .clone()
    }
}

impl InputHandler for TooltipHandler {
    fn base(&self) -> &HandlerBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut HandlerBase {
        &mut self.base
    }

    fn on_move(&mut self, state: &mut SurfaceState, event: &PointerEvent) {
        if state.chart().is_none() || !state.is_tooltip_enabled() {
            return;
        }
        let text = Self::tooltip_text(state, event.x, event.y);
        state.set_tooltip(text.as_deref(), event.screen_x, event.screen_y);
    }
}
