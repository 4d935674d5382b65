use crate::core::geometry::Point;
use crate::error::SurfaceResult;
use crate::interaction::event::PointerEvent;
use crate::interaction::handler::{HandlerBase, InputHandler};
use crate::surface::SurfaceState;

/// A click further than this from its press is the tail of a drag, not a
/// click.
const CLICK_DISTANCE_THRESHOLD: f64 = 2.0;

/// Auxiliary handler that sets the surface anchor on a genuine click.
///
/// The press location is recorded and compared against the click location;
/// only near-stationary press/click pairs update the anchor (and force a
/// redraw through it). The recorded point is always cleared after a click.
pub struct AnchorHandler {
    base: HandlerBase,
    pressed: Option<Point>,
}

impl AnchorHandler {
    pub fn new(id: impl Into<String>) -> SurfaceResult<Self> {
        Ok(Self {
            base: HandlerBase::new(id)?,
            pressed: None,
        })
    }
}

impl InputHandler for AnchorHandler {
    fn base(&self) -> &HandlerBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut HandlerBase {
        &mut self.base
    }

    fn on_press(&mut self, _state: &mut SurfaceState, event: &PointerEvent) {
        self.pressed = Some(event.point());
    }

    fn on_click(&mut self, state: &mut SurfaceState, event: &PointerEvent) {
        let Some(pressed) = self.pressed.take() else {
            return;
        };
        let current = event.point();
        if pressed.distance(current) < CLICK_DISTANCE_THRESHOLD {
            state.set_anchor(Some(current));
        }
    }
}
