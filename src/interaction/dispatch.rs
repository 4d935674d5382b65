use tracing::debug;

use crate::interaction::event::{PointerEvent, ScrollEvent};
use crate::interaction::registry::HandlerRegistry;
use crate::surface::SurfaceState;

/// Per-event handler selection and fan-out.
///
/// The engine is a two-state machine: idle (no live handler) or active (one
/// live handler, always drawn from the available list). A press while idle
/// resolves the live handler by modifier match; the live handler keeps
/// exclusive gesture callbacks until it relinquishes via
/// [`SurfaceState::relinquish_live_handler`] or is removed from the
/// registry. Auxiliary handlers run on every event regardless.
#[derive(Debug, Default)]
pub struct DispatchEngine {
    live: Option<String>,
}

/// The pointer event kinds the engine fans out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PointerPhase {
    Press,
    Move,
    Drag,
    Release,
    Click,
}

impl DispatchEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The id of the current live handler, if any.
    #[must_use]
    pub fn live_handler_id(&self) -> Option<&str> {
        self.live.as_deref()
    }

    /// Drops the live handler without waiting for a release event.
    pub fn clear_live_handler(&mut self) {
        self.live = None;
    }

    /// Resolves the live handler for a press while idle.
    ///
    /// The available list is scanned in registration order with no early
    /// exit, so the last enabled handler with an exact modifier match wins.
    /// Later registrations deliberately override earlier ones; tests pin
    /// this ordering.
    fn resolve_live(&mut self, registry: &HandlerRegistry, event: &PointerEvent) {
        let mut selected: Option<&str> = None;
        for handler in registry.available() {
            if handler.is_enabled() && handler.matches_modifiers(event.modifiers) {
                selected = Some(handler.id());
            }
        }
        if let Some(id) = selected {
            debug!(handler = id, "live handler selected");
            self.live = Some(id.to_owned());
        }
    }

    /// Runs the live handler callback for one event, dropping to idle when
    /// the handler relinquished or no longer exists.
    ///
    /// Press is delivered without an enabled check (selection already
    /// required it); every other phase skips a disabled live handler but
    /// keeps it live.
    fn run_live_pointer(
        &mut self,
        registry: &mut HandlerRegistry,
        state: &mut SurfaceState,
        event: &PointerEvent,
        phase: PointerPhase,
    ) {
        let Some(id) = self.live.clone() else {
            return;
        };
        let Some(handler) = registry.available_mut_by_id(&id) else {
            debug!(handler = %id, "live handler no longer registered, returning to idle");
            self.live = None;
            return;
        };
        if phase != PointerPhase::Press && !handler.is_enabled() {
            return;
        }
        match phase {
            PointerPhase::Press => handler.on_press(state, event),
            PointerPhase::Move => handler.on_move(state, event),
            PointerPhase::Drag => handler.on_drag(state, event),
            PointerPhase::Release => handler.on_release(state, event),
            PointerPhase::Click => handler.on_click(state, event),
        }
        if state.take_live_release() {
            debug!(handler = %id, "live handler relinquished");
            self.live = None;
        }
    }

    /// Broadcasts one event to every enabled auxiliary handler in
    /// registration order. Auxiliary handlers never affect the live slot, so
    /// a stray relinquish request from this pass is drained and ignored.
    fn run_auxiliary_pointer(
        &mut self,
        registry: &mut HandlerRegistry,
        state: &mut SurfaceState,
        event: &PointerEvent,
        phase: PointerPhase,
    ) {
        for index in 0..registry.auxiliary_len() {
            let Some(handler) = registry.auxiliary_mut_by_index(index) else {
                break;
            };
            if !handler.is_enabled() {
                continue;
            }
            match phase {
                PointerPhase::Press => handler.on_press(state, event),
                PointerPhase::Move => handler.on_move(state, event),
                PointerPhase::Drag => handler.on_drag(state, event),
                PointerPhase::Release => handler.on_release(state, event),
                PointerPhase::Click => handler.on_click(state, event),
            }
        }
        state.take_live_release();
    }

    fn dispatch_pointer(
        &mut self,
        registry: &mut HandlerRegistry,
        state: &mut SurfaceState,
        event: &PointerEvent,
        phase: PointerPhase,
    ) {
        if phase == PointerPhase::Press && self.live.is_none() {
            self.resolve_live(registry, event);
        }
        self.run_live_pointer(registry, state, event, phase);
        self.run_auxiliary_pointer(registry, state, event, phase);
    }

    pub fn pointer_pressed(
        &mut self,
        registry: &mut HandlerRegistry,
        state: &mut SurfaceState,
        event: &PointerEvent,
    ) {
        self.dispatch_pointer(registry, state, event, PointerPhase::Press);
    }

    pub fn pointer_moved(
        &mut self,
        registry: &mut HandlerRegistry,
        state: &mut SurfaceState,
        event: &PointerEvent,
    ) {
        self.dispatch_pointer(registry, state, event, PointerPhase::Move);
    }

    pub fn pointer_dragged(
        &mut self,
        registry: &mut HandlerRegistry,
        state: &mut SurfaceState,
        event: &PointerEvent,
    ) {
        self.dispatch_pointer(registry, state, event, PointerPhase::Drag);
    }

    pub fn pointer_released(
        &mut self,
        registry: &mut HandlerRegistry,
        state: &mut SurfaceState,
        event: &PointerEvent,
    ) {
        self.dispatch_pointer(registry, state, event, PointerPhase::Release);
    }

    pub fn pointer_clicked(
        &mut self,
        registry: &mut HandlerRegistry,
        state: &mut SurfaceState,
        event: &PointerEvent,
    ) {
        self.dispatch_pointer(registry, state, event, PointerPhase::Click);
    }

    /// Scroll is not part of the press/release state machine: it goes to the
    /// live handler (when enabled) and then to every enabled auxiliary
    /// handler, with no modifier matching involved.
    pub fn scrolled(
        &mut self,
        registry: &mut HandlerRegistry,
        state: &mut SurfaceState,
        event: &ScrollEvent,
    ) {
        if let Some(id) = self.live.clone() {
            match registry.available_mut_by_id(&id) {
                Some(handler) => {
                    if handler.is_enabled() {
                        handler.on_scroll(state, event);
                    }
                    if state.take_live_release() {
                        self.live = None;
                    }
                }
                None => self.live = None,
            }
        }
        for index in 0..registry.auxiliary_len() {
            let Some(handler) = registry.auxiliary_mut_by_index(index) else {
                break;
            };
            if handler.is_enabled() {
                handler.on_scroll(state, event);
            }
        }
        state.take_live_release();
    }
}
