use crate::error::{SurfaceError, SurfaceResult};
use crate::interaction::event::{ModifierMask, PointerEvent, ScrollEvent};
use crate::surface::SurfaceState;

/// Identity and activation state shared by every handler.
///
/// The id and required-modifier mask are immutable; only the enabled flag
/// may change after construction. Behavior lives in the composing handler
/// type, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerBase {
    id: String,
    enabled: bool,
    modifiers: ModifierMask,
}

impl HandlerBase {
    pub fn new(id: impl Into<String>) -> SurfaceResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(SurfaceError::InvalidData(
                "handler id must not be empty".to_owned(),
            ));
        }
        Ok(Self {
            id,
            enabled: true,
            modifiers: ModifierMask::NONE,
        })
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: ModifierMask) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[must_use]
    pub fn modifiers(&self) -> ModifierMask {
        self.modifiers
    }
}

/// The polymorphic contract all input handlers implement.
///
/// Every callback has a default no-op body, so a handler only overrides the
/// events it cares about. Callbacks receive the mutable surface state; a
/// live handler that cannot proceed mid-gesture calls
/// [`SurfaceState::relinquish_live_handler`] to return the dispatch engine
/// to its idle state.
pub trait InputHandler {
    fn base(&self) -> &HandlerBase;

    fn base_mut(&mut self) -> &mut HandlerBase;

    fn id(&self) -> &str {
        self.base().id()
    }

    fn is_enabled(&self) -> bool {
        self.base().is_enabled()
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.base_mut().set_enabled(enabled);
    }

    /// Whether this handler's required modifiers exactly equal the event's
    /// active modifiers.
    fn matches_modifiers(&self, modifiers: ModifierMask) -> bool {
        self.base().modifiers() == modifiers
    }

    fn on_press(&mut self, state: &mut SurfaceState, event: &PointerEvent) {
        let _ = (state, event);
    }

    fn on_move(&mut self, state: &mut SurfaceState, event: &PointerEvent) {
        let _ = (state, event);
    }

    fn on_drag(&mut self, state: &mut SurfaceState, event: &PointerEvent) {
        let _ = (state, event);
    }

    fn on_release(&mut self, state: &mut SurfaceState, event: &PointerEvent) {
        let _ = (state, event);
    }

    fn on_click(&mut self, state: &mut SurfaceState, event: &PointerEvent) {
        let _ = (state, event);
    }

    fn on_scroll(&mut self, state: &mut SurfaceState, event: &ScrollEvent) {
        let _ = (state, event);
    }
}
