use std::rc::Rc;

use smallvec::SmallVec;

use crate::core::signal::ChangeSignal;
use crate::error::SurfaceResult;
use crate::overlay::{OverlayContext, SharedOverlay};
use crate::render::DrawTarget;

/// Ordered overlay list painted after the base chart render.
///
/// Paint order is insertion order. Adding subscribes the overlay to the
/// surface's overlay change signal so later overlay-internal mutations
/// request a redraw; removal (by handle identity) unsubscribes.
pub struct OverlayCompositor {
    overlays: SmallVec<[SharedOverlay; 2]>,
    signal: ChangeSignal,
}

impl OverlayCompositor {
    #[must_use]
    pub fn new(signal: ChangeSignal) -> Self {
        Self {
            overlays: SmallVec::new(),
            signal,
        }
    }

    pub fn add(&mut self, overlay: SharedOverlay) {
        overlay.borrow_mut().subscribe(self.signal.clone());
        self.overlays.push(overlay);
    }

    /// Removes an overlay by handle identity. Returns whether it was held.
    pub fn remove(&mut self, overlay: &SharedOverlay) -> bool {
        let Some(index) = self
            .overlays
            .iter()
            .position(|held| Rc::ptr_eq(held, overlay))
        else {
            return false;
        };
        let removed = self.overlays.remove(index);
        removed.borrow_mut().unsubscribe();
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }

    /// Paints every overlay in insertion order into the shared target.
    pub fn paint_all(
        &self,
        target: &mut dyn DrawTarget,
        ctx: &OverlayContext<'_>,
    ) -> SurfaceResult<()> {
        for overlay in &self.overlays {
            overlay.borrow().paint(target, ctx)?;
        }
        Ok(())
    }
}
