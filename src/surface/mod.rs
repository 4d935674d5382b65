//! The surface composition root: chart handle, dispatch, overlays, redraw.

mod state;

pub use state::{SharedChartPointerListener, SurfaceState, TooltipState};

use crate::chart::{RenderingInfo, SharedChart};
use crate::core::geometry::{Point, Rectangle};
use crate::core::signal::ChangeSignal;
use crate::error::{SurfaceError, SurfaceResult};
use crate::interaction::{
    AnchorHandler, DispatchEngine, DispatchHandler, HandlerRegistry, InputHandler, ModifierMask,
    PanHandler, PointerEvent, ScrollEvent, ScrollZoomHandler, TooltipHandler,
};
use crate::overlay::{OverlayCompositor, OverlayContext, SharedOverlay};
use crate::render::ChartRenderer;

/// An interactive chart surface.
///
/// Owns the renderer, the handler registry and dispatch engine, the overlay
/// compositor, and the surface state. Raw input enters through the
/// `pointer_*`/`scrolled` methods; any chart or overlay change notification
/// raised during dispatch is flushed into one redraw before the call
/// returns.
///
/// Construction installs the default handlers; retrieve one by id to
/// disable or remove it (the ids are `"pan"`, `"tooltip"`, `"scroll"`,
/// `"anchor"` and `"dispatch"`).
pub struct Surface<R: ChartRenderer> {
    renderer: R,
    state: SurfaceState,
    registry: HandlerRegistry,
    engine: DispatchEngine,
    compositor: OverlayCompositor,
    chart_signal: ChangeSignal,
    overlay_signal: ChangeSignal,
}

impl<R: ChartRenderer> Surface<R> {
    /// Creates a surface around a renderer, optionally with an initial
    /// chart, and installs the default handlers. The default pan handler
    /// activates with the ALT modifier held.
    pub fn new(renderer: R, chart: Option<SharedChart>) -> SurfaceResult<Self> {
        let chart_signal = ChangeSignal::new();
        let overlay_signal = ChangeSignal::new();

        let mut registry = HandlerRegistry::new();
        registry.add_available(Box::new(PanHandler::with_modifiers(
            "pan",
            ModifierMask::ALT,
        )?))?;
        registry.add_auxiliary(Box::new(TooltipHandler::new("tooltip")?))?;
        registry.add_auxiliary(Box::new(ScrollZoomHandler::new("scroll")?))?;
        registry.add_auxiliary(Box::new(AnchorHandler::new("anchor")?))?;
        registry.add_auxiliary(Box::new(DispatchHandler::new("dispatch")?))?;

        let mut surface = Self {
            renderer,
            state: SurfaceState::new(),
            registry,
            engine: DispatchEngine::new(),
            compositor: OverlayCompositor::new(overlay_signal.clone()),
            chart_signal,
            overlay_signal,
        };
        if chart.is_some() {
            surface.install_chart(chart);
        }
        Ok(surface)
    }

    #[must_use]
    pub fn state(&self) -> &SurfaceState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SurfaceState {
        &mut self.state
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    #[must_use]
    pub fn chart(&self) -> Option<&SharedChart> {
        self.state.chart()
    }

    fn install_chart(&mut self, chart: Option<SharedChart>) {
        if let Some(old) = self.state.chart() {
            old.borrow_mut().unsubscribe();
        }
        if let Some(new) = &chart {
            new.borrow_mut().subscribe(self.chart_signal.clone());
        }
        self.state.set_chart_handle(chart);
    }

    /// Replaces the displayed chart (subscribing to its change signal) and
    /// redraws.
    pub fn set_chart(&mut self, chart: Option<SharedChart>) -> SurfaceResult<()> {
        self.install_chart(chart);
        self.draw()
    }

    /// Resizes the canvas. A size change triggers a redraw.
    pub fn set_bounds(&mut self, bounds: Rectangle) -> SurfaceResult<()> {
        if !bounds.width.is_finite()
            || !bounds.height.is_finite()
            || bounds.width < 0.0
            || bounds.height < 0.0
        {
            return Err(SurfaceError::InvalidBounds {
                width: bounds.width,
                height: bounds.height,
            });
        }
        if bounds == self.state.bounds() {
            return Ok(());
        }
        self.state.set_bounds(bounds);
        self.draw()
    }

    #[must_use]
    pub fn rendering_info(&self) -> Option<&RenderingInfo> {
        self.state.rendering_info()
    }

    #[must_use]
    pub fn anchor(&self) -> Option<Point> {
        self.state.anchor()
    }

    /// Sets the anchor and flushes the redraw it forces.
    pub fn set_anchor(&mut self, anchor: Option<Point>) -> SurfaceResult<()> {
        self.state.set_anchor(anchor);
        self.redraw_if_needed().map(|_| ())
    }

    /// Adds a candidate for live status. Handler ids must be unique across
    /// the available and auxiliary lists.
    pub fn add_handler(&mut self, handler: Box<dyn InputHandler>) -> SurfaceResult<()> {
        self.registry.add_available(handler)
    }

    pub fn add_auxiliary_handler(&mut self, handler: Box<dyn InputHandler>) -> SurfaceResult<()> {
        self.registry.add_auxiliary(handler)
    }

    pub fn remove_handler(&mut self, id: &str) -> Option<Box<dyn InputHandler>> {
        self.registry.remove(id)
    }

    /// Looks up a handler by id, available list first.
    #[must_use]
    pub fn handler(&self, id: &str) -> Option<&dyn InputHandler> {
        self.registry.lookup(id)
    }

    /// Enables or disables a handler in place. Returns `false` for an
    /// unknown id.
    pub fn set_handler_enabled(&mut self, id: &str, enabled: bool) -> bool {
        match self.registry.lookup_mut(id) {
            Some(handler) => {
                handler.set_enabled(enabled);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn live_handler_id(&self) -> Option<&str> {
        self.engine.live_handler_id()
    }

    /// Drops the live handler. Intended for the handlers themselves; from
    /// inside a callback prefer [`SurfaceState::relinquish_live_handler`].
    pub fn clear_live_handler(&mut self) {
        self.engine.clear_live_handler();
    }

    pub fn add_chart_pointer_listener(&mut self, listener: SharedChartPointerListener) {
        self.state.add_listener(listener);
    }

    pub fn remove_chart_pointer_listener(
        &mut self,
        listener: &SharedChartPointerListener,
    ) -> bool {
        self.state.remove_listener(listener)
    }

    /// Adds an overlay (subscribing it to change notifications) and redraws.
    pub fn add_overlay(&mut self, overlay: SharedOverlay) -> SurfaceResult<()> {
        self.compositor.add(overlay);
        self.draw()
    }

    /// Removes an overlay by handle identity; redraws when something was
    /// removed.
    pub fn remove_overlay(&mut self, overlay: &SharedOverlay) -> SurfaceResult<()> {
        if self.compositor.remove(overlay) {
            self.draw()?;
        }
        Ok(())
    }

    pub fn pointer_pressed(&mut self, event: &PointerEvent) -> SurfaceResult<()> {
        self.engine
            .pointer_pressed(&mut self.registry, &mut self.state, event);
        self.flush_redraw()
    }

    pub fn pointer_moved(&mut self, event: &PointerEvent) -> SurfaceResult<()> {
        self.engine
            .pointer_moved(&mut self.registry, &mut self.state, event);
        self.flush_redraw()
    }

    pub fn pointer_dragged(&mut self, event: &PointerEvent) -> SurfaceResult<()> {
        self.engine
            .pointer_dragged(&mut self.registry, &mut self.state, event);
        self.flush_redraw()
    }

    pub fn pointer_released(&mut self, event: &PointerEvent) -> SurfaceResult<()> {
        self.engine
            .pointer_released(&mut self.registry, &mut self.state, event);
        self.flush_redraw()
    }

    pub fn pointer_clicked(&mut self, event: &PointerEvent) -> SurfaceResult<()> {
        self.engine
            .pointer_clicked(&mut self.registry, &mut self.state, event);
        self.flush_redraw()
    }

    pub fn scrolled(&mut self, event: &ScrollEvent) -> SurfaceResult<()> {
        self.engine
            .scrolled(&mut self.registry, &mut self.state, event);
        self.flush_redraw()
    }

    fn flush_redraw(&mut self) -> SurfaceResult<()> {
        self.redraw_if_needed().map(|_| ())
    }

    /// Redraws when a chart or overlay change notification is pending.
    ///
    /// Input entry points call this automatically; hosts mutating overlays
    /// or the chart outside the input path call it to complete the redraw
    /// protocol. Returns whether a draw happened.
    pub fn redraw_if_needed(&mut self) -> SurfaceResult<bool> {
        if self.chart_signal.is_raised() || self.overlay_signal.is_raised() {
            self.draw()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Draws the surface content and replaces the rendering-info snapshot.
    ///
    /// The target is cleared first; the base chart render runs only for a
    /// non-degenerate size, while overlays paint in insertion order
    /// regardless. The anchor is consumed by the draw: it survives exactly
    /// one render pass.
    pub fn draw(&mut self) -> SurfaceResult<()> {
        // drawing consumes any pending change notifications
        self.chart_signal.take();
        self.overlay_signal.take();

        let bounds = self.state.bounds();
        self.renderer.clear(bounds)?;
        if bounds.width > 0.0 && bounds.height > 0.0 {
            let anchor = self.state.anchor();
            let info = match self.state.chart().cloned() {
                Some(chart) => {
                    let chart = chart.borrow();
                    Some(self.renderer.render_chart(&chart, bounds, anchor)?)
                }
                None => None,
            };
            self.state.install_rendering_info(info);
        }

        let chart_handle = self.state.chart().cloned();
        let chart_ref = chart_handle.as_ref().map(|chart| chart.borrow());
        let ctx = OverlayContext {
            rendering_info: self.state.rendering_info(),
            chart: chart_ref.as_deref(),
        };
        self.compositor.paint_all(&mut self.renderer, &ctx)?;
        drop(chart_ref);

        self.state.clear_anchor();
        Ok(())
    }
}
