use serde::{Deserialize, Serialize};

use crate::chart::{RenderingInfo, SharedChart};
use crate::core::geometry::{Point, Rectangle};
use crate::interaction::{ChartPointerEvent, ChartPointerListener};

use std::cell::RefCell;
use std::rc::Rc;

/// Listener handle shared between the host and the surface.
pub type SharedChartPointerListener = Rc<RefCell<dyn ChartPointerListener>>;

/// Tooltip text plus its screen-space anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipState {
    pub text: String,
    pub screen_x: f64,
    pub screen_y: f64,
}

/// The mutable surface state input handlers read and write.
///
/// Kept separate from the renderer, registry, and dispatch engine so a
/// handler callback can borrow it mutably while the engine still holds the
/// handler itself.
pub struct SurfaceState {
    chart: Option<SharedChart>,
    rendering_info: Option<RenderingInfo>,
    anchor: Option<Point>,
    tooltip: Option<TooltipState>,
    tooltip_enabled: bool,
    domain_zoomable: bool,
    range_zoomable: bool,
    zoom_rectangle: Option<Rectangle>,
    listeners: Vec<SharedChartPointerListener>,
    bounds: Rectangle,
    live_release: bool,
}

impl SurfaceState {
    pub(crate) fn new() -> Self {
        Self {
            chart: None,
            rendering_info: None,
            anchor: None,
            tooltip: None,
            tooltip_enabled: true,
            domain_zoomable: true,
            range_zoomable: true,
            zoom_rectangle: None,
            listeners: Vec::new(),
            bounds: Rectangle::new(0.0, 0.0, 0.0, 0.0),
            live_release: false,
        }
    }

    #[must_use]
    pub fn chart(&self) -> Option<&SharedChart> {
        self.chart.as_ref()
    }

    pub(crate) fn set_chart_handle(&mut self, chart: Option<SharedChart>) {
        self.chart = chart;
    }

    /// The snapshot from the most recent draw. `None` before the first draw
    /// or while no chart is installed.
    #[must_use]
    pub fn rendering_info(&self) -> Option<&RenderingInfo> {
        self.rendering_info.as_ref()
    }

    pub(crate) fn install_rendering_info(&mut self, info: Option<RenderingInfo>) {
        self.rendering_info = info;
    }

    /// Resolves the data area (plot or sub-plot) for a selection point.
    #[must_use]
    pub fn find_data_area(&self, point: Point) -> Option<Rectangle> {
        self.rendering_info
            .as_ref()?
            .plot_info()
            .find_data_area(point)
    }

    #[must_use]
    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    /// Sets the anchor point and forces a redraw through the chart's notify
    /// gate. The anchor survives exactly one draw.
    pub fn set_anchor(&mut self, anchor: Option<Point>) {
        self.anchor = anchor;
        if let Some(chart) = &self.chart {
            chart.borrow_mut().set_notify(true);
        }
    }

    pub(crate) fn clear_anchor(&mut self) {
        self.anchor = None;
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<&TooltipState> {
        self.tooltip.as_ref()
    }

    /// Updates or clears the tooltip. Intended for the tooltip handler; the
    /// screen coordinates anchor the tooltip popup.
    pub fn set_tooltip(&mut self, text: Option<&str>, screen_x: f64, screen_y: f64) {
        self.tooltip = text.map(|text| TooltipState {
            text: text.to_owned(),
            screen_x,
            screen_y,
        });
    }

    #[must_use]
    pub fn is_tooltip_enabled(&self) -> bool {
        self.tooltip_enabled
    }

    pub fn set_tooltip_enabled(&mut self, enabled: bool) {
        self.tooltip_enabled = enabled;
    }

    #[must_use]
    pub fn is_domain_zoomable(&self) -> bool {
        self.domain_zoomable
    }

    pub fn set_domain_zoomable(&mut self, zoomable: bool) {
        self.domain_zoomable = zoomable;
    }

    #[must_use]
    pub fn is_range_zoomable(&self) -> bool {
        self.range_zoomable
    }

    pub fn set_range_zoomable(&mut self, zoomable: bool) {
        self.range_zoomable = zoomable;
    }

    /// The rubber-band selection rectangle the host should display, if any.
    #[must_use]
    pub fn zoom_rectangle(&self) -> Option<Rectangle> {
        self.zoom_rectangle
    }

    pub fn set_zoom_rectangle(&mut self, rectangle: Option<Rectangle>) {
        self.zoom_rectangle = rectangle;
    }

    #[must_use]
    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    pub(crate) fn set_bounds(&mut self, bounds: Rectangle) {
        self.bounds = bounds;
    }

    /// Asks the dispatch engine to drop the current live handler.
    ///
    /// Called by a live handler that discovers mid-gesture it cannot
    /// proceed; the engine consumes the request right after the callback
    /// returns. Requests from auxiliary handlers are ignored.
    pub fn relinquish_live_handler(&mut self) {
        self.live_release = true;
    }

    pub(crate) fn take_live_release(&mut self) -> bool {
        let released = self.live_release;
        self.live_release = false;
        released
    }

    pub(crate) fn add_listener(&mut self, listener: SharedChartPointerListener) {
        self.listeners.push(listener);
    }

    pub(crate) fn remove_listener(&mut self, listener: &SharedChartPointerListener) -> bool {
        let Some(index) = self
            .listeners
            .iter()
            .position(|held| Rc::ptr_eq(held, listener))
        else {
            return false;
        };
        self.listeners.remove(index);
        true
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Fans a semantic move event out to every listener in registration
    /// order.
    pub fn broadcast_pointer_moved(&self, event: &ChartPointerEvent) {
        for listener in &self.listeners {
            listener.borrow_mut().chart_pointer_moved(event);
        }
    }

    pub fn broadcast_pointer_clicked(&self, event: &ChartPointerEvent) {
        for listener in &self.listeners {
            listener.borrow_mut().chart_pointer_clicked(event);
        }
    }
}
