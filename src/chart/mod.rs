//! The chart handle and its capability boundary.
//!
//! The surface never owns the chart: hosts keep it behind a
//! [`SharedChart`] and the surface subscribes to its change signal on
//! assignment. Axis mutations go through [`Chart`] so the notify gate can
//! coalesce multi-axis updates into one redraw.

mod cartesian;
mod plot;
mod radial;
mod rendering_info;

pub use cartesian::CartesianPlot;
pub use plot::PlotBehavior;
pub use radial::RadialPlot;
pub use rendering_info::{Entity, EntityIndex, PlotRenderingInfo, RenderingInfo};

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::geometry::Point;
use crate::core::signal::ChangeSignal;
use crate::core::transform::{AxisEdge, AxisRange, Orientation};

/// Externally-owned chart handle shared between the host and the surface.
pub type SharedChart = Rc<RefCell<Chart>>;

/// A chart: a boxed plot plus the notify gate driving redraws.
///
/// Every capability operation forwards to the plot and fires the subscribed
/// change signal when notification is enabled. Gesture handlers suppress
/// notification around multi-step mutations (save the flag, mutate both
/// axes, restore) so one gesture produces one redraw.
pub struct Chart {
    plot: Box<dyn PlotBehavior>,
    notify: bool,
    signal: Option<ChangeSignal>,
}

impl Chart {
    #[must_use]
    pub fn new(plot: Box<dyn PlotBehavior>) -> Self {
        Self {
            plot,
            notify: true,
            signal: None,
        }
    }

    #[must_use]
    pub fn into_shared(self) -> SharedChart {
        Rc::new(RefCell::new(self))
    }

    #[must_use]
    pub fn plot(&self) -> &dyn PlotBehavior {
        self.plot.as_ref()
    }

    /// Direct mutable plot access for host-side configuration.
    ///
    /// Mutations made through this accessor bypass change notification; call
    /// [`Chart::set_notify`] with `true` afterwards to force a redraw.
    pub fn plot_mut(&mut self) -> &mut dyn PlotBehavior {
        self.plot.as_mut()
    }

    #[must_use]
    pub fn is_notify(&self) -> bool {
        self.notify
    }

    /// Sets the notify flag. Enabling notification fires the change signal,
    /// which also serves as an explicit "force redraw" request.
    pub fn set_notify(&mut self, notify: bool) {
        self.notify = notify;
        if notify {
            if let Some(signal) = &self.signal {
                signal.raise();
            }
        }
    }

    pub(crate) fn subscribe(&mut self, signal: ChangeSignal) {
        self.signal = Some(signal);
    }

    pub(crate) fn unsubscribe(&mut self) {
        self.signal = None;
    }

    fn fire_change(&self) {
        if self.notify {
            if let Some(signal) = &self.signal {
                signal.raise();
            }
        }
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.plot.orientation()
    }

    #[must_use]
    pub fn is_pannable(&self) -> bool {
        self.plot.is_domain_pannable() || self.plot.is_range_pannable()
    }

    #[must_use]
    pub fn supports_axis_zoom(&self) -> bool {
        self.plot.supports_axis_zoom()
    }

    #[must_use]
    pub fn domain_axis_edge(&self) -> AxisEdge {
        self.plot.domain_axis_edge()
    }

    #[must_use]
    pub fn range_axis_edge(&self) -> AxisEdge {
        self.plot.range_axis_edge()
    }

    #[must_use]
    pub fn domain_bounds(&self) -> Option<AxisRange> {
        self.plot.domain_bounds()
    }

    #[must_use]
    pub fn range_bounds(&self) -> Option<AxisRange> {
        self.plot.range_bounds()
    }

    pub fn pan_domain_axes(&mut self, percent: f64, info: &PlotRenderingInfo, source: Point) {
        self.plot.pan_domain_axes(percent, info, source);
        self.fire_change();
    }

    pub fn pan_range_axes(&mut self, percent: f64, info: &PlotRenderingInfo, source: Point) {
        self.plot.pan_range_axes(percent, info, source);
        self.fire_change();
    }

    pub fn zoom_domain_axes(
        &mut self,
        factor: f64,
        info: &PlotRenderingInfo,
        source: Point,
        anchor_on_point: bool,
    ) {
        self.plot.zoom_domain_axes(factor, info, source, anchor_on_point);
        self.fire_change();
    }

    pub fn zoom_range_axes(
        &mut self,
        factor: f64,
        info: &PlotRenderingInfo,
        source: Point,
        anchor_on_point: bool,
    ) {
        self.plot.zoom_range_axes(factor, info, source, anchor_on_point);
        self.fire_change();
    }

    pub fn set_domain_bounds(&mut self, bounds: AxisRange) {
        self.plot.set_domain_bounds(bounds);
        self.fire_change();
    }

    pub fn set_range_bounds(&mut self, bounds: AxisRange) {
        self.plot.set_range_bounds(bounds);
        self.fire_change();
    }

    /// Delegates a wheel rotation to the plot; fires the change signal when
    /// the plot consumed it.
    pub fn wheel_rotate(&mut self, ticks: i32) -> bool {
        let handled = self.plot.wheel_rotate(ticks);
        if handled {
            self.fire_change();
        }
        handled
    }
}

impl std::fmt::Debug for Chart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chart")
            .field("notify", &self.notify)
            .field("subscribed", &self.signal.is_some())
            .finish_non_exhaustive()
    }
}
