use serde::{Deserialize, Serialize};

use crate::core::geometry::Rectangle;
use crate::core::signal::ChangeSignal;
use crate::core::transform::{AxisEdge, AxisRange};
use crate::error::SurfaceResult;
use crate::overlay::{Overlay, OverlayContext};
use crate::render::{Color, DrawTarget, LinePrimitive};

/// One crosshair line pinned to a value on the domain or range axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Crosshair {
    pub value: f64,
    pub visible: bool,
    pub color: Color,
    pub stroke_width: f64,
}

impl Crosshair {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            visible: true,
            color: Color::rgba(0.8, 0.1, 0.1, 1.0),
            stroke_width: 1.0,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }
}

/// Built-in overlay drawing crosshair lines through the data area.
///
/// Domain crosshairs run perpendicular to the domain axis (vertical lines
/// under vertical plot orientation), range crosshairs the other way around.
/// Every mutating setter raises the subscribed change signal so the surface
/// redraws.
#[derive(Default)]
pub struct CrosshairOverlay {
    domain: Vec<Crosshair>,
    range: Vec<Crosshair>,
    signal: Option<ChangeSignal>,
}

impl CrosshairOverlay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn notify(&self) {
        if let Some(signal) = &self.signal {
            signal.raise();
        }
    }

    /// Adds a domain crosshair, returning its index.
    pub fn add_domain_crosshair(&mut self, crosshair: Crosshair) -> usize {
        self.domain.push(crosshair);
        self.notify();
        self.domain.len() - 1
    }

    pub fn add_range_crosshair(&mut self, crosshair: Crosshair) -> usize {
        self.range.push(crosshair);
        self.notify();
        self.range.len() - 1
    }

    #[must_use]
    pub fn domain_crosshairs(&self) -> &[Crosshair] {
        &self.domain
    }

    #[must_use]
    pub fn range_crosshairs(&self) -> &[Crosshair] {
        &self.range
    }

    /// Moves a domain crosshair. Returns `false` for an unknown index.
    pub fn set_domain_value(&mut self, index: usize, value: f64) -> bool {
        let Some(crosshair) = self.domain.get_mut(index) else {
            return false;
        };
        crosshair.value = value;
        self.notify();
        true
    }

    pub fn set_range_value(&mut self, index: usize, value: f64) -> bool {
        let Some(crosshair) = self.range.get_mut(index) else {
            return false;
        };
        crosshair.value = value;
        self.notify();
        true
    }

    pub fn set_domain_visible(&mut self, index: usize, visible: bool) -> bool {
        let Some(crosshair) = self.domain.get_mut(index) else {
            return false;
        };
        crosshair.visible = visible;
        self.notify();
        true
    }

    pub fn set_range_visible(&mut self, index: usize, visible: bool) -> bool {
        let Some(crosshair) = self.range.get_mut(index) else {
            return false;
        };
        crosshair.visible = visible;
        self.notify();
        true
    }

    fn crosshair_line(
        crosshair: Crosshair,
        bounds: AxisRange,
        data_area: Rectangle,
        edge: AxisEdge,
    ) -> SurfaceResult<LinePrimitive> {
        let pixel = bounds.value_to_pixel(crosshair.value, data_area, edge)?;
        let line = if edge.maps_along_x() {
            LinePrimitive::new(
                pixel,
                data_area.min_y(),
                pixel,
                data_area.max_y(),
                crosshair.stroke_width,
                crosshair.color,
            )
        } else {
            LinePrimitive::new(
                data_area.min_x(),
                pixel,
                data_area.max_x(),
                pixel,
                crosshair.stroke_width,
                crosshair.color,
            )
        };
        Ok(line)
    }
}

impl Overlay for CrosshairOverlay {
    fn subscribe(&mut self, signal: ChangeSignal) {
        self.signal = Some(signal);
    }

    fn unsubscribe(&mut self) {
        self.signal = None;
    }

    fn paint(&self, target: &mut dyn DrawTarget, ctx: &OverlayContext<'_>) -> SurfaceResult<()> {
        let Some(info) = ctx.rendering_info else {
            return Ok(());
        };
        let Some(chart) = ctx.chart else {
            return Ok(());
        };
        let data_area = info.plot_info().data_area();
        if !data_area.is_valid() {
            return Ok(());
        }

        target.push_clip(data_area)?;
        if let Some(bounds) = chart.domain_bounds() {
            let edge = chart.domain_axis_edge();
            for crosshair in self.domain.iter().filter(|c| c.visible) {
                let line = Self::crosshair_line(*crosshair, bounds, data_area, edge)?;
                target.draw_line(line)?;
            }
        }
        if let Some(bounds) = chart.range_bounds() {
            let edge = chart.range_axis_edge();
            for crosshair in self.range.iter().filter(|c| c.visible) {
                let line = Self::crosshair_line(*crosshair, bounds, data_area, edge)?;
                target.draw_line(line)?;
            }
        }
        target.pop_clip()
    }
}
