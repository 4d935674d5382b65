use serde::{Deserialize, Serialize};

use crate::core::geometry::{Point, Rectangle};
use crate::error::{SurfaceError, SurfaceResult};

/// The side of the data area an axis is attached to.
///
/// Top/bottom axes map values along the x direction, left/right axes along
/// the y direction (inverted, since pixel y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisEdge {
    Top,
    Bottom,
    Left,
    Right,
}

impl AxisEdge {
    #[must_use]
    pub fn maps_along_x(self) -> bool {
        matches!(self, AxisEdge::Top | AxisEdge::Bottom)
    }
}

/// Plot orientation: which screen direction the domain axis runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    #[must_use]
    pub fn is_vertical(self) -> bool {
        self == Orientation::Vertical
    }
}

/// A closed value interval backing one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    lower: f64,
    upper: f64,
}

impl AxisRange {
    pub fn new(lower: f64, upper: f64) -> SurfaceResult<Self> {
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(SurfaceError::InvalidData(
                "axis range bounds must be finite with lower < upper".to_owned(),
            ));
        }
        Ok(Self { lower, upper })
    }

    #[must_use]
    pub fn lower(self) -> f64 {
        self.lower
    }

    #[must_use]
    pub fn upper(self) -> f64 {
        self.upper
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.upper - self.lower
    }

    /// Maps a data value to a pixel coordinate along the given axis edge.
    pub fn value_to_pixel(
        self,
        value: f64,
        data_area: Rectangle,
        edge: AxisEdge,
    ) -> SurfaceResult<f64> {
        if !data_area.is_valid() {
            return Err(SurfaceError::InvalidBounds {
                width: data_area.width,
                height: data_area.height,
            });
        }
        if !value.is_finite() {
            return Err(SurfaceError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value - self.lower) / self.span();
        if edge.maps_along_x() {
            Ok(data_area.min_x() + normalized * data_area.width)
        } else {
            Ok(data_area.max_y() - normalized * data_area.height)
        }
    }

    /// Inverse of [`AxisRange::value_to_pixel`] for identical inputs.
    pub fn pixel_to_value(
        self,
        pixel: f64,
        data_area: Rectangle,
        edge: AxisEdge,
    ) -> SurfaceResult<f64> {
        if !data_area.is_valid() {
            return Err(SurfaceError::InvalidBounds {
                width: data_area.width,
                height: data_area.height,
            });
        }
        if !pixel.is_finite() {
            return Err(SurfaceError::InvalidData("pixel must be finite".to_owned()));
        }

        let normalized = if edge.maps_along_x() {
            (pixel - data_area.min_x()) / data_area.width
        } else {
            (data_area.max_y() - pixel) / data_area.height
        };
        Ok(self.lower + normalized * self.span())
    }

    /// Returns the range shifted by a fraction of its own span.
    #[must_use]
    pub fn panned(self, percent: f64) -> Self {
        let shift = percent * self.span();
        Self {
            lower: self.lower + shift,
            upper: self.upper + shift,
        }
    }

    /// Returns the range resized by `factor`, keeping `anchor_value` at the
    /// same relative position.
    #[must_use]
    pub fn zoomed_about(self, factor: f64, anchor_value: f64) -> Self {
        Self {
            lower: anchor_value - (anchor_value - self.lower) * factor,
            upper: anchor_value + (self.upper - anchor_value) * factor,
        }
    }
}

/// Computes the multiplicative zoom factor for a wheel movement.
///
/// Returns `None` for zero ticks: some input backends emit spurious
/// zero-delta wheel events and the caller must skip the zoom entirely
/// rather than apply an identity factor.
#[must_use]
pub fn zoom_factor(ticks: i32, step_percent: f64) -> Option<f64> {
    if ticks == 0 {
        return None;
    }
    let factor = 1.0 + step_percent;
    if ticks < 0 {
        Some(1.0 / factor)
    } else {
        Some(factor)
    }
}

/// Converts a drag delta into `(domain_percent, range_percent)` pan fractions.
///
/// Under vertical orientation the domain axis runs along x, so the domain pan
/// is `-dx / width` and the range pan `dy / height`. Horizontal orientation
/// swaps the axis assignment; the swap is part of the contract, not an
/// implementation detail.
#[must_use]
pub fn pan_percentages(
    dx: f64,
    dy: f64,
    data_area: Rectangle,
    orientation: Orientation,
) -> (f64, f64) {
    let w_percent = -dx / data_area.width;
    let h_percent = dy / data_area.height;
    if orientation.is_vertical() {
        (w_percent, h_percent)
    } else {
        (h_percent, w_percent)
    }
}

/// Maps a screen point to the value-axis coordinate for the given edge.
pub fn point_to_axis_value(
    range: AxisRange,
    point: Point,
    data_area: Rectangle,
    edge: AxisEdge,
) -> SurfaceResult<f64> {
    let pixel = if edge.maps_along_x() { point.x } else { point.y };
    range.pixel_to_value(pixel, data_area, edge)
}
