use crate::chart::plot::PlotBehavior;
use crate::core::transform::Orientation;

/// A circular plot without value axes.
///
/// It cannot pan or zoom; wheel input rotates the plot instead, one degree
/// step per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialPlot {
    rotation_degrees: f64,
    degrees_per_tick: f64,
}

impl Default for RadialPlot {
    fn default() -> Self {
        Self {
            rotation_degrees: 0.0,
            degrees_per_tick: 1.0,
        }
    }
}

impl RadialPlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_degrees_per_tick(mut self, degrees: f64) -> Self {
        self.degrees_per_tick = degrees;
        self
    }

    #[must_use]
    pub fn rotation_degrees(&self) -> f64 {
        self.rotation_degrees
    }
}

impl PlotBehavior for RadialPlot {
    fn orientation(&self) -> Orientation {
        Orientation::Vertical
    }

    fn wheel_rotate(&mut self, ticks: i32) -> bool {
        if ticks == 0 {
            return false;
        }
        self.rotation_degrees =
            (self.rotation_degrees + f64::from(ticks) * self.degrees_per_tick).rem_euclid(360.0);
        true
    }
}
