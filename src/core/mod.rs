pub mod geometry;
pub mod signal;
pub mod transform;

pub use geometry::{Point, Rectangle};
pub use signal::ChangeSignal;
pub use transform::{
    AxisEdge, AxisRange, Orientation, pan_percentages, point_to_axis_value, zoom_factor,
};
