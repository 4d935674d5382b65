//! Input handling: events, the handler contract, handler registration, and
//! the live/auxiliary dispatch state machine, plus the built-in handlers.

mod anchor;
mod dispatch;
mod dispatch_events;
mod event;
mod handler;
mod pan;
mod registry;
mod scroll_zoom;
mod tooltip;
mod zoom_drag;

pub use anchor::AnchorHandler;
pub use dispatch::DispatchEngine;
pub use dispatch_events::DispatchHandler;
pub use event::{
    ChartPointerEvent, ChartPointerListener, ModifierMask, PointerEvent, ScrollEvent,
};
pub use handler::{HandlerBase, InputHandler};
pub use pan::PanHandler;
pub use registry::HandlerRegistry;
pub use scroll_zoom::ScrollZoomHandler;
pub use tooltip::TooltipHandler;
pub use zoom_drag::ZoomDragHandler;
