use serde::{Deserialize, Serialize};

use crate::chart::{Entity, SharedChart};
use crate::core::geometry::Point;

/// The modifier keys held while an input event fired.
///
/// Live-handler selection compares this mask for exact equality against a
/// handler's required mask; auxiliary handlers ignore it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierMask {
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl ModifierMask {
    pub const NONE: Self = Self {
        alt: false,
        ctrl: false,
        meta: false,
        shift: false,
    };

    pub const ALT: Self = Self {
        alt: true,
        ctrl: false,
        meta: false,
        shift: false,
    };

    pub const CTRL: Self = Self {
        alt: false,
        ctrl: true,
        meta: false,
        shift: false,
    };

    pub const SHIFT: Self = Self {
        alt: false,
        ctrl: false,
        meta: false,
        shift: true,
    };
}

/// A pointer event in canvas coordinates, with the screen position kept for
/// tooltip anchoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    pub screen_x: f64,
    pub screen_y: f64,
    pub modifiers: ModifierMask,
}

impl PointerEvent {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            screen_x: x,
            screen_y: y,
            modifiers: ModifierMask::NONE,
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: ModifierMask) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn with_screen_position(mut self, screen_x: f64, screen_y: f64) -> Self {
        self.screen_x = screen_x;
        self.screen_y = screen_y;
        self
    }

    #[must_use]
    pub fn point(self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A scroll-wheel event. `delta` is the raw wheel movement; handlers truncate
/// it to integer ticks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollEvent {
    pub x: f64,
    pub y: f64,
    pub delta: f64,
    pub modifiers: ModifierMask,
}

impl ScrollEvent {
    #[must_use]
    pub fn new(x: f64, y: f64, delta: f64) -> Self {
        Self {
            x,
            y,
            delta,
            modifiers: ModifierMask::NONE,
        }
    }

    #[must_use]
    pub fn point(self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Semantic chart event delivered to application listeners by the dispatch
/// handler: the chart the event relates to, the triggering pointer event, and
/// the entity under the pointer (if any).
#[derive(Debug, Clone)]
pub struct ChartPointerEvent {
    chart: SharedChart,
    trigger: PointerEvent,
    entity: Option<Entity>,
}

impl ChartPointerEvent {
    #[must_use]
    pub fn new(chart: SharedChart, trigger: PointerEvent, entity: Option<Entity>) -> Self {
        Self {
            chart,
            trigger,
            entity,
        }
    }

    #[must_use]
    pub fn chart(&self) -> &SharedChart {
        &self.chart
    }

    #[must_use]
    pub fn trigger(&self) -> PointerEvent {
        self.trigger
    }

    #[must_use]
    pub fn entity(&self) -> Option<&Entity> {
        self.entity.as_ref()
    }
}

/// Application-side consumer of semantic chart pointer events.
pub trait ChartPointerListener {
    fn chart_pointer_moved(&mut self, event: &ChartPointerEvent);
    fn chart_pointer_clicked(&mut self, event: &ChartPointerEvent);
}
