use serde::{Deserialize, Serialize};

use crate::core::geometry::{Point, Rectangle};

/// A semantic region of the rendered chart (a bar, a data point marker, a
/// legend item) used for tooltip and pointer-event lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub region: Rectangle,
    pub tooltip: Option<String>,
    pub tag: String,
}

impl Entity {
    #[must_use]
    pub fn new(region: Rectangle) -> Self {
        Self {
            region,
            tooltip: None,
            tag: String::new(),
        }
    }

    #[must_use]
    pub fn with_tooltip(mut self, text: impl Into<String>) -> Self {
        self.tooltip = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }
}

/// Spatial index over the entities produced by one render pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityIndex {
    entities: Vec<Entity>,
}

impl EntityIndex {
    #[must_use]
    pub fn new(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    pub fn push(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Returns the entity under the given canvas position, if any.
    ///
    /// Entities are scanned newest-first so the topmost drawn element wins.
    #[must_use]
    pub fn entity_at(&self, x: f64, y: f64) -> Option<&Entity> {
        let point = Point::new(x, y);
        self.entities.iter().rev().find(|e| e.region.contains(point))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Layout information for the plot: the data area, plus one nested entry per
/// sub-plot when the chart is a combined plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotRenderingInfo {
    data_area: Rectangle,
    subplots: Vec<PlotRenderingInfo>,
}

impl PlotRenderingInfo {
    #[must_use]
    pub fn new(data_area: Rectangle) -> Self {
        Self {
            data_area,
            subplots: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_subplots(mut self, subplots: Vec<PlotRenderingInfo>) -> Self {
        self.subplots = subplots;
        self
    }

    #[must_use]
    pub fn data_area(&self) -> Rectangle {
        self.data_area
    }

    #[must_use]
    pub fn subplot_count(&self) -> usize {
        self.subplots.len()
    }

    /// Resolves the data area for a selection point.
    ///
    /// Without sub-plots this is the plot's own data area (the caller decides
    /// whether a containment check is required). With sub-plots, the data
    /// area of the sub-plot containing the point, or `None` when the point
    /// misses all of them.
    #[must_use]
    pub fn find_data_area(&self, point: Point) -> Option<Rectangle> {
        if self.subplots.is_empty() {
            return Some(self.data_area);
        }
        self.subplots
            .iter()
            .find(|sub| sub.data_area.contains(point))
            .map(|sub| sub.data_area)
    }
}

/// Snapshot produced by one render pass.
///
/// A fresh snapshot supersedes the previous one on every draw; coordinates
/// cached from an older snapshot must be revalidated, never assumed valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderingInfo {
    plot: PlotRenderingInfo,
    entities: EntityIndex,
}

impl RenderingInfo {
    #[must_use]
    pub fn new(plot: PlotRenderingInfo) -> Self {
        Self {
            plot,
            entities: EntityIndex::default(),
        }
    }

    #[must_use]
    pub fn with_entities(mut self, entities: EntityIndex) -> Self {
        self.entities = entities;
        self
    }

    #[must_use]
    pub fn plot_info(&self) -> &PlotRenderingInfo {
        &self.plot
    }

    #[must_use]
    pub fn entities(&self) -> &EntityIndex {
        &self.entities
    }

    #[must_use]
    pub fn entity_at(&self, x: f64, y: f64) -> Option<&Entity> {
        self.entities.entity_at(x, y)
    }
}
