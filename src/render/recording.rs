use crate::chart::{Chart, PlotRenderingInfo, RenderingInfo};
use crate::core::geometry::{Point, Rectangle};
use crate::error::{SurfaceError, SurfaceResult};
use crate::render::{ChartRenderer, DrawTarget, LinePrimitive};

/// One base-chart render pass as seen by the [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedChartRender {
    pub bounds: Rectangle,
    pub anchor: Option<Point>,
}

/// Headless renderer used by tests and off-screen surface usage.
///
/// It validates every primitive, records all calls in order, and answers
/// `render_chart` with a configurable rendering-info template so interaction
/// tests can control the data area and entity index without a real backend.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    info_template: Option<RenderingInfo>,
    pub chart_renders: Vec<RecordedChartRender>,
    pub lines: Vec<LinePrimitive>,
    pub clears: usize,
    pub clip_stack: Vec<Rectangle>,
}

impl RecordingRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the snapshot returned by every subsequent `render_chart` call.
    #[must_use]
    pub fn with_info(mut self, info: RenderingInfo) -> Self {
        self.info_template = Some(info);
        self
    }

    /// Convenience for the common single-data-area case.
    #[must_use]
    pub fn with_data_area(self, data_area: Rectangle) -> Self {
        self.with_info(RenderingInfo::new(PlotRenderingInfo::new(data_area)))
    }

    pub fn set_info(&mut self, info: RenderingInfo) {
        self.info_template = Some(info);
    }
}

impl DrawTarget for RecordingRenderer {
    fn clear(&mut self, _bounds: Rectangle) -> SurfaceResult<()> {
        self.clears += 1;
        Ok(())
    }

    fn draw_line(&mut self, line: LinePrimitive) -> SurfaceResult<()> {
        line.validate()?;
        self.lines.push(line);
        Ok(())
    }

    fn push_clip(&mut self, area: Rectangle) -> SurfaceResult<()> {
        self.clip_stack.push(area);
        Ok(())
    }

    fn pop_clip(&mut self) -> SurfaceResult<()> {
        if self.clip_stack.pop().is_none() {
            return Err(SurfaceError::InvalidData(
                "pop_clip without matching push_clip".to_owned(),
            ));
        }
        Ok(())
    }
}

impl ChartRenderer for RecordingRenderer {
    fn render_chart(
        &mut self,
        _chart: &Chart,
        bounds: Rectangle,
        anchor: Option<Point>,
    ) -> SurfaceResult<RenderingInfo> {
        self.chart_renders.push(RecordedChartRender { bounds, anchor });
        match &self.info_template {
            Some(info) => Ok(info.clone()),
            None => Ok(RenderingInfo::new(PlotRenderingInfo::new(bounds))),
        }
    }
}
