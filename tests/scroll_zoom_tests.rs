use chart_surface::Surface;
use chart_surface::chart::{CartesianPlot, Chart, RadialPlot, SharedChart};
use chart_surface::core::{AxisRange, Rectangle};
use chart_surface::interaction::ScrollEvent;
use chart_surface::render::RecordingRenderer;

const DATA_AREA: Rectangle = Rectangle::new(0.0, 0.0, 100.0, 100.0);

fn build_surface(chart: SharedChart) -> Surface<RecordingRenderer> {
    let renderer = RecordingRenderer::new().with_data_area(DATA_AREA);
    let mut surface = Surface::new(renderer, Some(chart)).expect("surface init");
    surface
        .set_bounds(Rectangle::new(0.0, 0.0, 200.0, 200.0))
        .expect("initial bounds");
    surface
}

fn cartesian_chart() -> SharedChart {
    Chart::new(Box::new(CartesianPlot::new(
        AxisRange::new(0.0, 10.0).expect("valid domain"),
        AxisRange::new(0.0, 10.0).expect("valid range"),
    )))
    .into_shared()
}

fn domain_bounds(chart: &SharedChart) -> (f64, f64) {
    let bounds = chart.borrow().domain_bounds().expect("domain bounds");
    (bounds.lower(), bounds.upper())
}

fn range_bounds(chart: &SharedChart) -> (f64, f64) {
    let bounds = chart.borrow().range_bounds().expect("range bounds");
    (bounds.lower(), bounds.upper())
}

#[test]
fn scroll_up_zooms_out_around_the_pointer() {
    let chart = cartesian_chart();
    let mut surface = build_surface(chart.clone());

    surface.scrolled(&ScrollEvent::new(50.0, 50.0, 1.0)).expect("scroll");

    // one tick at the default 10% step grows both spans by 1.1, anchored at
    // the pointer's data coordinates (5, 5)
    let (lower, upper) = domain_bounds(&chart);
    assert!((lower - (-0.5)).abs() <= 1e-9);
    assert!((upper - 10.5).abs() <= 1e-9);
    let (lower, upper) = range_bounds(&chart);
    assert!((lower - (-0.5)).abs() <= 1e-9);
    assert!((upper - 10.5).abs() <= 1e-9);
}

#[test]
fn scroll_down_zooms_in() {
    let chart = cartesian_chart();
    let mut surface = build_surface(chart.clone());

    surface.scrolled(&ScrollEvent::new(50.0, 50.0, -1.0)).expect("scroll");

    let (lower, upper) = domain_bounds(&chart);
    assert!((lower - (5.0 - 5.0 / 1.1)).abs() <= 1e-9);
    assert!((upper - (5.0 + 5.0 / 1.1)).abs() <= 1e-9);
}

#[test]
fn zoom_redraws_once_for_both_axes() {
    let chart = cartesian_chart();
    let mut surface = build_surface(chart);
    assert_eq!(surface.renderer().chart_renders.len(), 1);

    surface.scrolled(&ScrollEvent::new(50.0, 50.0, 1.0)).expect("scroll");
    assert_eq!(surface.renderer().chart_renders.len(), 2);
}

#[test]
fn zero_delta_scroll_is_ignored() {
    let chart = cartesian_chart();
    let mut surface = build_surface(chart.clone());

    surface.scrolled(&ScrollEvent::new(50.0, 50.0, 0.0)).expect("scroll");

    let (lower, upper) = domain_bounds(&chart);
    assert!((lower - 0.0).abs() <= 1e-9);
    assert!((upper - 10.0).abs() <= 1e-9);
    // no change notification either, so no redraw
    assert_eq!(surface.renderer().chart_renders.len(), 1);
}

#[test]
fn scroll_outside_the_data_area_zooms_nothing() {
    let chart = cartesian_chart();
    let mut surface = build_surface(chart.clone());

    surface
        .scrolled(&ScrollEvent::new(150.0, 150.0, 1.0))
        .expect("scroll");

    let (lower, upper) = domain_bounds(&chart);
    assert!((lower - 0.0).abs() <= 1e-9);
    assert!((upper - 10.0).abs() <= 1e-9);
}

#[test]
fn surface_flags_gate_each_axis_independently() {
    let chart = cartesian_chart();
    let mut surface = build_surface(chart.clone());
    surface.state_mut().set_range_zoomable(false);

    surface.scrolled(&ScrollEvent::new(50.0, 50.0, 1.0)).expect("scroll");

    let (lower, upper) = domain_bounds(&chart);
    assert!((lower - (-0.5)).abs() <= 1e-9);
    assert!((upper - 10.5).abs() <= 1e-9);
    let (lower, upper) = range_bounds(&chart);
    assert!((lower - 0.0).abs() <= 1e-9);
    assert!((upper - 10.0).abs() <= 1e-9);
}

#[test]
fn disabled_scroll_handler_leaves_the_chart_alone() {
    let chart = cartesian_chart();
    let mut surface = build_surface(chart.clone());
    assert!(surface.set_handler_enabled("scroll", false));

    surface.scrolled(&ScrollEvent::new(50.0, 50.0, 1.0)).expect("scroll");

    let (lower, upper) = domain_bounds(&chart);
    assert!((lower - 0.0).abs() <= 1e-9);
    assert!((upper - 10.0).abs() <= 1e-9);
}

#[test]
fn plots_without_axes_get_the_wheel_rotation_instead() {
    let chart = Chart::new(Box::new(RadialPlot::new())).into_shared();
    let mut surface = build_surface(chart.clone());
    assert_eq!(surface.renderer().chart_renders.len(), 1);

    surface.scrolled(&ScrollEvent::new(50.0, 50.0, 3.0)).expect("scroll");

    assert!(chart.borrow().domain_bounds().is_none());
    // the rotation counts as a chart change and triggers a redraw
    assert_eq!(surface.renderer().chart_renders.len(), 2);
}

#[test]
fn wheel_rotation_wraps_degrees() {
    let mut plot = RadialPlot::new().with_degrees_per_tick(90.0);
    {
        use chart_surface::chart::PlotBehavior;
        assert!(plot.wheel_rotate(5));
        assert!((plot.rotation_degrees() - 90.0).abs() <= 1e-9);
        assert!(plot.wheel_rotate(-3));
        assert!((plot.rotation_degrees() - 180.0).abs() <= 1e-9);
        assert!(!plot.wheel_rotate(0));
    }
}
