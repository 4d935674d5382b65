use chart_surface::chart::{CartesianPlot, Chart, SharedChart};
use chart_surface::core::{AxisRange, Rectangle};
use chart_surface::render::RecordingRenderer;
use chart_surface::{Surface, SurfaceError};

fn cartesian_chart() -> SharedChart {
    Chart::new(Box::new(CartesianPlot::new(
        AxisRange::new(0.0, 10.0).expect("valid domain"),
        AxisRange::new(0.0, 10.0).expect("valid range"),
    )))
    .into_shared()
}

#[test]
fn resizing_redraws_and_installs_the_snapshot() {
    let mut surface =
        Surface::new(RecordingRenderer::new(), Some(cartesian_chart())).expect("surface init");
    assert!(surface.rendering_info().is_none());

    let bounds = Rectangle::new(0.0, 0.0, 300.0, 200.0);
    surface.set_bounds(bounds).expect("bounds");

    assert_eq!(surface.renderer().clears, 1);
    assert_eq!(surface.renderer().chart_renders.len(), 1);
    // without a template the recorder reports the full bounds as data area
    let info = surface.rendering_info().expect("snapshot installed");
    assert_eq!(info.plot_info().data_area(), bounds);
}

#[test]
fn a_resize_replaces_the_previous_snapshot() {
    let mut surface =
        Surface::new(RecordingRenderer::new(), Some(cartesian_chart())).expect("surface init");

    surface
        .set_bounds(Rectangle::new(0.0, 0.0, 300.0, 200.0))
        .expect("bounds");
    surface
        .set_bounds(Rectangle::new(0.0, 0.0, 640.0, 480.0))
        .expect("bounds");

    let info = surface.rendering_info().expect("snapshot installed");
    assert_eq!(
        info.plot_info().data_area(),
        Rectangle::new(0.0, 0.0, 640.0, 480.0)
    );
}

#[test]
fn setting_identical_bounds_is_a_no_op() {
    let mut surface =
        Surface::new(RecordingRenderer::new(), Some(cartesian_chart())).expect("surface init");
    let bounds = Rectangle::new(0.0, 0.0, 300.0, 200.0);

    surface.set_bounds(bounds).expect("bounds");
    surface.set_bounds(bounds).expect("same bounds");

    assert_eq!(surface.renderer().clears, 1);
}

#[test]
fn negative_or_non_finite_bounds_are_rejected() {
    let mut surface =
        Surface::new(RecordingRenderer::new(), Some(cartesian_chart())).expect("surface init");

    let err = surface
        .set_bounds(Rectangle::new(0.0, 0.0, -10.0, 100.0))
        .expect_err("negative width must fail");
    assert!(matches!(err, SurfaceError::InvalidBounds { .. }));

    let err = surface
        .set_bounds(Rectangle::new(0.0, 0.0, 100.0, f64::NAN))
        .expect_err("nan height must fail");
    assert!(matches!(err, SurfaceError::InvalidBounds { .. }));
}

#[test]
fn degenerate_sizes_clear_but_skip_the_chart_render() {
    let mut surface =
        Surface::new(RecordingRenderer::new(), Some(cartesian_chart())).expect("surface init");

    surface
        .set_bounds(Rectangle::new(0.0, 0.0, 100.0, 0.0))
        .expect("flat bounds");

    assert_eq!(surface.renderer().clears, 1);
    assert!(surface.renderer().chart_renders.is_empty());
    assert!(surface.rendering_info().is_none());
}

#[test]
fn a_surface_without_a_chart_still_clears() {
    let mut surface = Surface::new(RecordingRenderer::new(), None).expect("surface init");

    surface
        .set_bounds(Rectangle::new(0.0, 0.0, 300.0, 200.0))
        .expect("bounds");

    assert_eq!(surface.renderer().clears, 1);
    assert!(surface.renderer().chart_renders.is_empty());
    assert!(surface.rendering_info().is_none());
}

#[test]
fn chart_changes_outside_the_input_path_request_a_redraw() {
    let chart = cartesian_chart();
    let mut surface =
        Surface::new(RecordingRenderer::new(), Some(chart.clone())).expect("surface init");
    surface
        .set_bounds(Rectangle::new(0.0, 0.0, 300.0, 200.0))
        .expect("bounds");

    chart
        .borrow_mut()
        .set_domain_bounds(AxisRange::new(2.0, 4.0).expect("valid bounds"));

    assert!(surface.redraw_if_needed().expect("redraw"));
    assert_eq!(surface.renderer().chart_renders.len(), 2);
    assert!(!surface.redraw_if_needed().expect("nothing pending"));
}

#[test]
fn replacing_the_chart_unsubscribes_the_old_one() {
    let old = cartesian_chart();
    let mut surface =
        Surface::new(RecordingRenderer::new(), Some(old.clone())).expect("surface init");
    surface
        .set_bounds(Rectangle::new(0.0, 0.0, 300.0, 200.0))
        .expect("bounds");

    let new = cartesian_chart();
    surface.set_chart(Some(new.clone())).expect("swap chart");

    // mutating the detached chart no longer reaches the surface
    old.borrow_mut()
        .set_domain_bounds(AxisRange::new(1.0, 2.0).expect("valid bounds"));
    assert!(!surface.redraw_if_needed().expect("nothing pending"));

    new.borrow_mut()
        .set_domain_bounds(AxisRange::new(1.0, 2.0).expect("valid bounds"));
    assert!(surface.redraw_if_needed().expect("redraw"));
}

#[test]
fn clearing_the_chart_drops_the_snapshot() {
    let mut surface =
        Surface::new(RecordingRenderer::new(), Some(cartesian_chart())).expect("surface init");
    surface
        .set_bounds(Rectangle::new(0.0, 0.0, 300.0, 200.0))
        .expect("bounds");
    assert!(surface.rendering_info().is_some());

    surface.set_chart(None).expect("clear chart");
    assert!(surface.rendering_info().is_none());
}

#[test]
fn notify_suppression_coalesces_mutations() {
    let chart = cartesian_chart();
    let mut surface =
        Surface::new(RecordingRenderer::new(), Some(chart.clone())).expect("surface init");
    surface
        .set_bounds(Rectangle::new(0.0, 0.0, 300.0, 200.0))
        .expect("bounds");

    {
        let mut chart = chart.borrow_mut();
        chart.set_notify(false);
        chart.set_domain_bounds(AxisRange::new(2.0, 4.0).expect("valid bounds"));
        chart.set_range_bounds(AxisRange::new(1.0, 3.0).expect("valid bounds"));
        // nothing fired while suppressed
        assert!(!chart.is_notify());
        chart.set_notify(true);
    }

    assert!(surface.redraw_if_needed().expect("redraw"));
    assert_eq!(surface.renderer().chart_renders.len(), 2);
}
