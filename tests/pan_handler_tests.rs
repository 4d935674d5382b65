use chart_surface::Surface;
use chart_surface::chart::{CartesianPlot, Chart, SharedChart};
use chart_surface::core::{AxisRange, Orientation, Rectangle};
use chart_surface::interaction::{ModifierMask, PointerEvent};
use chart_surface::render::RecordingRenderer;

const DATA_AREA: Rectangle = Rectangle::new(100.0, 50.0, 200.0, 100.0);

fn unit_plot() -> CartesianPlot {
    CartesianPlot::new(
        AxisRange::new(0.0, 10.0).expect("valid domain"),
        AxisRange::new(0.0, 10.0).expect("valid range"),
    )
}

fn build_surface(plot: CartesianPlot) -> (Surface<RecordingRenderer>, SharedChart) {
    let chart = Chart::new(Box::new(plot)).into_shared();
    let renderer = RecordingRenderer::new().with_data_area(DATA_AREA);
    let mut surface = Surface::new(renderer, Some(chart.clone())).expect("surface init");
    surface
        .set_bounds(Rectangle::new(0.0, 0.0, 400.0, 300.0))
        .expect("initial bounds");
    (surface, chart)
}

fn alt_pointer(x: f64, y: f64) -> PointerEvent {
    PointerEvent::new(x, y).with_modifiers(ModifierMask::ALT)
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
fn drag_pans_both_axes_under_vertical_orientation() {
    let (mut surface, chart) = build_surface(unit_plot());

    surface.pointer_pressed(&alt_pointer(200.0, 100.0)).expect("press");
    assert_eq!(surface.live_handler_id(), Some("pan"));

    surface.pointer_dragged(&alt_pointer(220.0, 90.0)).expect("drag");

    // dx of +20px over a 200px area shifts the domain by -10% of its span;
    // dy of -10px over a 100px area shifts the range by -10%
    let (lower, upper) = domain_bounds(&chart);
    assert!((lower - (-1.0)).abs() <= 1e-9);
    assert!((upper - 9.0).abs() <= 1e-9);
    let (lower, upper) = range_bounds(&chart);
    assert!((lower - (-1.0)).abs() <= 1e-9);
    assert!((upper - 9.0).abs() <= 1e-9);
}

#[test]
fn drag_redraws_once_even_when_both_axes_move() {
    let (mut surface, _chart) = build_surface(unit_plot());
    assert_eq!(surface.renderer().chart_renders.len(), 1);

    surface.pointer_pressed(&alt_pointer(200.0, 100.0)).expect("press");
    assert_eq!(surface.renderer().chart_renders.len(), 1);

    surface.pointer_dragged(&alt_pointer(220.0, 90.0)).expect("drag");
    assert_eq!(surface.renderer().chart_renders.len(), 2);
}

#[test]
fn consecutive_drags_pan_incrementally() {
    let (mut surface, chart) = build_surface(unit_plot());

    surface.pointer_pressed(&alt_pointer(200.0, 100.0)).expect("press");
    surface.pointer_dragged(&alt_pointer(220.0, 100.0)).expect("drag");
    surface.pointer_dragged(&alt_pointer(240.0, 100.0)).expect("drag");

    let (lower, upper) = domain_bounds(&chart);
    assert!((lower - (-2.0)).abs() <= 1e-9);
    assert!((upper - 8.0).abs() <= 1e-9);
}

#[test]
fn horizontal_orientation_swaps_the_axis_assignment() {
    let plot = unit_plot().with_orientation(Orientation::Horizontal);
    let (mut surface, chart) = build_surface(plot);

    surface.pointer_pressed(&alt_pointer(200.0, 100.0)).expect("press");
    surface.pointer_dragged(&alt_pointer(220.0, 100.0)).expect("drag");

    // a pure-x drag moves the range axis when the domain runs along y
    let (lower, upper) = domain_bounds(&chart);
    assert!((lower - 0.0).abs() <= 1e-9);
    assert!((upper - 10.0).abs() <= 1e-9);
    let (lower, upper) = range_bounds(&chart);
    assert!((lower - (-1.0)).abs() <= 1e-9);
    assert!((upper - 9.0).abs() <= 1e-9);
}

#[test]
fn only_pannable_axes_move() {
    let plot = unit_plot().with_pannable(true, false);
    let (mut surface, chart) = build_surface(plot);

    surface.pointer_pressed(&alt_pointer(200.0, 100.0)).expect("press");
    surface.pointer_dragged(&alt_pointer(220.0, 90.0)).expect("drag");

    let (lower, upper) = domain_bounds(&chart);
    assert!((lower - (-1.0)).abs() <= 1e-9);
    assert!((upper - 9.0).abs() <= 1e-9);
    let (lower, upper) = range_bounds(&chart);
    assert!((lower - 0.0).abs() <= 1e-9);
    assert!((upper - 10.0).abs() <= 1e-9);
}

#[test]
fn press_outside_the_data_area_relinquishes() {
    let (mut surface, chart) = build_surface(unit_plot());

    surface.pointer_pressed(&alt_pointer(50.0, 50.0)).expect("press");
    assert_eq!(surface.live_handler_id(), None);

    surface.pointer_dragged(&alt_pointer(70.0, 50.0)).expect("drag");
    let (lower, upper) = domain_bounds(&chart);
    assert!((lower - 0.0).abs() <= 1e-9);
    assert!((upper - 10.0).abs() <= 1e-9);
}

#[test]
fn press_without_a_chart_relinquishes() {
    let renderer = RecordingRenderer::new().with_data_area(DATA_AREA);
    let mut surface = Surface::new(renderer, None).expect("surface init");
    surface
        .set_bounds(Rectangle::new(0.0, 0.0, 400.0, 300.0))
        .expect("initial bounds");

    surface.pointer_pressed(&alt_pointer(200.0, 100.0)).expect("press");
    assert_eq!(surface.live_handler_id(), None);
}

#[test]
fn press_on_a_fixed_plot_relinquishes() {
    let plot = unit_plot().with_pannable(false, false);
    let (mut surface, _chart) = build_surface(plot);

    surface.pointer_pressed(&alt_pointer(200.0, 100.0)).expect("press");
    assert_eq!(surface.live_handler_id(), None);
}

#[test]
fn press_without_the_required_modifier_never_activates_pan() {
    let (mut surface, chart) = build_surface(unit_plot());

    surface
        .pointer_pressed(&PointerEvent::new(200.0, 100.0))
        .expect("press");
    assert_eq!(surface.live_handler_id(), None);

    surface
        .pointer_dragged(&PointerEvent::new(220.0, 100.0))
        .expect("drag");
    let (lower, upper) = domain_bounds(&chart);
    assert!((lower - 0.0).abs() <= 1e-9);
    assert!((upper - 10.0).abs() <= 1e-9);
}

#[test]
fn release_ends_the_gesture() {
    let (mut surface, chart) = build_surface(unit_plot());

    surface.pointer_pressed(&alt_pointer(200.0, 100.0)).expect("press");
    surface.pointer_released(&alt_pointer(200.0, 100.0)).expect("release");
    assert_eq!(surface.live_handler_id(), None);

    // a stray drag after release pans nothing
    surface.pointer_dragged(&alt_pointer(260.0, 100.0)).expect("drag");
    let (lower, upper) = domain_bounds(&chart);
    assert!((lower - 0.0).abs() <= 1e-9);
    assert!((upper - 10.0).abs() <= 1e-9);
}
