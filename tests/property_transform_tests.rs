use chart_surface::core::{AxisEdge, AxisRange, Rectangle};
use proptest::prelude::*;

fn edges() -> impl Strategy<Value = AxisEdge> {
    prop_oneof![
        Just(AxisEdge::Top),
        Just(AxisEdge::Bottom),
        Just(AxisEdge::Left),
        Just(AxisEdge::Right),
    ]
}

proptest! {
    #[test]
    fn pixel_round_trip_property(
        lower in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0,
        area_x in -2_000.0f64..2_000.0,
        area_y in -2_000.0f64..2_000.0,
        area_w in 1.0f64..4_096.0,
        area_h in 1.0f64..4_096.0,
        edge in edges()
    ) {
        let range = AxisRange::new(lower, lower + span).expect("valid range");
        let value = lower + value_factor * span;
        let area = Rectangle::new(area_x, area_y, area_w, area_h);

        let px = range.value_to_pixel(value, area, edge).expect("to pixel");
        let recovered = range.pixel_to_value(px, area, edge).expect("from pixel");

        prop_assert!((recovered - value).abs() <= 1e-6 * span.max(1.0));
    }

    #[test]
    fn pan_round_trip_property(
        lower in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        percent in -10.0f64..10.0
    ) {
        let range = AxisRange::new(lower, lower + span).expect("valid range");
        let there_and_back = range.panned(percent).panned(-percent);

        prop_assert!((there_and_back.lower() - range.lower()).abs() <= 1e-6 * span.max(1.0));
        prop_assert!((there_and_back.span() - range.span()).abs() <= 1e-6 * span.max(1.0));
    }

    #[test]
    fn zoom_preserves_anchor_position_property(
        lower in -1_000.0f64..1_000.0,
        span in 0.001f64..1_000.0,
        anchor_factor in 0.0f64..1.0,
        factor in 0.01f64..100.0
    ) {
        let range = AxisRange::new(lower, lower + span).expect("valid range");
        let anchor = lower + anchor_factor * span;
        let zoomed = range.zoomed_about(factor, anchor);

        let before = (anchor - range.lower()) / range.span();
        let after = (anchor - zoomed.lower()) / zoomed.span();
        prop_assert!((before - after).abs() <= 1e-6);
        prop_assert!((zoomed.span() - range.span() * factor).abs() <= 1e-6 * range.span() * factor);
    }
}
