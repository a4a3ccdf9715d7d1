use super::*;

const PLOT: PlotBox = PlotBox::new(10.0, 10.0, 100.0, 50.0);

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================
// PlotBox / line chart
// =============================================================

#[test]
fn y_for_maps_domain_to_box_and_clamps() {
    assert!(close(PLOT.y_for(0.0, 0.0, 1.0), 60.0));
    assert!(close(PLOT.y_for(1.0, 0.0, 1.0), 10.0));
    assert!(close(PLOT.y_for(0.5, 0.0, 1.0), 35.0));
    assert!(close(PLOT.y_for(3.0, 0.0, 1.0), 10.0));
    assert!(close(PLOT.y_for(0.5, 1.0, 1.0), PLOT.bottom()));
}

#[test]
fn line_points_spread_across_width() {
    let pts = line_points(PLOT, &[0.0, 0.5, 1.0], 0.0, 1.0);
    assert_eq!(pts.len(), 3);
    assert!(close(pts[0].x, 10.0));
    assert!(close(pts[1].x, 60.0));
    assert!(close(pts[2].x, PLOT.right()));
    assert!(close(pts[2].y, 10.0));
}

#[test]
fn line_points_single_value_is_centred() {
    let pts = line_points(PLOT, &[0.5], 0.0, 1.0);
    assert_eq!(pts, vec![Point { x: 60.0, y: 35.0 }]);
    assert!(line_points(PLOT, &[], 0.0, 1.0).is_empty());
}

#[test]
fn polyline_attr_formats_one_decimal() {
    let attr = polyline_attr(&[Point { x: 1.0, y: 2.26 }, Point { x: 3.5, y: 4.0 }]);
    assert_eq!(attr, "1.0,2.3 3.5,4.0");
}

// =============================================================
// Bars
// =============================================================

#[test]
fn nice_ceiling_rounds_up_to_step() {
    assert!(close(nice_ceiling(15.0, 5.0), 15.0));
    assert!(close(nice_ceiling(16.0, 5.0), 20.0));
    assert!(close(nice_ceiling(0.0, 5.0), 5.0));
}

#[test]
fn grouped_bars_share_slot_and_scale_height() {
    let groups = vec![vec![10.0, 5.0], vec![0.0, 20.0]];
    let bars = grouped_bars(PLOT, &groups, 20.0, 0.8);
    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0].len(), 2);

    // Slot 50 wide, bars 40 wide in total, 5 of inset on each side.
    assert!(close(bars[0][0].x, 15.0));
    assert!(close(bars[0][0].width, 20.0));
    assert!(close(bars[0][1].x, 35.0));
    assert!(close(bars[1][0].x, 65.0));

    assert!(close(bars[0][0].height, 25.0));
    assert!(close(bars[1][0].height, 0.0));
    assert!(close(bars[1][1].height, 50.0));
    assert!(close(bars[1][1].y, PLOT.top));
}

// =============================================================
// Pie
// =============================================================

#[test]
fn pie_slices_cover_full_circle_in_order() {
    let slices = pie_slices(&[1, 1, 2]);
    assert_eq!(slices.len(), 3);
    assert!(close(slices[0].start, 0.0));
    assert!(close(slices[0].sweep(), TAU / 4.0));
    assert!(close(slices[1].start, slices[0].end));
    assert!(close(slices[2].end, TAU));
}

#[test]
fn pie_slices_all_zero_are_empty() {
    let slices = pie_slices(&[0, 0]);
    assert!(slices.iter().all(|s| close(s.sweep(), 0.0)));
    assert!(slice_path(0.0, 0.0, 10.0, slices[0]).is_empty());
}

#[test]
fn slice_path_quarter_starts_at_twelve_oclock() {
    let path = slice_path(50.0, 50.0, 10.0, Slice { start: 0.0, end: TAU / 4.0 });
    assert_eq!(path, "M 50.00 50.00 L 50.00 40.00 A 10.00 10.00 0 0 1 60.00 50.00 Z");
}

#[test]
fn slice_path_uses_large_arc_past_half() {
    let path = slice_path(0.0, 0.0, 10.0, Slice { start: 0.0, end: TAU * 0.75 });
    assert!(path.contains(" 0 1 1 "));
}

#[test]
fn full_circle_slice_draws_two_arcs() {
    let path = slice_path(0.0, 0.0, 10.0, Slice { start: 0.0, end: TAU });
    assert_eq!(path.matches(" A ").count(), 2);
}

#[test]
fn label_anchor_sits_on_bisector() {
    let anchor = Slice { start: 0.0, end: TAU / 2.0 }.label_anchor(0.0, 0.0, 10.0);
    assert!(close(anchor.x, 10.0));
    assert!(anchor.y.abs() < 1e-9);
}
