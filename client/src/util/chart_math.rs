//! Geometry for the inline SVG insight charts.
//!
//! All functions work in SVG user units with the origin top-left. Charts are
//! drawn into a plot box inset from the viewbox by [`PlotBox`] padding.

#[cfg(test)]
#[path = "chart_math_test.rs"]
mod chart_math_test;

use std::f64::consts::{FRAC_PI_2, TAU};

/// Drawable region of a chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotBox {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Map `value` in `min..=max` to a y coordinate, `max` at the top.
    pub fn y_for(&self, value: f64, min: f64, max: f64) -> f64 {
        let span = max - min;
        if span <= 0.0 {
            return self.bottom();
        }
        let t = ((value - min) / span).clamp(0.0, 1.0);
        self.bottom() - t * self.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Evenly spaced line-chart points for `values` within `min..=max`.
///
/// A single value is centred horizontally.
#[allow(clippy::cast_precision_loss)]
pub fn line_points(plot: PlotBox, values: &[f64], min: f64, max: f64) -> Vec<Point> {
    match values.len() {
        0 => Vec::new(),
        1 => vec![Point { x: plot.left + plot.width / 2.0, y: plot.y_for(values[0], min, max) }],
        n => {
            let step = plot.width / (n - 1) as f64;
            values
                .iter()
                .enumerate()
                .map(|(i, v)| Point { x: plot.left + step * i as f64, y: plot.y_for(*v, min, max) })
                .collect()
        }
    }
}

/// `points` attribute for an SVG `<polyline>`.
pub fn polyline_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{:.1},{:.1}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Upper bound of a value axis: the data maximum rounded up to a multiple of
/// `step`, never below `step`.
pub fn nice_ceiling(max: f64, step: f64) -> f64 {
    if step <= 0.0 {
        return max;
    }
    ((max / step).ceil() * step).max(step)
}

/// Side-by-side bars for each group of series values.
///
/// Each group occupies an equal slot; bars fill `bar_fraction` of the slot and
/// are scaled against `max`. Returned rects are grouped row-major
/// (`result[group][series]`).
#[allow(clippy::cast_precision_loss)]
pub fn grouped_bars(plot: PlotBox, groups: &[Vec<f64>], max: f64, bar_fraction: f64) -> Vec<Vec<Rect>> {
    if groups.is_empty() {
        return Vec::new();
    }
    let slot = plot.width / groups.len() as f64;
    let fraction = bar_fraction.clamp(0.0, 1.0);

    groups
        .iter()
        .enumerate()
        .map(|(g, series)| {
            if series.is_empty() {
                return Vec::new();
            }
            let bar_width = slot * fraction / series.len() as f64;
            let start = plot.left + slot * g as f64 + slot * (1.0 - fraction) / 2.0;
            series
                .iter()
                .enumerate()
                .map(|(s, v)| {
                    let y = plot.y_for(*v, 0.0, max);
                    Rect { x: start + bar_width * s as f64, y, width: bar_width, height: plot.bottom() - y }
                })
                .collect()
        })
        .collect()
}

/// A pie slice as start/end angles in radians, clockwise from 12 o'clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slice {
    pub start: f64,
    pub end: f64,
}

impl Slice {
    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }

    /// Point on the slice's bisector at `radius` from the centre.
    pub fn label_anchor(&self, cx: f64, cy: f64, radius: f64) -> Point {
        polar(cx, cy, radius, (self.start + self.end) / 2.0)
    }
}

/// Split the full circle proportionally to `counts`. All-zero input yields
/// zero-width slices.
pub fn pie_slices(counts: &[u32]) -> Vec<Slice> {
    let total: u32 = counts.iter().sum();
    let mut angle = 0.0;
    counts
        .iter()
        .map(|c| {
            let sweep = if total == 0 { 0.0 } else { TAU * f64::from(*c) / f64::from(total) };
            let slice = Slice { start: angle, end: angle + sweep };
            angle += sweep;
            slice
        })
        .collect()
}

fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> Point {
    let theta = angle - FRAC_PI_2;
    Point { x: cx + radius * theta.cos(), y: cy + radius * theta.sin() }
}

/// SVG path `d` for a filled pie slice.
pub fn slice_path(cx: f64, cy: f64, radius: f64, slice: Slice) -> String {
    let sweep = slice.sweep();
    if sweep <= 0.0 {
        return String::new();
    }
    if sweep >= TAU - 1e-9 {
        // A single arc cannot describe a full circle; draw two halves.
        let top = polar(cx, cy, radius, 0.0);
        let bottom = polar(cx, cy, radius, TAU / 2.0);
        return format!(
            "M {:.2} {:.2} A {r:.2} {r:.2} 0 1 1 {:.2} {:.2} A {r:.2} {r:.2} 0 1 1 {:.2} {:.2} Z",
            top.x,
            top.y,
            bottom.x,
            bottom.y,
            top.x,
            top.y,
            r = radius
        );
    }
    let from = polar(cx, cy, radius, slice.start);
    let to = polar(cx, cy, radius, slice.end);
    let large_arc = u8::from(sweep > TAU / 2.0);
    format!(
        "M {cx:.2} {cy:.2} L {:.2} {:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {:.2} {:.2} Z",
        from.x,
        from.y,
        to.x,
        to.y,
        r = radius
    )
}
