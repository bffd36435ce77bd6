pub mod bar;
pub mod boxplot;
pub mod heatmap;
pub mod histogram;
pub mod svg;

use svg::{Anchor, LinearScale, SvgDoc, format_tick, nice_ticks};

pub const WIDTH: f64 = 760.0;
pub const HEIGHT: f64 = 440.0;

pub const SERIES_COLORS: &[&str] = &["#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a"];
pub(crate) const AXIS_COLOR: &str = "#444444";
const GRID_COLOR: &str = "#e5e5e5";

pub fn series_color(idx: usize) -> &'static str {
    SERIES_COLORS[idx % SERIES_COLORS.len()]
}

/// A rendered chart, ready to be written as a file or inlined in a page.
#[derive(Debug, Clone)]
pub struct Chart {
    pub id: &'static str,
    pub title: String,
    pub svg: String,
}

/// Plot area inside the SVG canvas.
#[derive(Debug, Clone, Copy)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotArea {
    pub fn standard(width: f64, height: f64) -> Self {
        Self {
            left: 70.0,
            top: 50.0,
            right: width - 150.0,
            bottom: height - 60.0,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

/// Draws horizontal grid lines, y tick labels and both axis lines. Returns
/// the y scale.
pub fn draw_y_axis(
    doc: &mut SvgDoc,
    area: &PlotArea,
    domain: (f64, f64),
    label: &str,
) -> LinearScale {
    let scale = LinearScale::new(domain, (area.bottom, area.top));
    for tick in nice_ticks(domain.0, domain.1, 5) {
        let y = scale.map(tick);
        doc.line(area.left, y, area.right, y, GRID_COLOR, 1.0);
        doc.text(area.left - 8.0, y + 4.0, 11.0, Anchor::End, &format_tick(tick));
    }
    doc.line(area.left, area.top, area.left, area.bottom, AXIS_COLOR, 1.0);
    doc.line(area.left, area.bottom, area.right, area.bottom, AXIS_COLOR, 1.0);
    doc.vertical_text(area.left - 45.0, (area.top + area.bottom) / 2.0, 12.0, label);
    scale
}

pub fn draw_legend(doc: &mut SvgDoc, area: &PlotArea, names: &[String]) {
    let x = area.right + 20.0;
    for (i, name) in names.iter().enumerate() {
        let y = area.top + 10.0 + i as f64 * 22.0;
        doc.rect(x, y - 10.0, 14.0, 14.0, series_color(i));
        doc.text(x + 20.0, y + 1.0, 12.0, Anchor::Start, name);
    }
}

/// `(min, max)` of the finite values, padded when degenerate.
pub fn value_domain(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        if v.is_finite() {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if !min.is_finite() {
        return None;
    }
    if min == max {
        return Some((min - 0.5, max + 0.5));
    }
    Some((min, max))
}
