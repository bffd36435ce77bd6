use crate::charts::svg::{Anchor, SvgDoc};
use crate::charts::{HEIGHT, PlotArea, WIDTH, draw_y_axis, series_color, value_domain};
use crate::model::scores::ScoreSeries;
use crate::report::{quantile_linear, sorted_present};

#[derive(Debug, Clone, PartialEq)]
pub struct BoxSummary {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub lower_whisker: f64,
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

/// Tukey box: whiskers reach the furthest points within 1.5 IQR of the box.
pub fn box_summary(values: &[f64]) -> Option<BoxSummary> {
    let sorted = sorted_present(values);
    if sorted.is_empty() {
        return None;
    }
    let q1 = quantile_linear(&sorted, 0.25);
    let median = quantile_linear(&sorted, 0.5);
    let q3 = quantile_linear(&sorted, 0.75);
    let iqr = q3 - q1;
    let lo_fence = q1 - 1.5 * iqr;
    let hi_fence = q3 + 1.5 * iqr;

    let lower_whisker = sorted
        .iter()
        .copied()
        .find(|&v| v >= lo_fence)
        .unwrap_or(q1);
    let upper_whisker = sorted
        .iter()
        .rev()
        .copied()
        .find(|&v| v <= hi_fence)
        .unwrap_or(q3);
    let outliers = sorted
        .iter()
        .copied()
        .filter(|&v| v < lo_fence || v > hi_fence)
        .collect();

    Some(BoxSummary {
        q1,
        median,
        q3,
        lower_whisker,
        upper_whisker,
        outliers,
    })
}

pub fn render_box_plots(series: &[ScoreSeries], title: &str) -> String {
    let mut doc = SvgDoc::new(WIDTH, HEIGHT);
    doc.title(title);
    let area = PlotArea::standard(WIDTH, HEIGHT);

    let domain = value_domain(series.iter().flat_map(|s| s.values.iter().copied()))
        .unwrap_or((0.0, 1.0));
    let pad = (domain.1 - domain.0) * 0.05;
    let y = draw_y_axis(&mut doc, &area, (domain.0 - pad, domain.1 + pad), "Score");

    let slot = area.width() / series.len().max(1) as f64;
    for (i, s) in series.iter().enumerate() {
        let cx = area.left + slot * (i as f64 + 0.5);
        doc.text(cx, area.bottom + 18.0, 12.0, Anchor::Middle, &s.name);
        let Some(b) = box_summary(&s.values) else {
            continue;
        };
        let color = series_color(i);
        let half = (slot * 0.25).min(60.0);

        doc.line(cx, y.map(b.lower_whisker), cx, y.map(b.q1), color, 1.5);
        doc.line(cx, y.map(b.q3), cx, y.map(b.upper_whisker), color, 1.5);
        for w in [b.lower_whisker, b.upper_whisker] {
            doc.line(cx - half / 2.0, y.map(w), cx + half / 2.0, y.map(w), color, 1.5);
        }
        doc.outlined_rect(
            cx - half,
            y.map(b.q3),
            half * 2.0,
            y.map(b.q1) - y.map(b.q3),
            "#f4f4ff",
            color,
        );
        doc.line(cx - half, y.map(b.median), cx + half, y.map(b.median), color, 2.5);
        for o in &b.outliers {
            doc.circle(cx, y.map(*o), 3.0, color);
        }
    }

    doc.finish()
}

#[cfg(test)]
#[path = "../../tests/src_inline/charts/boxplot.rs"]
mod tests;
