use crate::charts::svg::{Anchor, LinearScale, SvgDoc};
use crate::charts::{AXIS_COLOR, HEIGHT, PlotArea, WIDTH, draw_legend, draw_y_axis, series_color};
use crate::model::aggregate::GroupedMeans;
use crate::report::format_f64_2;

/// Score identity for one bar series: `(id, display name)`.
pub type SeriesKey = (String, String);

/// Value domain for the bars. Zero is always included so every bar grows
/// from a visible baseline, downwards for negative means.
pub fn bar_domain(grouped: &GroupedMeans) -> (f64, f64) {
    let (min, max) = grouped
        .rows
        .iter()
        .map(|r| r.mean)
        .filter(|v| v.is_finite())
        .fold((0.0f64, 0.0f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if min == 0.0 && max == 0.0 {
        return (0.0, 1.0);
    }
    (min * 1.1, max * 1.1)
}

/// `(top, height)` in pixels of the bar between zero and `v`.
pub fn bar_span(y: &LinearScale, v: f64) -> (f64, f64) {
    let zero = y.map(0.0);
    let end = y.map(v);
    (zero.min(end), (zero - end).abs())
}

pub fn render_grouped_bars(
    grouped: &GroupedMeans,
    series: &[SeriesKey],
    title: &str,
    x_label: &str,
) -> String {
    let mut doc = SvgDoc::new(WIDTH, HEIGHT);
    doc.title(title);
    let area = PlotArea::standard(WIDTH, HEIGHT);

    let domain = bar_domain(grouped);
    let y = draw_y_axis(&mut doc, &area, domain, "Mean score");
    if domain.0 < 0.0 {
        let zero = y.map(0.0);
        doc.line(area.left, zero, area.right, zero, AXIS_COLOR, 1.0);
    }

    let n_groups = grouped.groups.len();
    if n_groups == 0 {
        doc.text(
            (area.left + area.right) / 2.0,
            (area.top + area.bottom) / 2.0,
            13.0,
            Anchor::Middle,
            "no groups",
        );
    }

    let slot = area.width() / n_groups.max(1) as f64;
    let bar_w = slot * 0.8 / series.len().max(1) as f64;
    for (g, group) in grouped.groups.iter().enumerate() {
        let slot_left = area.left + g as f64 * slot + slot * 0.1;
        for (s, (id, _name)) in series.iter().enumerate() {
            let Some(v) = grouped.mean_of(group, id) else {
                continue;
            };
            if !v.is_finite() {
                continue;
            }
            let x = slot_left + s as f64 * bar_w;
            let (y_top, height) = bar_span(&y, v);
            doc.rect(x, y_top, bar_w - 2.0, height, series_color(s));
            let label_y = if v < 0.0 {
                y_top + height + 12.0
            } else {
                y_top - 4.0
            };
            doc.text(
                x + bar_w / 2.0 - 1.0,
                label_y,
                10.0,
                Anchor::Middle,
                &format_f64_2(v),
            );
        }
        doc.text(
            area.left + g as f64 * slot + slot / 2.0,
            area.bottom + 18.0,
            12.0,
            Anchor::Middle,
            group,
        );
    }
    doc.text(
        (area.left + area.right) / 2.0,
        area.bottom + 42.0,
        12.0,
        Anchor::Middle,
        x_label,
    );

    let names: Vec<String> = series.iter().map(|(_, name)| name.clone()).collect();
    draw_legend(&mut doc, &area, &names);
    doc.finish()
}

#[cfg(test)]
#[path = "../../tests/src_inline/charts/bar.rs"]
mod tests;
