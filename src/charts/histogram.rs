use crate::charts::svg::{Anchor, LinearScale, SvgDoc, format_tick, nice_ticks};
use crate::charts::{HEIGHT, WIDTH, series_color, value_domain};
use crate::model::scores::ScoreSeries;

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

/// Equal-width bins over `[lo, hi]`; the last bin is closed on the right.
pub fn histogram(values: &[f64], bins: usize, lo: f64, hi: f64) -> Histogram {
    let bins = bins.max(1);
    let width = (hi - lo) / bins as f64;
    let edges = (0..=bins).map(|k| lo + width * k as f64).collect();
    let mut counts = vec![0usize; bins];
    for &v in values {
        if !v.is_finite() || v < lo || v > hi {
            continue;
        }
        let idx = if width > 0.0 {
            (((v - lo) / width).floor() as usize).min(bins - 1)
        } else {
            0
        };
        counts[idx] += 1;
    }
    Histogram { edges, counts }
}

/// Side-by-side histograms sharing the pooled value range.
pub fn render_histograms(series: &[ScoreSeries], bins: usize, title: &str) -> String {
    let mut doc = SvgDoc::new(WIDTH, HEIGHT);
    doc.title(title);

    let (lo, hi) = value_domain(series.iter().flat_map(|s| s.values.iter().copied()))
        .unwrap_or((0.0, 1.0));
    let hists: Vec<Histogram> = series
        .iter()
        .map(|s| histogram(&s.values, bins, lo, hi))
        .collect();

    let n = series.len().max(1);
    let gap = 40.0;
    let outer_left = 60.0;
    let panel_w = (WIDTH - outer_left - 30.0 - gap * (n as f64 - 1.0)) / n as f64;
    let top = 70.0;
    let bottom = HEIGHT - 60.0;

    for (i, (s, h)) in series.iter().zip(hists.iter()).enumerate() {
        let left = outer_left + i as f64 * (panel_w + gap);
        let right = left + panel_w;
        let max_count = h.counts.iter().copied().max().unwrap_or(0).max(1);
        let x = LinearScale::new((lo, hi), (left, right));
        let y = LinearScale::new((0.0, max_count as f64 * 1.1), (bottom, top));

        doc.text((left + right) / 2.0, top - 14.0, 13.0, Anchor::Middle, &s.name);
        for tick in nice_ticks(0.0, max_count as f64, 4) {
            let ty = y.map(tick);
            doc.line(left, ty, right, ty, "#e5e5e5", 1.0);
            doc.text(left - 6.0, ty + 4.0, 10.0, Anchor::End, &format_tick(tick));
        }
        for (k, &count) in h.counts.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let x0 = x.map(h.edges[k]);
            let x1 = x.map(h.edges[k + 1]);
            let yt = y.map(count as f64);
            doc.rect(x0 + 0.5, yt, x1 - x0 - 1.0, bottom - yt, series_color(i));
        }
        doc.line(left, bottom, right, bottom, "#444444", 1.0);
        doc.line(left, top, left, bottom, "#444444", 1.0);
        for tick in nice_ticks(lo, hi, 4) {
            doc.text(x.map(tick), bottom + 16.0, 10.0, Anchor::Middle, &format_tick(tick));
        }
        doc.text((left + right) / 2.0, bottom + 36.0, 11.0, Anchor::Middle, "Score");
    }
    doc.vertical_text(20.0, (top + bottom) / 2.0, 12.0, "Respondents");

    doc.finish()
}

#[cfg(test)]
#[path = "../../tests/src_inline/charts/histogram.rs"]
mod tests;
