use serde::Serialize;

pub mod html;
pub mod json;
pub mod text;

#[derive(Debug, Clone, Serialize)]
pub struct ScoreStats {
    pub id: String,
    pub name: String,
    pub count: usize,
    pub missing: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupMeanEntry {
    pub group: String,
    pub score: String,
    pub mean: f64,
    pub n: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupingSummary {
    pub column: String,
    pub order: String,
    pub rows: Vec<GroupMeanEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CorrelationSummary {
    pub labels: Vec<String>,
    pub matrix: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputSummary {
    pub source: String,
    pub kind: String,
    pub format: String,
    pub n_bytes: usize,
    pub n_rows: usize,
    pub n_columns: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub title: String,
    pub input: InputSummary,
    pub scores: Vec<ScoreStats>,
    pub groupings: Vec<GroupingSummary>,
    pub correlation: CorrelationSummary,
    pub charts: Vec<String>,
}

/// Headline numbers shown above the charts.
#[derive(Debug, Clone)]
pub struct MetricTile {
    pub label: String,
    pub value: String,
    pub help: String,
}

pub fn format_f64_4(v: f64) -> String {
    if v.is_nan() {
        "NA".to_string()
    } else {
        format!("{:.4}", v)
    }
}

pub fn format_f64_2(v: f64) -> String {
    if v.is_nan() {
        "NA".to_string()
    } else {
        format!("{:.2}", v)
    }
}

pub fn present(values: &[f64]) -> Vec<f64> {
    values.iter().copied().filter(|v| !v.is_nan()).collect()
}

/// Mean of the non-NaN values; NaN when none are present.
pub fn mean(values: &[f64]) -> f64 {
    let mut sum = 0.0f64;
    let mut n = 0usize;
    for &v in values {
        if v.is_nan() {
            continue;
        }
        sum += v;
        n += 1;
    }
    if n == 0 { f64::NAN } else { sum / n as f64 }
}

/// Sample standard deviation (n - 1) of the non-NaN values.
pub fn std_dev(values: &[f64]) -> f64 {
    let xs = present(values);
    if xs.len() < 2 {
        return f64::NAN;
    }
    let m = mean(&xs);
    let ss: f64 = xs.iter().map(|x| (x - m) * (x - m)).sum();
    (ss / (xs.len() - 1) as f64).sqrt()
}

pub fn sorted_present(values: &[f64]) -> Vec<f64> {
    let mut xs = present(values);
    xs.sort_by(|a, b| a.total_cmp(b));
    xs
}

/// Linear-interpolation quantile over an ascending slice.
pub fn quantile_linear(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let pos = (sorted.len() - 1) as f64 * p.clamp(0.0, 1.0);
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Pearson correlation over pairwise-complete observations.
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let mut pairs = Vec::with_capacity(xs.len().min(ys.len()));
    for (&x, &y) in xs.iter().zip(ys.iter()) {
        if !x.is_nan() && !y.is_nan() {
            pairs.push((x, y));
        }
    }
    if pairs.len() < 2 {
        return f64::NAN;
    }
    let n = pairs.len() as f64;
    let mx = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let my = pairs.iter().map(|p| p.1).sum::<f64>() / n;
    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (x, y) in pairs {
        sxy += (x - mx) * (y - my);
        sxx += (x - mx) * (x - mx);
        syy += (y - my) * (y - my);
    }
    if sxx == 0.0 || syy == 0.0 {
        return f64::NAN;
    }
    (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
