use crate::charts::Chart;
use crate::charts::bar::{SeriesKey, render_grouped_bars};
use crate::charts::boxplot::render_box_plots;
use crate::charts::heatmap::render_heatmap;
use crate::charts::histogram::render_histograms;
use crate::model::scores::CompositeScores;
use crate::pipeline::stage3_aggregate::Stage3Output;

#[derive(Debug, Clone)]
pub struct Stage4Inputs<'a> {
    pub scores: &'a CompositeScores,
    pub aggregates: &'a Stage3Output,
    pub bins: usize,
}

/// Renders the fixed chart sequence: heatmap, bars by gender, bars by
/// income, box plots, histograms.
pub fn run_stage4(inputs: &Stage4Inputs<'_>) -> Vec<Chart> {
    let scores = inputs.scores;
    let agg = inputs.aggregates;
    let series_keys: Vec<SeriesKey> = scores
        .series
        .iter()
        .map(|s| (s.id.clone(), s.name.clone()))
        .collect();
    let joined = scores.names().join(" vs ");

    let mut charts = Vec::with_capacity(5);

    let title = format!("Correlation: {}", joined);
    charts.push(Chart {
        id: "correlation_heatmap",
        svg: render_heatmap(&agg.correlation, &title),
        title,
    });

    let title = format!("Mean scores by {}", agg.by_gender.column);
    charts.push(Chart {
        id: "scores_by_gender",
        svg: render_grouped_bars(&agg.by_gender, &series_keys, &title, &agg.by_gender.column),
        title,
    });

    let title = format!("Mean scores by {}", agg.by_income.column);
    charts.push(Chart {
        id: "scores_by_income",
        svg: render_grouped_bars(&agg.by_income, &series_keys, &title, &agg.by_income.column),
        title,
    });

    let title = format!("Distribution of {}", joined);
    charts.push(Chart {
        id: "score_box_plots",
        svg: render_box_plots(&scores.series, &title),
        title,
    });

    let title = format!("Histograms of {}", joined);
    charts.push(Chart {
        id: "score_histograms",
        svg: render_histograms(&scores.series, inputs.bins, &title),
        title,
    });

    tracing::info!(n_charts = charts.len(), "charts rendered");
    charts
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_charts.rs"]
mod tests;
