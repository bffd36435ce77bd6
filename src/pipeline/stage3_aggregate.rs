use std::collections::BTreeMap;

use crate::input::{SchemaError, SurveyTable};
use crate::items::mapping::require_column;
use crate::model::aggregate::{CorrelationMatrix, GroupMeanRow, GroupOrder, GroupedMeans};
use crate::model::scores::{CompositeScores, ScoreSeries};
use crate::report::{ScoreStats, mean, pearson, quantile_linear, sorted_present, std_dev};

#[derive(Debug, Clone)]
pub struct Stage3Inputs<'a> {
    pub table: &'a SurveyTable,
    pub scores: &'a CompositeScores,
    pub gender_column: &'a str,
    pub income_column: &'a str,
    pub income_levels: &'a [&'a str],
}

#[derive(Debug)]
pub struct Stage3Output {
    pub by_gender: GroupedMeans,
    pub by_income: GroupedMeans,
    pub correlation: CorrelationMatrix,
    pub stats: Vec<ScoreStats>,
}

pub fn run_stage3(inputs: &Stage3Inputs<'_>) -> Result<Stage3Output, SchemaError> {
    let by_gender = group_means(
        inputs.table,
        inputs.scores,
        inputs.gender_column,
        &GroupOrder::Alphabetical,
    )?;
    let by_income = group_means(
        inputs.table,
        inputs.scores,
        inputs.income_column,
        &GroupOrder::fixed(inputs.income_levels),
    )?;

    let labels = inputs.scores.names();
    let columns: Vec<&[f64]> = inputs
        .scores
        .series
        .iter()
        .map(|s| s.values.as_slice())
        .collect();
    let correlation = correlation_matrix(labels, &columns);

    let stats = inputs.scores.series.iter().map(describe).collect();

    tracing::info!(
        gender_groups = by_gender.groups.len(),
        income_groups = by_income.groups.len(),
        "aggregates computed"
    );

    Ok(Stage3Output {
        by_gender,
        by_income,
        correlation,
        stats,
    })
}

pub fn group_means(
    table: &SurveyTable,
    scores: &CompositeScores,
    column: &str,
    order: &GroupOrder,
) -> Result<GroupedMeans, SchemaError> {
    let col = require_column(table, column)?;

    let mut members: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for row in 0..table.n_rows() {
        let key = table.cell(row, col).trim();
        if key.is_empty() {
            continue;
        }
        members.entry(key.to_string()).or_default().push(row);
    }

    let observed: Vec<String> = members.keys().cloned().collect();
    let groups = order_groups(&observed, order, column);

    let mut rows = Vec::with_capacity(groups.len() * scores.series.len());
    for group in &groups {
        let idx = &members[group];
        for series in &scores.series {
            let values: Vec<f64> = idx.iter().map(|&i| series.values[i]).collect();
            rows.push(GroupMeanRow {
                group: group.clone(),
                score_id: series.id.clone(),
                score_name: series.name.clone(),
                mean: mean(&values),
                n: values.iter().filter(|v| !v.is_nan()).count(),
            });
        }
    }

    Ok(GroupedMeans {
        column: column.to_string(),
        order: order.clone(),
        groups,
        rows,
    })
}

/// `observed` must already be sorted ascending.
pub fn order_groups(observed: &[String], order: &GroupOrder, column: &str) -> Vec<String> {
    match order {
        GroupOrder::Alphabetical => observed.to_vec(),
        GroupOrder::Fixed(levels) => {
            let mut out: Vec<String> = levels
                .iter()
                .filter(|level| observed.contains(level))
                .cloned()
                .collect();
            for value in observed {
                if !levels.contains(value) {
                    tracing::warn!(
                        column,
                        value = %value,
                        "value outside the fixed level order; appended after known levels"
                    );
                    out.push(value.clone());
                }
            }
            out
        }
    }
}

pub fn correlation_matrix(labels: Vec<String>, columns: &[&[f64]]) -> CorrelationMatrix {
    let n = columns.len();
    let mut values = vec![vec![f64::NAN; n]; n];
    let usable: Vec<bool> = columns.iter().map(|c| has_variance(c)).collect();

    for i in 0..n {
        if !usable[i] {
            continue;
        }
        values[i][i] = 1.0;
        for j in (i + 1)..n {
            if !usable[j] {
                continue;
            }
            let r = pearson(columns[i], columns[j]);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    CorrelationMatrix { labels, values }
}

fn has_variance(values: &[f64]) -> bool {
    let xs = sorted_present(values);
    xs.len() >= 2 && xs[0] != xs[xs.len() - 1]
}

pub fn describe(series: &ScoreSeries) -> ScoreStats {
    let sorted = sorted_present(&series.values);
    ScoreStats {
        id: series.id.clone(),
        name: series.name.clone(),
        count: sorted.len(),
        missing: series.values.len() - sorted.len(),
        mean: mean(&sorted),
        std: std_dev(&sorted),
        min: sorted.first().copied().unwrap_or(f64::NAN),
        q1: quantile_linear(&sorted, 0.25),
        median: quantile_linear(&sorted, 0.5),
        q3: quantile_linear(&sorted, 0.75),
        max: sorted.last().copied().unwrap_or(f64::NAN),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_aggregate.rs"]
mod tests;
