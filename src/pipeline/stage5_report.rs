use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::charts::Chart;
use crate::input::{InputBundle, SurveyTable};
use crate::items::mapping::map_column;
use crate::model::aggregate::GroupedMeans;
use crate::model::scores::CompositeScores;
use crate::pipeline::stage3_aggregate::Stage3Output;
use crate::report::html::render_dashboard_html;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{
    CorrelationSummary, GroupMeanEntry, GroupingSummary, InputSummary, MetricTile, SummaryData,
    ToolMeta, format_f64_2,
};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize summary: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct Stage5Input<'a> {
    pub title: &'a str,
    pub bundle: &'a InputBundle,
    pub scores: &'a CompositeScores,
    pub aggregates: &'a Stage3Output,
    pub charts: &'a [Chart],
    pub gender_column: &'a str,
    pub income_column: &'a str,
    pub tool_name: String,
    pub tool_version: String,
}

/// Everything the run writes, rendered in memory before touching disk.
#[derive(Debug, Clone)]
pub struct RenderedReports {
    pub files: Vec<(PathBuf, String)>,
}

pub fn render_reports(input: &Stage5Input<'_>) -> Result<RenderedReports, ReportError> {
    let summary = build_summary(input);
    let tiles = build_tiles(input);

    let mut files = Vec::with_capacity(input.charts.len() + 4);
    files.push((
        PathBuf::from("dashboard.html"),
        render_dashboard_html(input.title, &tiles, input.charts),
    ));
    for (i, chart) in input.charts.iter().enumerate() {
        files.push((
            Path::new("charts").join(format!("{:02}_{}.svg", i + 1, chart.id)),
            chart.svg.clone(),
        ));
    }
    files.push((
        PathBuf::from("scores.tsv"),
        render_scores_tsv(
            &input.bundle.table,
            input.scores,
            input.gender_column,
            input.income_column,
        ),
    ));
    files.push((PathBuf::from("summary.json"), render_summary_json(&summary)?));
    files.push((PathBuf::from("report.txt"), render_report_text(&summary)));

    Ok(RenderedReports { files })
}

/// Renders every file first, so a render failure writes nothing. Files are
/// then written one by one; an I/O error partway through leaves the files
/// already written in place.
pub fn write_reports(input: &Stage5Input<'_>, out_dir: &Path) -> Result<Vec<PathBuf>, ReportError> {
    let rendered = render_reports(input)?;
    let mut written = Vec::with_capacity(rendered.files.len());
    for (rel, contents) in &rendered.files {
        let path = out_dir.join(rel);
        write_text(&path, contents).map_err(|source| ReportError::Io {
            path: path.clone(),
            source,
        })?;
        written.push(path);
    }
    tracing::info!(
        out_dir = %out_dir.display(),
        n_files = written.len(),
        "reports written"
    );
    Ok(written)
}

pub fn build_summary(input: &Stage5Input<'_>) -> SummaryData {
    let table = &input.bundle.table;
    let agg = input.aggregates;
    SummaryData {
        tool: ToolMeta {
            name: input.tool_name.clone(),
            version: input.tool_version.clone(),
        },
        title: input.title.to_string(),
        input: InputSummary {
            source: input.bundle.source.describe(),
            kind: input.bundle.source.kind().to_string(),
            format: input.bundle.format.as_str().to_string(),
            n_bytes: input.bundle.n_bytes,
            n_rows: table.n_rows(),
            n_columns: table.columns.len(),
        },
        scores: agg.stats.clone(),
        groupings: vec![grouping_summary(&agg.by_gender), grouping_summary(&agg.by_income)],
        correlation: CorrelationSummary {
            labels: agg.correlation.labels.clone(),
            matrix: agg.correlation.values.clone(),
        },
        charts: input.charts.iter().map(|c| c.title.clone()).collect(),
    }
}

fn grouping_summary(grouped: &GroupedMeans) -> GroupingSummary {
    GroupingSummary {
        column: grouped.column.clone(),
        order: grouped.order.label().to_string(),
        rows: grouped
            .rows
            .iter()
            .map(|r| GroupMeanEntry {
                group: r.group.clone(),
                score: r.score_name.clone(),
                mean: r.mean,
                n: r.n,
            })
            .collect(),
    }
}

pub fn build_tiles(input: &Stage5Input<'_>) -> Vec<MetricTile> {
    let mut tiles = vec![MetricTile {
        label: "Respondents".to_string(),
        value: input.bundle.table.n_rows().to_string(),
        help: "Rows loaded from the dataset".to_string(),
    }];
    for stats in &input.aggregates.stats {
        tiles.push(MetricTile {
            label: format!("Mean {}", stats.name),
            value: format_f64_2(stats.mean),
            help: format!("{} respondents with a {} score", stats.count, stats.name),
        });
    }
    let corr = &input.aggregates.correlation;
    if corr.size() >= 2 {
        tiles.push(MetricTile {
            label: format!("r({}, {})", corr.labels[0], corr.labels[1]),
            value: format_f64_2(corr.get(0, 1)),
            help: "Pearson correlation, pairwise complete".to_string(),
        });
    }
    tiles
}

pub fn render_scores_tsv(
    table: &SurveyTable,
    scores: &CompositeScores,
    gender_column: &str,
    income_column: &str,
) -> String {
    let gender = map_column(table, gender_column);
    let income = map_column(table, income_column);

    let mut out = String::new();
    let mut header = vec![
        "row".to_string(),
        gender_column.to_string(),
        income_column.to_string(),
    ];
    header.extend(scores.series.iter().map(|s| s.id.clone()));
    out.push_str(&header.join("\t"));
    out.push('\n');

    for row in 0..scores.n_rows {
        let mut fields = vec![
            (row + 1).to_string(),
            tsv_field(gender.map(|c| table.cell(row, c)).unwrap_or("")),
            tsv_field(income.map(|c| table.cell(row, c)).unwrap_or("")),
        ];
        for s in &scores.series {
            let v = s.values[row];
            fields.push(if v.is_nan() {
                "NA".to_string()
            } else {
                format!("{:.6}", v)
            });
        }
        out.push_str(&fields.join("\t"));
        out.push('\n');
    }
    out
}

fn tsv_field(s: &str) -> String {
    s.replace(['\t', '\n', '\r'], " ")
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
