use crate::input::{SchemaError, SurveyTable};
use crate::items::ScoreDef;
use crate::items::loader::resolve_scores;
use crate::model::scores::{CompositeScores, ScoreSeries};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreAudit {
    pub score_id: String,
    pub n_items: usize,
    pub rows_all_missing: usize,
    pub rows_partial: usize,
}

#[derive(Debug)]
pub struct Stage2Output {
    pub scores: CompositeScores,
    pub audits: Vec<ScoreAudit>,
}

pub fn run_stage2(table: &SurveyTable, defs: &[ScoreDef]) -> Result<Stage2Output, SchemaError> {
    let resolved = resolve_scores(table, defs)?;
    let n_rows = table.n_rows();

    let mut series = Vec::with_capacity(resolved.len());
    let mut audits = Vec::with_capacity(resolved.len());

    for score in &resolved {
        let mut values = Vec::with_capacity(n_rows);
        let mut rows_all_missing = 0usize;
        let mut rows_partial = 0usize;

        for row in 0..n_rows {
            let mut sum = 0.0f64;
            let mut present = 0usize;
            for &col in &score.columns {
                if let Some(v) = table.numeric(row, col) {
                    sum += v;
                    present += 1;
                }
            }
            if present == 0 {
                rows_all_missing += 1;
                values.push(f64::NAN);
            } else {
                if present < score.columns.len() {
                    rows_partial += 1;
                }
                values.push(sum / present as f64);
            }
        }

        if rows_all_missing > 0 {
            tracing::warn!(
                score = %score.def.id,
                rows = rows_all_missing,
                "rows with every item missing; score is undefined for them"
            );
        }

        audits.push(ScoreAudit {
            score_id: score.def.id.clone(),
            n_items: score.columns.len(),
            rows_all_missing,
            rows_partial,
        });
        series.push(ScoreSeries {
            id: score.def.id.clone(),
            name: score.def.name.clone(),
            values,
        });
    }

    tracing::info!(n_scores = series.len(), n_rows, "composite scores computed");

    Ok(Stage2Output {
        scores: CompositeScores { n_rows, series },
        audits,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_scores.rs"]
mod tests;
