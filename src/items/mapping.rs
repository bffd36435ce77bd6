use crate::input::{SchemaError, SurveyTable};

/// Exact header match first, then an ASCII case-insensitive match.
pub fn map_column(table: &SurveyTable, name: &str) -> Option<usize> {
    let wanted = name.trim();
    if let Some(idx) = table.columns.iter().position(|c| c == wanted) {
        return Some(idx);
    }
    let idx = table
        .columns
        .iter()
        .position(|c| c.eq_ignore_ascii_case(wanted))?;
    tracing::debug!(
        wanted,
        found = %table.columns[idx],
        "column matched case-insensitively"
    );
    Some(idx)
}

pub fn require_column(table: &SurveyTable, name: &str) -> Result<usize, SchemaError> {
    map_column(table, name).ok_or_else(|| SchemaError::MissingColumn(name.trim().to_string()))
}
