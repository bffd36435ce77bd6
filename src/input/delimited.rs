use std::io::Read;

use csv::{ReaderBuilder, Trim};

use crate::input::{InputError, SurveyTable};

pub fn parse_csv<R: Read>(reader: R) -> Result<SurveyTable, InputError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .trim(Trim::All)
        .from_reader(reader);

    let columns: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();
    if columns.iter().all(|c| c.is_empty()) {
        return Err(InputError::Parse("dataset header is empty".to_string()));
    }
    warn_duplicate_columns(&columns);

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(|f| f.to_string()).collect());
    }

    Ok(SurveyTable { columns, rows })
}

pub(crate) fn warn_duplicate_columns(columns: &[String]) {
    let mut seen = std::collections::BTreeSet::new();
    for name in columns {
        if !name.is_empty() && !seen.insert(name.as_str()) {
            tracing::warn!(column = %name, "duplicate column in header; keeping first");
        }
    }
}
