use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};

use crate::input::delimited::warn_duplicate_columns;
use crate::input::{InputError, SurveyTable};

/// Reads the first worksheet; the first non-empty row is the header.
/// Later rows are kept even when blank.
pub fn parse_spreadsheet(bytes: Vec<u8>) -> Result<SurveyTable, InputError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| InputError::InvalidInput("workbook has no worksheets".to_string()))??;

    let mut rows_iter = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect::<Vec<_>>())
        .skip_while(|row| row.iter().all(|c| c.is_empty()));

    let columns = rows_iter
        .next()
        .ok_or_else(|| InputError::Parse("worksheet is empty".to_string()))?;
    warn_duplicate_columns(&columns);

    // Blank data rows stay: they are respondents with every answer missing.
    let width = columns.len();
    let rows = rows_iter
        .map(|mut row| {
            row.resize(width, String::new());
            row
        })
        .collect();

    Ok(SurveyTable { columns, rows })
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string().trim().to_string(),
    }
}
