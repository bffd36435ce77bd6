use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;
use thiserror::Error;

pub mod delimited;
pub mod remote;
pub mod source;
pub mod spreadsheet;

use delimited::parse_csv;
use source::{gunzip_reader, read_local};
use spreadsheet::parse_spreadsheet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Local(PathBuf),
    Remote(String),
}

impl InputSource {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            InputSource::Remote(trimmed.to_string())
        } else {
            InputSource::Local(PathBuf::from(trimmed))
        }
    }

    /// Name used for format detection: the URL path without query or
    /// fragment, or the local file name.
    pub fn file_name(&self) -> String {
        match self {
            InputSource::Local(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            InputSource::Remote(url) => {
                let end = url.find(['?', '#']).unwrap_or(url.len());
                let path = &url[..end];
                path.rsplit('/').next().unwrap_or_default().to_string()
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            InputSource::Local(path) => path.display().to_string(),
            InputSource::Remote(url) => url.clone(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            InputSource::Local(_) => "local",
            InputSource::Remote(_) => "remote",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Csv,
    CsvGz,
    Spreadsheet,
}

impl InputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            InputFormat::Csv => "csv",
            InputFormat::CsvGz => "csv-gz",
            InputFormat::Spreadsheet => "spreadsheet",
        }
    }
}

const SPREADSHEET_EXTENSIONS: &[&str] = &[".xlsx", ".xlsm", ".xlsb", ".xls", ".ods"];

pub fn detect_format(file_name: &str) -> Result<InputFormat, InputError> {
    let lower = file_name.to_ascii_lowercase();
    if lower.ends_with(".csv.gz") {
        return Ok(InputFormat::CsvGz);
    }
    if lower.ends_with(".csv") {
        return Ok(InputFormat::Csv);
    }
    if SPREADSHEET_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
        return Ok(InputFormat::Spreadsheet);
    }
    Err(InputError::InvalidInput(format!(
        "cannot infer dataset format from '{}' (use --format)",
        file_name
    )))
}

/// Raw survey rows: trimmed header names plus one string cell per column.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SurveyTable {
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    /// Likert ratings are parsed on demand; empty or non-numeric cells count
    /// as missing.
    pub fn numeric(&self, row: usize, col: usize) -> Option<f64> {
        let raw = self.cell(row, col).trim();
        if raw.is_empty() {
            return None;
        }
        raw.parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

#[derive(Debug, Clone)]
pub struct InputBundle {
    pub source: InputSource,
    pub format: InputFormat,
    pub n_bytes: usize,
    pub table: SurveyTable,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("missing column: {0}")]
    MissingColumn(String),
}

pub fn load_input(
    source: &InputSource,
    format: Option<InputFormat>,
    timeout: Duration,
) -> Result<InputBundle, InputError> {
    let format = match format {
        Some(f) => f,
        None => detect_format(&source.file_name())?,
    };

    let bytes = match source {
        InputSource::Local(path) => read_local(path)?,
        InputSource::Remote(url) => remote::fetch_bytes(url, timeout)?,
    };
    let n_bytes = bytes.len();
    tracing::debug!(
        source = %source.describe(),
        format = format.as_str(),
        n_bytes,
        "dataset bytes read"
    );

    let table = parse_bytes(bytes, format)?;
    if table.rows.is_empty() {
        return Err(InputError::InvalidInput("dataset is empty".to_string()));
    }

    Ok(InputBundle {
        source: source.clone(),
        format,
        n_bytes,
        table,
    })
}

fn parse_bytes(bytes: Vec<u8>, format: InputFormat) -> Result<SurveyTable, InputError> {
    match format {
        InputFormat::Csv => parse_csv(bytes.as_slice()),
        InputFormat::CsvGz => parse_csv(gunzip_reader(bytes)),
        InputFormat::Spreadsheet => parse_spreadsheet(bytes),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
