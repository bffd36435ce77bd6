use thiserror::Error;

use crate::input::{InputError, SchemaError};
use crate::items::ConfigError;
use crate::pipeline::stage5_report::ReportError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to load dataset: {0}")]
    Input(#[from] InputError),
    #[error("dataset schema mismatch: {0}")]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
