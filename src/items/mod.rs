use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

pub mod defs;
pub mod loader;
pub mod mapping;

pub use defs::{GENDER_COLUMN, INCOME_COLUMN, INCOME_LEVELS};

/// A composite score: the row-wise mean of `items`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScoreDef {
    pub id: String,
    pub name: String,
    pub items: Vec<String>,
}

/// A score definition bound to table column indices.
#[derive(Debug, Clone)]
pub struct ResolvedScore {
    pub def: ScoreDef,
    pub columns: Vec<usize>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read score config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse score config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid score config: {0}")]
    Invalid(String),
}

#[cfg(test)]
#[path = "../../tests/src_inline/items/tests.rs"]
mod tests;
