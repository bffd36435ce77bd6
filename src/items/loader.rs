use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;

use crate::input::{SchemaError, SurveyTable};
use crate::items::defs::builtin_scores;
use crate::items::mapping::require_column;
use crate::items::{ConfigError, ResolvedScore, ScoreDef};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScoreFile {
    scores: Vec<ScoreDef>,
}

pub fn default_score_defs() -> Vec<ScoreDef> {
    builtin_scores()
        .iter()
        .map(|def| ScoreDef {
            id: def.id.to_string(),
            name: def.name.to_string(),
            items: def.items.iter().map(|s| s.to_string()).collect(),
        })
        .collect()
}

pub fn load_score_defs(path: Option<&Path>) -> Result<Vec<ScoreDef>, ConfigError> {
    let Some(path) = path else {
        return Ok(default_score_defs());
    };
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let defs = parse_score_defs(&text, path)?;
    tracing::info!(
        path = %path.display(),
        n_scores = defs.len(),
        "loaded score definitions"
    );
    Ok(defs)
}

pub fn parse_score_defs(text: &str, path: &Path) -> Result<Vec<ScoreDef>, ConfigError> {
    let file: ScoreFile = toml::from_str(text).map_err(|source| ConfigError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    validate(&file.scores)?;
    Ok(file.scores)
}

fn validate(defs: &[ScoreDef]) -> Result<(), ConfigError> {
    if defs.is_empty() {
        return Err(ConfigError::Invalid("no scores defined".to_string()));
    }
    let mut ids = BTreeSet::new();
    for def in defs {
        if def.id.trim().is_empty() {
            return Err(ConfigError::Invalid("score id is empty".to_string()));
        }
        if !ids.insert(def.id.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "duplicate score id: {}",
                def.id
            )));
        }
        if def.items.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "score {} has no items",
                def.id
            )));
        }
    }
    Ok(())
}

pub fn resolve_scores(
    table: &SurveyTable,
    defs: &[ScoreDef],
) -> Result<Vec<ResolvedScore>, SchemaError> {
    let mut out = Vec::with_capacity(defs.len());
    for def in defs {
        let mut columns = Vec::with_capacity(def.items.len());
        for item in &def.items {
            columns.push(require_column(table, item)?);
        }
        out.push(ResolvedScore {
            def: def.clone(),
            columns,
        });
    }
    Ok(out)
}
