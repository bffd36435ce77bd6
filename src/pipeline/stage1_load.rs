use std::time::Duration;

use crate::input::{InputBundle, InputError, InputFormat, InputSource, load_input};

#[derive(Debug, Clone)]
pub struct Stage1Params {
    pub source: InputSource,
    pub format: Option<InputFormat>,
    pub timeout: Duration,
}

pub fn run_stage1(params: &Stage1Params) -> Result<InputBundle, InputError> {
    tracing::info!(
        source = %params.source.describe(),
        kind = params.source.kind(),
        "loading survey dataset"
    );
    let bundle = load_input(&params.source, params.format, params.timeout)?;
    tracing::info!(
        format = bundle.format.as_str(),
        n_rows = bundle.table.n_rows(),
        n_columns = bundle.table.columns.len(),
        "dataset loaded"
    );
    Ok(bundle)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_load.rs"]
mod tests;
