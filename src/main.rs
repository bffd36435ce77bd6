mod charts;
mod error;
mod input;
mod items;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::error::AppError;
use crate::input::{InputFormat, InputSource};
use crate::items::loader::load_score_defs;
use crate::items::{GENDER_COLUMN, INCOME_COLUMN, INCOME_LEVELS};
use crate::pipeline::stage1_load::{Stage1Params, run_stage1};
use crate::pipeline::stage2_scores::run_stage2;
use crate::pipeline::stage3_aggregate::{Stage3Inputs, run_stage3};
use crate::pipeline::stage4_charts::{Stage4Inputs, run_stage4};
use crate::pipeline::stage5_report::{Stage5Input, write_reports};

const DEFAULT_TITLE: &str = "TikTok Shopping Survey Dashboard";
const MAX_BINS: usize = 1000;

#[derive(Debug, Parser)]
#[command(
    name = "shopdash",
    version,
    about = "Scarcity/Serendipity scores and a static chart dashboard from a shopping survey"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load the dataset, score it and write the dashboard.
    Run(RunArgs),
}

#[derive(Debug, Clone, Args)]
struct RunArgs {
    /// Local path or http(s) URL of the survey CSV/spreadsheet.
    #[arg(long, env = "SHOPDASH_INPUT")]
    input: String,

    #[arg(long, env = "SHOPDASH_OUT", default_value = "dashboard")]
    out: PathBuf,

    /// Override format detection from the file extension.
    #[arg(long, value_enum, env = "SHOPDASH_FORMAT")]
    format: Option<InputFormat>,

    /// TOML file replacing the built-in score item lists.
    #[arg(long, env = "SHOPDASH_SCORES_CONFIG")]
    scores_config: Option<PathBuf>,

    #[arg(long, env = "SHOPDASH_GENDER_COLUMN", default_value = GENDER_COLUMN)]
    gender_column: String,

    #[arg(long, env = "SHOPDASH_INCOME_COLUMN", default_value = INCOME_COLUMN)]
    income_column: String,

    /// Histogram bin count (1 to 1000).
    #[arg(long, env = "SHOPDASH_BINS", default_value_t = 10)]
    bins: usize,

    #[arg(long, env = "SHOPDASH_TITLE", default_value = DEFAULT_TITLE)]
    title: String,

    /// Timeout for remote fetches.
    #[arg(long, env = "SHOPDASH_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,
}

#[derive(Debug, Clone)]
struct RunConfig {
    source: InputSource,
    out_dir: PathBuf,
    format: Option<InputFormat>,
    scores_config: Option<PathBuf>,
    gender_column: String,
    income_column: String,
    bins: usize,
    title: String,
    timeout: Duration,
}

impl TryFrom<RunArgs> for RunConfig {
    type Error = AppError;

    fn try_from(args: RunArgs) -> Result<Self, Self::Error> {
        if args.input.trim().is_empty() {
            return Err(AppError::InvalidArgument("--input is empty".to_string()));
        }
        if args.bins == 0 {
            return Err(AppError::InvalidArgument(
                "--bins must be at least 1".to_string(),
            ));
        }
        if args.bins > MAX_BINS {
            return Err(AppError::InvalidArgument(format!(
                "--bins must be at most {MAX_BINS}"
            )));
        }
        if args.timeout_secs == 0 {
            return Err(AppError::InvalidArgument(
                "--timeout-secs must be at least 1".to_string(),
            ));
        }
        Ok(RunConfig {
            source: InputSource::parse(&args.input),
            out_dir: args.out,
            format: args.format,
            scores_config: args.scores_config,
            gender_column: args.gender_column,
            income_column: args.income_column,
            bins: args.bins,
            title: args.title,
            timeout: Duration::from_secs(args.timeout_secs),
        })
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Run(args) => RunConfig::try_from(args).and_then(|config| run(&config)),
    };
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "run aborted");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Runs every stage in memory and writes output only once all succeeded.
fn run(config: &RunConfig) -> Result<Vec<PathBuf>, AppError> {
    let defs = load_score_defs(config.scores_config.as_deref())?;

    let bundle = run_stage1(&Stage1Params {
        source: config.source.clone(),
        format: config.format,
        timeout: config.timeout,
    })?;

    let stage2 = run_stage2(&bundle.table, &defs)?;
    for audit in &stage2.audits {
        tracing::debug!(
            score = %audit.score_id,
            items = audit.n_items,
            partial_rows = audit.rows_partial,
            missing_rows = audit.rows_all_missing,
            "score audit"
        );
    }

    let stage3 = run_stage3(&Stage3Inputs {
        table: &bundle.table,
        scores: &stage2.scores,
        gender_column: &config.gender_column,
        income_column: &config.income_column,
        income_levels: INCOME_LEVELS,
    })?;

    let charts = run_stage4(&Stage4Inputs {
        scores: &stage2.scores,
        aggregates: &stage3,
        bins: config.bins,
    });

    let written = write_reports(
        &Stage5Input {
            title: &config.title,
            bundle: &bundle,
            scores: &stage2.scores,
            aggregates: &stage3,
            charts: &charts,
            gender_column: &config.gender_column,
            income_column: &config.income_column,
            tool_name: env!("CARGO_PKG_NAME").to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        },
        &config.out_dir,
    )?;
    Ok(written)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
