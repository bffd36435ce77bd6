use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::input::InputError;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("shopdash_stage1_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_stage1_loads_local_csv() {
    let dir = make_temp_dir();
    let path = dir.join("survey.csv");
    fs::write(&path, "gender,monthly_income\nFemale,Under RM100\n").unwrap();

    let bundle = run_stage1(&Stage1Params {
        source: InputSource::Local(path),
        format: None,
        timeout: Duration::from_secs(5),
    })
    .unwrap();
    assert_eq!(bundle.table.columns, vec!["gender", "monthly_income"]);
    assert_eq!(bundle.table.cell(0, 1), "Under RM100");
}

#[test]
fn test_stage1_unreachable_url() {
    let result = run_stage1(&Stage1Params {
        source: InputSource::parse("http://127.0.0.1:9/arts_df_exported.csv"),
        format: None,
        timeout: Duration::from_secs(5),
    });
    assert!(matches!(result, Err(InputError::Http(_))));
}

#[test]
fn test_stage1_malformed_url_fails() {
    let result = run_stage1(&Stage1Params {
        source: InputSource::Remote("http://[not-a-host/survey.csv".to_string()),
        format: None,
        timeout: Duration::from_secs(5),
    });
    assert!(result.is_err());
}
