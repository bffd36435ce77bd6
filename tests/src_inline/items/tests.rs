use std::path::Path;

use super::ScoreDef;
use super::loader::{default_score_defs, parse_score_defs, resolve_scores};
use super::mapping::map_column;
use super::*;
use crate::input::delimited::parse_csv;
use crate::input::SchemaError;

#[test]
fn test_builtin_definitions() {
    let defs = default_score_defs();
    assert_eq!(defs.len(), 2);
    assert_eq!(defs[0].id, "scarcity");
    assert_eq!(defs[0].items.len(), 4);
    assert_eq!(defs[1].id, "serendipity");
    assert_eq!(defs[1].items.len(), 5);
}

#[test]
fn test_income_levels_literal_order() {
    assert_eq!(INCOME_LEVELS, &["Under RM100", "RM100 - RM300", "Over RM300"]);
}

#[test]
fn test_parse_score_file() {
    let text = r#"
[[scores]]
id = "scarcity"
name = "Scarcity"
items = ["a", "b"]

[[scores]]
id = "serendipity"
name = "Serendipity"
items = ["c"]
"#;
    let defs = parse_score_defs(text, Path::new("scores.toml")).unwrap();
    assert_eq!(
        defs[0],
        ScoreDef {
            id: "scarcity".to_string(),
            name: "Scarcity".to_string(),
            items: vec!["a".to_string(), "b".to_string()],
        }
    );
    assert_eq!(defs[1].items, vec!["c"]);
}

#[test]
fn test_duplicate_ids_rejected() {
    let text = r#"
[[scores]]
id = "x"
name = "X"
items = ["a"]

[[scores]]
id = "x"
name = "Y"
items = ["b"]
"#;
    let err = parse_score_defs(text, Path::new("s.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_empty_items_rejected() {
    let text = "[[scores]]\nid = \"x\"\nname = \"X\"\nitems = []\n";
    let err = parse_score_defs(text, Path::new("s.toml")).unwrap_err();
    assert_eq!(err.to_string(), "invalid score config: score x has no items");
}

#[test]
fn test_unknown_keys_rejected() {
    let text = "weights = 1\n[[scores]]\nid = \"x\"\nname = \"X\"\nitems = [\"a\"]\n";
    let err = parse_score_defs(text, Path::new("s.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Toml { .. }));
}

#[test]
fn test_map_column_case_insensitive() {
    let table = parse_csv("Gender,Q1\nFemale,3\n".as_bytes()).unwrap();
    assert_eq!(map_column(&table, "Gender"), Some(0));
    assert_eq!(map_column(&table, "gender"), Some(0));
    assert_eq!(map_column(&table, "q2"), None);
}

#[test]
fn test_resolve_reports_missing_column() {
    let table = parse_csv("a,b\n1,2\n".as_bytes()).unwrap();
    let defs = vec![ScoreDef {
        id: "s".to_string(),
        name: "S".to_string(),
        items: vec!["a".to_string(), "c".to_string()],
    }];
    let err = resolve_scores(&table, &defs).unwrap_err();
    assert_eq!(err, SchemaError::MissingColumn("c".to_string()));
}
