use super::*;
use crate::input::delimited::parse_csv;
use crate::items::INCOME_LEVELS;
use crate::items::loader::default_score_defs;
use crate::pipeline::stage2_scores::run_stage2;

const FIXTURE: &str = "\
gender,monthly_income,scarcity_limited_time,scarcity_limited_quantity,scarcity_flash_sale,scarcity_countdown,serendipity_unexpected_find,serendipity_surprise,serendipity_recommendation,serendipity_new_product,serendipity_pleasant_discovery
Female,RM100 - RM300,4,5,3,4,3,4,5,2,1
Male,Under RM100,2,2,3,1,5,5,4,4,2
Female,Over RM300,5,5,5,5,1,2,3,4,5
Male,RM100 - RM300,,4,,2,,,,,
Female,Under RM100,1,1,1,1,2,2,2,2,2
";

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

fn fixture() -> (SurveyTable, CompositeScores) {
    let table = parse_csv(FIXTURE.as_bytes()).unwrap();
    let scores = run_stage2(&table, &default_score_defs()).unwrap().scores;
    (table, scores)
}

fn run(table: &SurveyTable, scores: &CompositeScores) -> Stage3Output {
    run_stage3(&Stage3Inputs {
        table,
        scores,
        gender_column: "gender",
        income_column: "monthly_income",
        income_levels: INCOME_LEVELS,
    })
    .unwrap()
}

#[test]
fn test_gender_groups_alphabetical_means() {
    let (table, scores) = fixture();
    let out = run(&table, &scores);
    let g = &out.by_gender;
    assert_eq!(g.groups, vec!["Female", "Male"]);
    assert!(close(g.mean_of("Female", "scarcity").unwrap(), 10.0 / 3.0));
    assert!(close(g.mean_of("Female", "serendipity").unwrap(), 8.0 / 3.0));
    assert!(close(g.mean_of("Male", "scarcity").unwrap(), 2.5));
    assert!(close(g.mean_of("Male", "serendipity").unwrap(), 4.0));

    let male_serendipity = g
        .rows
        .iter()
        .find(|r| r.group == "Male" && r.score_id == "serendipity")
        .unwrap();
    assert_eq!(male_serendipity.n, 1);
}

#[test]
fn test_long_form_row_order() {
    let (table, scores) = fixture();
    let out = run(&table, &scores);
    let keys: Vec<(&str, &str)> = out
        .by_gender
        .rows
        .iter()
        .map(|r| (r.group.as_str(), r.score_id.as_str()))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("Female", "scarcity"),
            ("Female", "serendipity"),
            ("Male", "scarcity"),
            ("Male", "serendipity"),
        ]
    );
}

#[test]
fn test_income_fixed_order_and_means() {
    let (table, scores) = fixture();
    let out = run(&table, &scores);
    let g = &out.by_income;
    assert_eq!(g.groups, vec!["Under RM100", "RM100 - RM300", "Over RM300"]);
    assert_eq!(g.order.label(), "fixed");
    assert!(close(g.mean_of("Under RM100", "scarcity").unwrap(), 1.5));
    assert!(close(g.mean_of("RM100 - RM300", "scarcity").unwrap(), 3.5));
    assert!(close(g.mean_of("RM100 - RM300", "serendipity").unwrap(), 3.0));
    assert!(close(g.mean_of("Over RM300", "scarcity").unwrap(), 5.0));
}

#[test]
fn test_income_order_independent_of_row_order() {
    let mut lines: Vec<&str> = FIXTURE.lines().collect();
    let header = lines.remove(0);
    lines.reverse();
    let reversed = format!("{}\n{}\n", header, lines.join("\n"));
    let table = parse_csv(reversed.as_bytes()).unwrap();
    let scores = run_stage2(&table, &default_score_defs()).unwrap().scores;
    let out = run(&table, &scores);
    assert_eq!(
        out.by_income.groups,
        vec!["Under RM100", "RM100 - RM300", "Over RM300"]
    );
}

#[test]
fn test_unknown_levels_appended_and_absent_levels_omitted() {
    let observed = vec![
        "Above RM1000".to_string(),
        "Over RM300".to_string(),
        "Under RM100".to_string(),
        "Unspecified".to_string(),
    ];
    let ordered = order_groups(&observed, &GroupOrder::fixed(INCOME_LEVELS), "monthly_income");
    assert_eq!(
        ordered,
        vec!["Under RM100", "Over RM300", "Above RM1000", "Unspecified"]
    );
}

#[test]
fn test_blank_group_values_skipped() {
    let table = parse_csv("gender,s\nFemale,3\n,5\nMale,1\n".as_bytes()).unwrap();
    let scores = CompositeScores {
        n_rows: 3,
        series: vec![ScoreSeries {
            id: "s".to_string(),
            name: "S".to_string(),
            values: vec![3.0, 5.0, 1.0],
        }],
    };
    let g = group_means(&table, &scores, "gender", &GroupOrder::Alphabetical).unwrap();
    assert_eq!(g.groups, vec!["Female", "Male"]);
}

#[test]
fn test_missing_group_column() {
    let (table, scores) = fixture();
    let err = group_means(&table, &scores, "age", &GroupOrder::Alphabetical).unwrap_err();
    assert_eq!(err, SchemaError::MissingColumn("age".to_string()));
}

#[test]
fn test_two_column_correlation_matrix() {
    let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
    let ys = [2.0, 1.0, 4.0, 3.0, 5.0];
    let m = correlation_matrix(vec!["a".to_string(), "b".to_string()], &[&xs, &ys]);
    assert_eq!(m.size(), 2);
    assert_eq!(m.get(0, 0), 1.0);
    assert_eq!(m.get(1, 1), 1.0);
    assert_eq!(m.get(0, 1), m.get(1, 0));
    assert!(close(m.get(0, 1), 0.8));
}

#[test]
fn test_constant_column_has_nan_row() {
    let xs = [3.0, 3.0, 3.0];
    let ys = [1.0, 2.0, 3.0];
    let m = correlation_matrix(vec!["a".to_string(), "b".to_string()], &[&xs, &ys]);
    assert!(m.get(0, 0).is_nan());
    assert!(m.get(0, 1).is_nan());
    assert_eq!(m.get(1, 1), 1.0);
}

#[test]
fn test_describe() {
    let (table, scores) = fixture();
    let out = run(&table, &scores);
    let s = &out.stats[1];
    assert_eq!(s.id, "serendipity");
    assert_eq!(s.count, 4);
    assert_eq!(s.missing, 1);
    assert!(close(s.mean, 3.0));
    assert!(close(s.min, 2.0));
    assert!(close(s.median, 3.0));
    assert!(close(s.q1, 2.75));
    assert!(close(s.q3, 3.25));
    assert!(close(s.max, 4.0));
}
