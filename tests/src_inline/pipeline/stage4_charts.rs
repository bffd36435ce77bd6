use super::*;
use crate::input::delimited::parse_csv;
use crate::items::INCOME_LEVELS;
use crate::items::loader::default_score_defs;
use crate::pipeline::stage2_scores::run_stage2;
use crate::pipeline::stage3_aggregate::{Stage3Inputs, run_stage3};

const FIXTURE: &str = "\
gender,monthly_income,scarcity_limited_time,scarcity_limited_quantity,scarcity_flash_sale,scarcity_countdown,serendipity_unexpected_find,serendipity_surprise,serendipity_recommendation,serendipity_new_product,serendipity_pleasant_discovery
Female,RM100 - RM300,4,5,3,4,3,4,5,2,1
Male,Under RM100,2,2,3,1,5,5,4,4,2
Female,Over RM300,5,5,5,5,1,2,3,4,5
Male,RM100 - RM300,,4,,2,,,,,
Female,Under RM100,1,1,1,1,2,2,2,2,2
";

fn render() -> Vec<Chart> {
    let table = parse_csv(FIXTURE.as_bytes()).unwrap();
    let scores = run_stage2(&table, &default_score_defs()).unwrap().scores;
    let aggregates = run_stage3(&Stage3Inputs {
        table: &table,
        scores: &scores,
        gender_column: "gender",
        income_column: "monthly_income",
        income_levels: INCOME_LEVELS,
    })
    .unwrap();
    run_stage4(&Stage4Inputs {
        scores: &scores,
        aggregates: &aggregates,
        bins: 5,
    })
}

#[test]
fn test_fixed_chart_sequence() {
    let charts = render();
    let ids: Vec<&str> = charts.iter().map(|c| c.id).collect();
    assert_eq!(
        ids,
        vec![
            "correlation_heatmap",
            "scores_by_gender",
            "scores_by_income",
            "score_box_plots",
            "score_histograms",
        ]
    );
    assert_eq!(charts[0].title, "Correlation: Scarcity vs Serendipity");
    assert_eq!(charts[2].title, "Mean scores by monthly_income");
}

#[test]
fn test_charts_are_titled_svg() {
    for chart in render() {
        assert!(chart.svg.starts_with("<svg"), "{}", chart.id);
        assert!(chart.svg.trim_end().ends_with("</svg>"), "{}", chart.id);
        assert!(chart.svg.contains(&chart.title), "{}", chart.id);
    }
}

#[test]
fn test_income_bars_follow_level_order() {
    let charts = render();
    let svg = &charts[2].svg;
    let under = svg.find(">Under RM100<").unwrap();
    let mid = svg.find(">RM100 - RM300<").unwrap();
    let over = svg.find(">Over RM300<").unwrap();
    assert!(under < mid && mid < over);
}

#[test]
fn test_deterministic_output() {
    let a = render();
    let b = render();
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.svg, y.svg);
    }
}
