use super::*;

#[test]
fn test_box_summary_with_outlier() {
    let b = box_summary(&[3.0, 1.0, 100.0, 2.0, 4.0, f64::NAN]).unwrap();
    assert_eq!(b.q1, 2.0);
    assert_eq!(b.median, 3.0);
    assert_eq!(b.q3, 4.0);
    assert_eq!(b.lower_whisker, 1.0);
    assert_eq!(b.upper_whisker, 4.0);
    assert_eq!(b.outliers, vec![100.0]);
}

#[test]
fn test_box_summary_empty() {
    assert!(box_summary(&[f64::NAN]).is_none());
}

#[test]
fn test_render_box_plots_names() {
    let series = vec![
        ScoreSeries {
            id: "scarcity".to_string(),
            name: "Scarcity".to_string(),
            values: vec![1.0, 2.0, 3.0],
        },
        ScoreSeries {
            id: "serendipity".to_string(),
            name: "Serendipity".to_string(),
            values: vec![f64::NAN],
        },
    ];
    let svg = render_box_plots(&series, "Distribution");
    assert!(svg.contains(">Scarcity<"));
    assert!(svg.contains(">Serendipity<"));
    assert!(svg.contains(">Distribution<"));
}
