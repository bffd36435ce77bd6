use super::*;

#[test]
fn test_histogram_bins() {
    let h = histogram(&[1.0, 2.0, 2.0, 3.0, 5.0, f64::NAN], 4, 1.0, 5.0);
    assert_eq!(h.edges, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(h.counts, vec![1, 2, 1, 1]);
}

#[test]
fn test_histogram_degenerate_range() {
    let h = histogram(&[2.0, 2.0], 3, 2.0, 2.0);
    assert_eq!(h.counts, vec![2, 0, 0]);
}

#[test]
fn test_render_histograms_panels() {
    let series = vec![
        ScoreSeries {
            id: "a".to_string(),
            name: "Scarcity".to_string(),
            values: vec![1.0, 2.0, 4.5],
        },
        ScoreSeries {
            id: "b".to_string(),
            name: "Serendipity".to_string(),
            values: vec![3.0],
        },
    ];
    let svg = render_histograms(&series, 10, "Histograms");
    assert!(svg.contains(">Scarcity<"));
    assert!(svg.contains(">Serendipity<"));
    assert!(svg.contains("<rect"));
}
