use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_mean_skips_nan() {
    assert!(close(mean(&[1.0, f64::NAN, 3.0]), 2.0));
    assert!(mean(&[f64::NAN, f64::NAN]).is_nan());
    assert!(mean(&[]).is_nan());
}

#[test]
fn test_quantile_linear() {
    let v = vec![1.0, 2.0, 3.0, 4.0];
    assert!(close(quantile_linear(&v, 0.25), 1.75));
    assert!(close(quantile_linear(&v, 0.5), 2.5));
    assert!(close(quantile_linear(&v, 1.0), 4.0));
    assert!(quantile_linear(&[], 0.5).is_nan());
}

#[test]
fn test_std_dev_sample() {
    assert!(close(std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]), 2.138089935299395));
    assert!(std_dev(&[1.0]).is_nan());
}

#[test]
fn test_pearson() {
    assert!(close(pearson(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]), 1.0));
    assert!(close(pearson(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]), -1.0));
    assert!(pearson(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).is_nan());
    assert!(close(
        pearson(&[1.0, 2.0, f64::NAN, 3.0], &[1.0, 2.0, 9.0, 3.0]),
        1.0
    ));
}

#[test]
fn test_format_nan() {
    assert_eq!(format_f64_4(f64::NAN), "NA");
    assert_eq!(format_f64_2(3.14159), "3.14");
}
