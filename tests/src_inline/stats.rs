use super::*;

#[test]
fn test_quantile_linear_interpolation() {
    let v = vec![1.0, 2.0, 3.0, 4.0];
    // pos = 3 * 0.25 = 0.75
    assert!((quantile(&v, 0.25).unwrap() - 1.75).abs() < 1e-12);
    assert!((quantile(&v, 0.75).unwrap() - 3.25).abs() < 1e-12);
    assert_eq!(quantile(&v, 0.0), Some(1.0));
    assert_eq!(quantile(&v, 1.0), Some(4.0));
}

#[test]
fn test_quantile_ignores_input_order() {
    let v = vec![5.0, 1.0, 4.0, 2.0, 3.0];
    assert_eq!(quantile(&v, 0.5), Some(3.0));
}

#[test]
fn test_median_even_and_odd() {
    assert_eq!(median(&[1.0, 2.0, 3.0, 4.0, 5.0]), Some(3.0));
    assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
    assert_eq!(median(&[7.0]), Some(7.0));
    assert_eq!(median(&[]), None);
}
