use super::*;

#[test]
fn clamp_numeric_passes_in_range_values() {
    assert_eq!(clamp_numeric("3", 0.0, 10.0), Some(3.0));
}

#[test]
fn clamp_numeric_clamps_below_min_and_above_max() {
    assert_eq!(clamp_numeric("-2", 0.0, 10.0), Some(0.0));
    assert_eq!(clamp_numeric("99", 0.0, 10.0), Some(10.0));
}

#[test]
fn clamp_numeric_ignores_partial_input() {
    assert_eq!(clamp_numeric("", 0.0, 10.0), None);
    assert_eq!(clamp_numeric("-", 0.0, 10.0), None);
    assert_eq!(clamp_numeric("abc", 0.0, 10.0), None);
}

#[test]
fn clamp_numeric_rejects_non_finite_input() {
    assert_eq!(clamp_numeric("inf", 0.0, 10.0), None);
    assert_eq!(clamp_numeric("NaN", 0.0, 10.0), None);
}

#[test]
fn parse_or_falls_back_on_garbage() {
    assert!((parse_or("1850", 0.0) - 1850.0).abs() < f64::EPSILON);
    assert!((parse_or("", 7.0) - 7.0).abs() < f64::EPSILON);
    assert!((parse_or("x", 7.0) - 7.0).abs() < f64::EPSILON);
}
