use super::*;

#[test]
fn positive_trend_points_up() {
    assert_eq!(trend_class(3.2), "trend-value--positive");
    assert_eq!(trend_arrow(3.2), "\u{2191}");
}

#[test]
fn zero_trend_counts_as_positive() {
    assert_eq!(trend_class(0.0), "trend-value--positive");
    assert_eq!(trend_arrow(0.0), "\u{2191}");
}

#[test]
fn negative_trend_points_down_with_unsigned_text() {
    assert_eq!(trend_class(-2.5), "trend-value--negative");
    assert_eq!(trend_arrow(-2.5), "\u{2193}");
    assert_eq!(trend_text(-2.5), "2.5%");
}

#[test]
fn whole_trend_values_render_without_decimal() {
    assert_eq!(trend_text(3.0), "3%");
}
