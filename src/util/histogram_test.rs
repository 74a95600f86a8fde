use super::*;

fn comparable(price: f64) -> ComparableSale {
    ComparableSale {
        address: "1 Test Ln".to_owned(),
        price,
        sold_date: "2024-01-05".to_owned(),
        square_feet: 1000.0,
        similarity_score: 90.0,
    }
}

// =============================================================
// bucket_index
// =============================================================

#[test]
fn price_at_lower_window_edge_lands_in_first_bin() {
    // P = E - 0.2E => numerator 0 => index 0.
    assert_eq!(bucket_index(1_000_000.0, 800_000.0), Some(0));
}

#[test]
fn price_at_estimate_lands_in_last_bin() {
    // diff 0, range 200k, step 50k => floor(200k / 50k) = 4.
    assert_eq!(bucket_index(1_000_000.0, 1_000_000.0), Some(4));
}

#[test]
fn price_five_percent_above_estimate_is_dropped() {
    // Boundary regression: diff 50k, range 200k, step 50k => index 5, out of range.
    assert_eq!(bucket_index(1_000_000.0, 1_050_000.0), None);
}

#[test]
fn price_far_below_window_is_dropped() {
    assert_eq!(bucket_index(1_000_000.0, 500_000.0), None);
}

#[test]
fn interior_prices_map_to_expected_bins() {
    assert_eq!(bucket_index(1_000_000.0, 850_000.0), Some(1));
    assert_eq!(bucket_index(1_000_000.0, 900_000.0), Some(2));
    assert_eq!(bucket_index(1_000_000.0, 950_000.0), Some(3));
}

#[test]
fn degenerate_estimates_never_panic() {
    assert_eq!(bucket_index(0.0, 500_000.0), None);
    assert_eq!(bucket_index(-1.0, 500_000.0), None);
    assert_eq!(bucket_index(f64::NAN, 500_000.0), None);
    assert_eq!(bucket_index(1_000_000.0, f64::INFINITY), None);
}

// =============================================================
// price_distribution
// =============================================================

#[test]
fn distribution_counts_per_bin_and_drops_outliers() {
    let comparables = vec![
        comparable(800_000.0),   // bin 0
        comparable(850_000.0),   // bin 1
        comparable(860_000.0),   // bin 1
        comparable(1_000_000.0), // bin 4
        comparable(1_050_000.0), // dropped
        comparable(2_000_000.0), // dropped
    ];
    assert_eq!(price_distribution(1_000_000.0, &comparables), [1, 2, 0, 0, 1]);
}

#[test]
fn distribution_of_no_comparables_is_all_zero() {
    assert_eq!(price_distribution(1_000_000.0, &[]), [0; PRICE_BINS]);
}

// =============================================================
// bin_labels
// =============================================================

#[test]
fn labels_center_on_the_estimate() {
    let labels = bin_labels(1_000_000.0);
    assert_eq!(labels[0], "$0.9M");
    assert_eq!(labels[2], "$1.0M");
    assert_eq!(labels[4], "$1.1M");
}

#[test]
fn labels_scale_with_the_estimate() {
    let labels = bin_labels(2_000_000.0);
    assert_eq!(labels[0], "$1.8M");
    assert_eq!(labels[4], "$2.2M");
}
