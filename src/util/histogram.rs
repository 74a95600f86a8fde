//! Comparable-price bucketing for the valuation histogram.
//!
//! DESIGN
//! ======
//! Five bins centered on the estimate, spanning estimate ± 20% with a bin
//! width of range / 4. For estimate `E` and comparable price `P` the bin is
//! `floor((P - E + 0.2 * E) / (0.05 * E))`; anything outside `[0, 4]` is
//! dropped, never clamped. Note the upper boundary: a comparable priced at
//! exactly `1.05 * E` computes index 5 and is dropped.

#[cfg(test)]
#[path = "histogram_test.rs"]
mod histogram_test;

use crate::net::types::ComparableSale;

/// Number of histogram bins.
pub const PRICE_BINS: usize = 5;

/// Bin index for a comparable price, or `None` when it falls outside the
/// estimate ± 20% window (or the estimate is degenerate).
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn bucket_index(estimated_value: f64, price: f64) -> Option<usize> {
    if !estimated_value.is_finite() || !price.is_finite() || estimated_value <= 0.0 {
        return None;
    }
    let range = estimated_value * 0.2;
    let step = range / 4.0;
    let index = ((price - estimated_value + range) / step).floor();
    if index >= 0.0 && index < PRICE_BINS as f64 {
        Some(index as usize)
    } else {
        None
    }
}

/// Count comparables per bin. Out-of-window prices are silently dropped.
pub fn price_distribution(estimated_value: f64, comparables: &[ComparableSale]) -> [u32; PRICE_BINS] {
    let mut bins = [0u32; PRICE_BINS];
    for comparable in comparables {
        if let Some(index) = bucket_index(estimated_value, comparable.price) {
            bins[index] += 1;
        }
    }
    bins
}

/// Axis labels at estimate + i * step for i in -2..=2, e.g. `$1.0M`.
pub fn bin_labels(estimated_value: f64) -> [String; PRICE_BINS] {
    let step = estimated_value * 0.2 / 4.0;
    std::array::from_fn(|i| {
        #[allow(clippy::cast_precision_loss)]
        let offset = (i as f64) - 2.0;
        let value = estimated_value + offset * step;
        format!("${:.1}M", value / 1_000_000.0)
    })
}
