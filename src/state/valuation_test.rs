use super::*;
use crate::net::types::MarketTrends;

fn result() -> ValuationResult {
    ValuationResult {
        estimated_value: 1_000_000.0,
        confidence_score: 87.0,
        market_trends: MarketTrends {
            price_trend: 3.2,
            avg_days_on_market: 18.0,
            price_per_sqft: 712.0,
        },
        comparables: Vec::new(),
    }
}

#[test]
fn banner_duration_is_five_seconds() {
    assert_eq!(ERROR_BANNER_MS, 5000);
}

#[test]
fn pending_clears_on_success() {
    let mut state = ValuationState::default();
    state.begin_submit();
    assert!(state.pending);
    state.finish_success(result());
    assert!(!state.pending);
    assert!(state.result.is_some());
}

#[test]
fn pending_clears_on_failure() {
    let mut state = ValuationState::default();
    state.begin_submit();
    state.finish_error("Valuation failed".to_owned());
    assert!(!state.pending);
    assert_eq!(state.error.as_deref(), Some("Valuation failed"));
}

#[test]
fn result_seq_advances_on_every_success() {
    let mut state = ValuationState::default();
    state.finish_success(result());
    let first = state.result_seq;
    state.finish_success(result());
    assert!(state.result_seq > first);
}

#[test]
fn dismiss_with_current_generation_hides_banner() {
    let mut state = ValuationState::default();
    let seq = state.finish_error("oops".to_owned());
    assert!(state.dismiss_error(seq));
    assert!(state.error.is_none());
}

#[test]
fn stale_dismiss_does_not_hide_newer_banner() {
    let mut state = ValuationState::default();
    let old = state.finish_error("first".to_owned());
    let _new = state.finish_error("second".to_owned());
    assert!(!state.dismiss_error(old));
    assert_eq!(state.error.as_deref(), Some("second"));
}

#[test]
fn banner_is_reshowable_after_dismiss() {
    let mut state = ValuationState::default();
    let seq = state.finish_error("first".to_owned());
    assert!(state.dismiss_error(seq));
    let seq = state.finish_error("second".to_owned());
    assert_eq!(state.error.as_deref(), Some("second"));
    assert!(state.dismiss_error(seq));
}
