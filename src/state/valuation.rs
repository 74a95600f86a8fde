//! Valuation form/result state and the timed error banner.
//!
//! DESIGN
//! ======
//! The banner auto-dismisses after [`ERROR_BANNER_MS`]. Each `finish_error`
//! bumps a generation counter and the dismiss timer captures it, so an old
//! timer firing late can never hide a banner raised by a newer failure.

#[cfg(test)]
#[path = "valuation_test.rs"]
mod valuation_test;

use crate::net::types::ValuationResult;

/// How long the error banner stays visible.
pub const ERROR_BANNER_MS: u64 = 5000;

/// Pending flag, latest result, and error-banner state for the valuation flow.
#[derive(Clone, Debug, Default)]
pub struct ValuationState {
    /// Whether a submission is in flight; disables the submit control and
    /// swaps its label while set.
    pub pending: bool,
    /// Most recent successful result.
    pub result: Option<ValuationResult>,
    /// Bumped on every success so chart redraw and scroll effects re-run
    /// even when the payload is identical.
    pub result_seq: u64,
    /// Error banner text, when visible.
    pub error: Option<String>,
    error_seq: u64,
}

impl ValuationState {
    /// Mark a submission as in flight.
    pub fn begin_submit(&mut self) {
        self.pending = true;
    }

    /// Record a successful valuation. Always clears the pending flag.
    pub fn finish_success(&mut self, result: ValuationResult) {
        self.pending = false;
        self.result = Some(result);
        self.result_seq += 1;
    }

    /// Record a failed valuation and show the banner. Always clears the
    /// pending flag. Returns the banner generation for the dismiss timer.
    pub fn finish_error(&mut self, message: String) -> u64 {
        self.pending = false;
        self.error = Some(message);
        self.error_seq += 1;
        self.error_seq
    }

    /// Hide the banner if `seq` is still the current generation. A stale
    /// timer is a no-op. Returns whether the banner was hidden.
    pub fn dismiss_error(&mut self, seq: u64) -> bool {
        if seq != self.error_seq {
            return false;
        }
        self.error = None;
        true
    }
}
