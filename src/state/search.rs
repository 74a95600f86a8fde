//! Search filters and results for the map view.
//!
//! DESIGN
//! ======
//! Rapid filter changes can complete out of order on the wire. Every issued
//! request gets a generation number from `begin_request`; a response is
//! applied only when its generation is still the newest, so a stale response
//! can never overwrite a fresher result set. Failures never touch the
//! previous results.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::net::types::{PropertySummary, SearchQuery};

/// Filters, results, and in-flight request tracking for the search view.
#[derive(Clone, Debug, Default)]
pub struct SearchState {
    /// Current control values.
    pub query: SearchQuery,
    /// Last successfully applied result set; drives markers and the list.
    pub properties: Vec<PropertySummary>,
    /// Whether the newest issued request is still in flight.
    pub loading: bool,
    /// Generation of the newest issued request.
    seq: u64,
}

impl SearchState {
    /// Record a newly issued request and return its generation token.
    pub fn begin_request(&mut self) -> u64 {
        self.seq += 1;
        self.loading = true;
        self.seq
    }

    /// Apply a successful response. Returns `false` (leaving the state
    /// untouched) when a newer request has been issued since `seq`.
    pub fn apply_results(&mut self, seq: u64, properties: Vec<PropertySummary>) -> bool {
        if seq != self.seq {
            return false;
        }
        self.properties = properties;
        self.loading = false;
        true
    }

    /// Record a failed request. Results are left as they were; only the
    /// loading flag clears, and only if no newer request superseded `seq`.
    pub fn fail_request(&mut self, seq: u64) {
        if seq == self.seq {
            self.loading = false;
        }
    }
}
