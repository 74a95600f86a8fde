//! Detail-modal state for a single listing.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use crate::net::types::PropertyDetail;

/// Modal visibility plus the record it shows.
///
/// A failed detail fetch resets to the closed default: the original flow
/// gives the user no error surface here, it simply never opens the modal.
#[derive(Clone, Debug, Default)]
pub struct DetailState {
    /// Whether the overlay is visible.
    pub open: bool,
    /// Whether a detail fetch is in flight.
    pub loading: bool,
    /// The record being shown, once loaded.
    pub property: Option<PropertyDetail>,
    /// Whether the "viewing requests coming soon" notice is visible.
    pub viewing_notice: bool,
}

impl DetailState {
    /// Start loading a record for display.
    pub fn begin(&mut self) {
        self.open = true;
        self.loading = true;
        self.property = None;
        self.viewing_notice = false;
    }

    /// Show a loaded record, or close silently when the fetch failed.
    pub fn resolve(&mut self, property: Option<PropertyDetail>) {
        match property {
            Some(detail) => {
                self.loading = false;
                self.property = Some(detail);
            }
            None => *self = Self::default(),
        }
    }

    /// Hide the modal and drop the record.
    pub fn close(&mut self) {
        *self = Self::default();
    }
}
