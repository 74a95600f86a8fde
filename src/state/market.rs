//! Market-overview state for the home page.

use crate::net::types::MarketOverview;

/// Home-page market overview, fetched once on load.
#[derive(Clone, Debug, Default)]
pub struct MarketState {
    /// Per-city stats, once loaded. `None` after a failed fetch shows the
    /// quiet placeholder.
    pub overview: Option<MarketOverview>,
    /// Whether the initial fetch is in flight.
    pub loading: bool,
}
