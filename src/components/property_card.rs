//! Shared listing-summary renderer for the list panel and marker popups.
//!
//! DESIGN
//! ======
//! The list card and the map popup show the same four lines, so both feed
//! from `summary_lines`; the popup (built imperatively for Leaflet) and this
//! component cannot drift apart.

#[cfg(test)]
#[path = "property_card_test.rs"]
mod property_card_test;

use leptos::prelude::*;

use crate::net::types::PropertySummary;
use crate::util::format::{format_count, format_sqft, format_usd};

/// Pre-formatted display lines for a listing summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryLines {
    /// `$899,000`
    pub price: String,
    /// `3 beds • 2.5 baths`
    pub rooms: String,
    /// `1,850 sq ft`
    pub size: String,
}

/// Format the summary lines shared by cards and popups.
pub fn summary_lines(property: &PropertySummary) -> SummaryLines {
    SummaryLines {
        price: format_usd(property.price),
        rooms: format!(
            "{} beds \u{2022} {} baths",
            property.bedrooms,
            format_count(property.bathrooms)
        ),
        size: format_sqft(property.square_feet),
    }
}

/// One listing in the search results panel.
#[component]
pub fn PropertyCard(property: PropertySummary, on_details: Callback<String>) -> impl IntoView {
    let lines = summary_lines(&property);
    let id = property.id.clone();

    view! {
        <div class="property-card">
            <div class="property-card__content">
                <h3>{property.address.clone()}</h3>
                <p class="property-card__price">{lines.price}</p>
                <p>{lines.rooms}</p>
                <p>{lines.size}</p>
                <button class="btn property-card__details" on:click=move |_| on_details.run(id.clone())>
                    "View Details"
                </button>
            </div>
        </div>
    }
}
