//! Wire DTOs for the property and valuation endpoints.
//!
//! DESIGN
//! ======
//! The snake_case JSON emitted by the backend is authoritative. A legacy
//! camelCase declaration of the valuation shape circulated alongside it;
//! fields whose camelCase twin is unambiguously the same datum carry a serde
//! alias so either spelling decodes. `yearlyAppreciation` is a different
//! statistic from `price_trend` and deliberately has no alias.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A listing as returned by `GET /api/properties`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertySummary {
    /// Unique listing identifier.
    pub id: String,
    /// Street address.
    pub address: String,
    /// Asking price in dollars.
    pub price: f64,
    /// Bedroom count.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub bedrooms: i64,
    /// Bathroom count; half-baths make this fractional.
    pub bathrooms: f64,
    /// Interior area in square feet.
    pub square_feet: f64,
    /// Marker latitude.
    pub latitude: f64,
    /// Marker longitude.
    pub longitude: f64,
}

/// A full listing record as returned by `GET /api/properties/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyDetail {
    /// Unique listing identifier.
    pub id: String,
    /// Street address.
    pub address: String,
    /// Asking price in dollars.
    pub price: f64,
    /// Bedroom count.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub bedrooms: i64,
    /// Bathroom count; half-baths make this fractional.
    pub bathrooms: f64,
    /// Interior area in square feet.
    pub square_feet: f64,
    /// Construction year.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub year_built: i64,
    /// Neighborhood name.
    pub neighborhood: String,
    /// City name (lowercase slug, e.g. `"toronto"`).
    pub city: String,
    /// Walkability index, 0-100.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub walk_score: i64,
}

/// Filters for the property search endpoint.
///
/// `query_string()` is the single place the request line is built so that
/// unchanged inputs always reproduce an identical request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    /// City slug (`"toronto"`, `"vancouver"`, `"ottawa"`).
    pub city: String,
    /// Property type filter (`"all"`, `"house"`, `"condo"`, ...).
    pub property_type: String,
    /// Upper price bound in dollars.
    pub max_price: u64,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            city: "toronto".to_owned(),
            property_type: "all".to_owned(),
            max_price: 1_000_000,
        }
    }
}

impl SearchQuery {
    /// Serialize the filters as `city=&type=&maxPrice=` in fixed order.
    ///
    /// Values are fixed UI tokens (city slugs, type slugs, an integer), so no
    /// percent-encoding is needed.
    pub fn query_string(&self) -> String {
        format!("city={}&type={}&maxPrice={}", self.city, self.property_type, self.max_price)
    }
}

/// Typed body for `POST /api/valuation`.
///
/// The fields mirror what the valuation model reads; unknown extras would be
/// ignored server-side, so nothing else is sent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValuationRequest {
    /// Subject property address (display only server-side).
    pub address: String,
    /// City slug.
    pub city: String,
    /// Property type slug.
    pub property_type: String,
    /// Bedroom count.
    pub bedrooms: f64,
    /// Bathroom count.
    pub bathrooms: f64,
    /// Interior area in square feet.
    pub square_feet: f64,
    /// Lot area in square feet.
    pub lot_size: f64,
    /// Construction year.
    pub year_built: f64,
}

/// Successful `POST /api/valuation` response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    /// Model estimate in dollars.
    #[serde(alias = "estimatedValue")]
    pub estimated_value: f64,
    /// Estimate reliability, 0-100 (opaque backend output).
    #[serde(alias = "confidence")]
    pub confidence_score: f64,
    /// Market context for the subject property's city.
    #[serde(alias = "marketTrends")]
    pub market_trends: MarketTrends,
    /// Recently sold properties used as evidence for the estimate.
    #[serde(default)]
    pub comparables: Vec<ComparableSale>,
}

/// Market context attached to a valuation result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketTrends {
    /// Recent price movement in percent; sign carries direction. Absent from
    /// the legacy shape, which reports yearly appreciation instead.
    #[serde(default)]
    pub price_trend: f64,
    /// Average days on market.
    #[serde(alias = "averageDaysOnMarket")]
    pub avg_days_on_market: f64,
    /// Average sale price per square foot.
    #[serde(alias = "pricePerSqft")]
    pub price_per_sqft: f64,
}

/// A previously sold property cited as valuation evidence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparableSale {
    /// Street address.
    pub address: String,
    /// Sale price in dollars.
    pub price: f64,
    /// ISO 8601 sale date.
    #[serde(alias = "soldDate")]
    pub sold_date: String,
    /// Interior area in square feet. The legacy shape omits this.
    #[serde(default)]
    pub square_feet: f64,
    /// Similarity to the subject property, 0-100.
    #[serde(alias = "similarity")]
    pub similarity_score: f64,
}

/// Error body accompanying a non-2xx response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable failure description.
    pub error: String,
}

/// Per-city market overview, keyed by city slug.
///
/// `BTreeMap` keeps the home-page card order stable across loads.
pub type MarketOverview = BTreeMap<String, CityStats>;

/// Aggregate market metrics for one city from `GET /api/market-stats`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CityStats {
    /// Average asking price across active listings.
    #[serde(default)]
    pub avg_price: f64,
    /// Active listing count.
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub total_listings: i64,
    /// Average days on market across active listings.
    #[serde(default)]
    pub avg_days_on_market: f64,
    /// Average price over trailing windows.
    #[serde(default)]
    pub price_trends: PriceTrends,
    /// Most active neighborhoods, busiest first.
    #[serde(default)]
    pub hot_neighborhoods: Vec<HotNeighborhood>,
}

/// Average listing price over trailing windows.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceTrends {
    /// Trailing 30 days.
    #[serde(default)]
    pub monthly: f64,
    /// Trailing 90 days.
    #[serde(default)]
    pub quarterly: f64,
    /// Trailing 365 days.
    #[serde(default)]
    pub yearly: f64,
}

/// Neighborhood activity summary inside a city overview.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HotNeighborhood {
    /// Neighborhood name; the aggregation key may be null for unlabeled listings.
    #[serde(rename = "_id")]
    pub neighborhood: Option<String>,
    /// Average asking price in the window.
    #[serde(default)]
    pub avg_price: f64,
    /// Listings in the window.
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub total_listings: i64,
    /// Average days on market in the window.
    #[serde(default)]
    pub avg_days_on_market: f64,
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
