//! REST helpers for the property and valuation endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Search and detail failures degrade to `Err`/`None` so callers can log and
//! keep their previous state; only the valuation flow surfaces messages to
//! the user, so `request_valuation` extracts the server's `{error}` body.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{MarketOverview, PropertyDetail, PropertySummary, SearchQuery, ValuationRequest, ValuationResult};

/// Banner text for valuation failures with no usable server message.
pub const VALUATION_RETRY_MESSAGE: &str = "Failed to get valuation. Please try again.";

#[cfg(any(test, feature = "hydrate"))]
fn properties_endpoint(query: &SearchQuery) -> String {
    format!("/api/properties?{}", query.query_string())
}

#[cfg(any(test, feature = "hydrate"))]
fn property_endpoint(property_id: &str) -> String {
    format!("/api/properties/{property_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn search_failed_message(status: u16) -> String {
    format!("property search failed: {status}")
}

/// Fetch listings matching `query` from `GET /api/properties`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds
/// with a non-OK status, or the body is not a listing array. Callers log it;
/// the search flow has no user-visible error surface.
pub async fn fetch_properties(query: &SearchQuery) -> Result<Vec<PropertySummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = properties_endpoint(query);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(search_failed_message(resp.status()));
        }
        resp.json::<Vec<PropertySummary>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err("not available on server".to_owned())
    }
}

/// Fetch one listing from `GET /api/properties/{id}`.
/// Returns `None` on any failure or on the server.
pub async fn fetch_property_detail(property_id: &str) -> Option<PropertyDetail> {
    #[cfg(feature = "hydrate")]
    {
        let url = property_endpoint(property_id);
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<PropertyDetail>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = property_id;
        None
    }
}

/// Fetch the per-city market overview from `GET /api/market-stats`.
/// Returns `None` on any failure or on the server.
pub async fn fetch_market_overview() -> Option<MarketOverview> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/market-stats").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<MarketOverview>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Submit the valuation form via `POST /api/valuation`.
///
/// # Errors
///
/// Returns the server's `{error}` message on a non-OK response, or
/// [`VALUATION_RETRY_MESSAGE`] when the request or the body parse fails.
/// Either string is suitable for the timed error banner.
pub async fn request_valuation(request: &ValuationRequest) -> Result<ValuationResult, String> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::ApiErrorBody;

        let resp = gloo_net::http::Request::post("/api/valuation")
            .json(request)
            .map_err(|_| VALUATION_RETRY_MESSAGE.to_owned())?
            .send()
            .await
            .map_err(|_| VALUATION_RETRY_MESSAGE.to_owned())?;
        if !resp.ok() {
            let message = match resp.json::<ApiErrorBody>().await {
                Ok(body) if !body.error.is_empty() => body.error,
                _ => VALUATION_RETRY_MESSAGE.to_owned(),
            };
            return Err(message);
        }
        resp.json::<ValuationResult>()
            .await
            .map_err(|_| VALUATION_RETRY_MESSAGE.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}
