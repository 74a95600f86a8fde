//! Result card for a completed valuation.

#[cfg(test)]
#[path = "valuation_result_test.rs"]
mod valuation_result_test;

use leptos::prelude::*;

use crate::net::types::{ComparableSale, ValuationResult};
use crate::util::format::{format_count, format_sold_date, format_sqft, format_usd};

/// CSS modifier for a signed trend value.
fn trend_class(price_trend: f64) -> &'static str {
    if price_trend >= 0.0 {
        "trend-value--positive"
    } else {
        "trend-value--negative"
    }
}

/// Direction arrow for a signed trend value.
fn trend_arrow(price_trend: f64) -> &'static str {
    if price_trend >= 0.0 { "\u{2191}" } else { "\u{2193}" }
}

/// `3.2%` with the sign carried by the arrow, not the number.
fn trend_text(price_trend: f64) -> String {
    format!("{}%", format_count(price_trend.abs()))
}

/// Estimate, confidence score, market trends, and comparables.
#[component]
pub fn ValuationResultCard(result: ValuationResult) -> impl IntoView {
    let trends = result.market_trends.clone();
    let confidence = format!("{}%", format_count(result.confidence_score));
    let score_style = format!("--score: {}%", format_count(result.confidence_score));

    view! {
        <div class="result-card">
            <div class="result-card__header">
                <h2>"Estimated Value"</h2>
                <div class="confidence-score">
                    <div class="confidence-score__circle" style=score_style>
                        <span>{confidence}</span>
                    </div>
                    <p>"Confidence Score"</p>
                </div>
            </div>

            <div class="result-card__estimate">{format_usd(result.estimated_value)}</div>

            <div class="market-trends">
                <h3>"Market Trends"</h3>
                <div class="market-trends__grid">
                    <div class="trend-item">
                        <span class="trend-item__label">"Price Trend"</span>
                        <span class=format!("trend-value {}", trend_class(trends.price_trend))>
                            {trend_arrow(trends.price_trend)}
                            " "
                            {trend_text(trends.price_trend)}
                        </span>
                    </div>
                    <div class="trend-item">
                        <span class="trend-item__label">"Days on Market"</span>
                        <span class="trend-value">{format!("{} days", format_count(trends.avg_days_on_market))}</span>
                    </div>
                    <div class="trend-item">
                        <span class="trend-item__label">"Price per Sq Ft"</span>
                        <span class="trend-value">{format_usd(trends.price_per_sqft)}</span>
                    </div>
                </div>
            </div>

            <div class="comparables">
                <h3>"Comparable Properties"</h3>
                <div class="comparables__list">
                    {result
                        .comparables
                        .iter()
                        .map(|comparable| comparable_row(comparable))
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}

fn comparable_row(comparable: &ComparableSale) -> impl IntoView + use<> {
    view! {
        <div class="comparable-item">
            <div class="comparable-item__header">
                <h4>{comparable.address.clone()}</h4>
                <span class="comparable-item__similarity">
                    {format!("{}% Match", format_count(comparable.similarity_score))}
                </span>
            </div>
            <div class="comparable-item__details">
                <span class="comparable-item__price">{format_usd(comparable.price)}</span>
                <span class="comparable-item__sold">{format!("Sold: {}", format_sold_date(&comparable.sold_date))}</span>
                <span class="comparable-item__size">{format_sqft(comparable.square_feet)}</span>
            </div>
        </div>
    }
}
