//! Landing page with the per-city market overview.

use leptos::prelude::*;

use crate::net::types::CityStats;
use crate::state::market::MarketState;
use crate::util::format::{format_count, format_thousands, format_usd};

/// Home page: one stats card per city, fetched once on load.
/// A failed fetch logs and leaves a quiet placeholder.
#[component]
pub fn HomePage() -> impl IntoView {
    let market = expect_context::<RwSignal<MarketState>>();

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        load_market_overview(market);
    });

    view! {
        <div class="home-page">
            <h1>"MapleView"</h1>
            <p class="home-page__tagline">"Listings, market stats, and AI valuations for Canadian cities."</p>
            <nav class="home-page__nav">
                <a href="/map">"Browse the Map"</a>
                <a href="/valuation">"Get a Valuation"</a>
            </nav>
            <Show
                when=move || market.get().overview.is_some()
                fallback=move || {
                    view! {
                        <p class="home-page__placeholder">
                            {move || {
                                if market.get().loading { "Loading market stats..." } else { "Market stats unavailable." }
                            }}
                        </p>
                    }
                }
            >
                <div class="home-page__cards">
                    {move || {
                        market
                            .get()
                            .overview
                            .unwrap_or_default()
                            .into_iter()
                            .map(|(city, stats)| view! { <CityCard city=city stats=stats/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn CityCard(city: String, stats: CityStats) -> impl IntoView {
    let title = title_case(&city);
    let hoods = stats
        .hot_neighborhoods
        .iter()
        .filter_map(|hood| hood.neighborhood.clone())
        .collect::<Vec<_>>()
        .join(", ");
    let has_hoods = !hoods.is_empty();

    view! {
        <div class="city-card">
            <h3>{title}</h3>
            <p class="city-card__price">{format!("Avg price: {}", format_usd(stats.avg_price))}</p>
            <p>{format!("{} active listings", format_thousands(stats.total_listings))}</p>
            <p>{format!("{} avg days on market", format_count(stats.avg_days_on_market.round()))}</p>
            <p class="city-card__yearly">{format!("Yearly avg: {}", format_usd(stats.price_trends.yearly))}</p>
            <Show when=move || has_hoods>
                <p class="city-card__hoods">{format!("Hot neighborhoods: {hoods}")}</p>
            </Show>
        </div>
    }
}

fn title_case(city: &str) -> String {
    let mut chars = city.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn load_market_overview(market: RwSignal<MarketState>) {
    #[cfg(feature = "hydrate")]
    {
        market.update(|m| m.loading = true);
        leptos::task::spawn_local(async move {
            let overview = crate::net::api::fetch_market_overview().await;
            if overview.is_none() {
                log::error!("error loading market overview");
            }
            market.update(|m| {
                m.overview = overview;
                m.loading = false;
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = market;
    }
}
