//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{home::HomePage, map::MapPage, valuation::ValuationPage};
use crate::state::{detail::DetailState, market::MarketState, search::SearchState, valuation::ValuationState};

/// HTML shell rendered on the server for SSR + hydration. The Leaflet and
/// Chart.js widgets load from their CDN bundles here; the component bridges
/// assume both globals exist by the time effects run.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css"/>
                <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
                <script src="https://cdn.jsdelivr.net/npm/chart.js@4"></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let search = RwSignal::new(SearchState::default());
    let detail = RwSignal::new(DetailState::default());
    let valuation = RwSignal::new(ValuationState::default());
    let market = RwSignal::new(MarketState::default());

    provide_context(search);
    provide_context(detail);
    provide_context(valuation);
    provide_context(market);

    view! {
        <Stylesheet id="leptos" href="/pkg/mapleview.css"/>
        <Title text="MapleView"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("map") view=MapPage/>
                <Route path=StaticSegment("valuation") view=ValuationPage/>
            </Routes>
        </Router>
    }
}
