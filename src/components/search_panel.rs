//! City / type / max-price controls for the search view.

use leptos::prelude::*;

use crate::state::search::SearchState;
use crate::util::cities::CITIES;
use crate::util::format::format_usd;

const PROPERTY_TYPES: [(&str, &str); 4] = [
    ("all", "All Types"),
    ("house", "House"),
    ("condo", "Condo"),
    ("townhouse", "Townhouse"),
];

const PRICE_MIN: u64 = 100_000;
const PRICE_MAX: u64 = 5_000_000;
const PRICE_STEP: u64 = 50_000;

#[allow(clippy::cast_precision_loss)]
fn price_label_text(max_price: u64) -> String {
    format_usd(max_price as f64)
}

/// Search controls. Every change writes the query into [`SearchState`] and
/// fires `on_change` so the page re-issues the request.
#[component]
pub fn SearchPanel(on_change: Callback<()>) -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();

    let price_label = move || price_label_text(search.get().query.max_price);

    let on_city = move |ev| {
        search.update(|s| s.query.city = event_target_value(&ev));
        on_change.run(());
    };
    let on_type = move |ev| {
        search.update(|s| s.query.property_type = event_target_value(&ev));
        on_change.run(());
    };
    // `input` updates the label live while dragging; the request only goes
    // out on `change`, when the slider is released.
    let on_price_input = move |ev| {
        if let Ok(price) = event_target_value(&ev).parse::<u64>() {
            search.update(|s| s.query.max_price = price);
        }
    };
    let on_price_change = move |_| on_change.run(());

    view! {
        <div class="search-panel">
            <label class="search-panel__field">
                "City"
                <select prop:value=move || search.get().query.city on:change=on_city>
                    {CITIES
                        .into_iter()
                        .map(|(slug, label)| view! { <option value=slug>{label}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <label class="search-panel__field">
                "Property Type"
                <select prop:value=move || search.get().query.property_type on:change=on_type>
                    {PROPERTY_TYPES
                        .into_iter()
                        .map(|(slug, label)| view! { <option value=slug>{label}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <label class="search-panel__field search-panel__field--range">
                "Max Price"
                <input
                    type="range"
                    min=PRICE_MIN.to_string()
                    max=PRICE_MAX.to_string()
                    step=PRICE_STEP.to_string()
                    prop:value=move || search.get().query.max_price.to_string()
                    on:input=on_price_input
                    on:change=on_price_change
                />
                <span class="search-panel__price-label">{price_label}</span>
            </label>
        </div>
    }
}
