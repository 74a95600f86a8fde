//! Scrollable results panel beside the map.

use leptos::prelude::*;

use crate::components::property_card::PropertyCard;
use crate::state::search::SearchState;

/// List of the current search results.
///
/// Rebuilt from the same record set that drives the markers, so the panel
/// and the map can never disagree about what matched.
#[component]
pub fn PropertyList(on_details: Callback<String>) -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();

    view! {
        <div class="property-list">
            <Show
                when=move || !search.get().loading || !search.get().properties.is_empty()
                fallback=move || view! { <p class="property-list__loading">"Loading properties..."</p> }
            >
                <Show when=move || search.get().properties.is_empty()>
                    <p class="property-list__empty">"No properties match the current filters."</p>
                </Show>
                {move || {
                    search
                        .get()
                        .properties
                        .into_iter()
                        .map(|property| {
                            view! { <PropertyCard property=property on_details=on_details/> }
                        })
                        .collect::<Vec<_>>()
                }}
            </Show>
        </div>
    }
}
