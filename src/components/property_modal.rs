//! Detail modal overlay for a single listing.

use leptos::prelude::*;

use crate::net::types::PropertyDetail;
use crate::state::detail::DetailState;
use crate::util::format::{format_count, format_sqft, format_usd};

/// Modal overlay showing the full record for one listing.
///
/// Clicking the backdrop or the close control hides it; clicks inside the
/// content stop propagation so they never reach the backdrop.
#[component]
pub fn PropertyModal() -> impl IntoView {
    let detail = expect_context::<RwSignal<DetailState>>();

    let close = move |_| detail.update(DetailState::close);

    view! {
        <Show when=move || detail.get().open>
            <div class="modal-backdrop" on:click=close>
                <div class="modal" on:click=move |ev| ev.stop_propagation()>
                    <button class="modal__close" on:click=close>
                        "\u{00d7}"
                    </button>
                    <Show
                        when=move || detail.get().property.is_some()
                        fallback=move || view! { <p class="modal__loading">"Loading..."</p> }
                    >
                        {move || detail.get().property.map(|property| view! { <DetailBody property=property/> })}
                    </Show>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn DetailBody(property: PropertyDetail) -> impl IntoView {
    let detail = expect_context::<RwSignal<DetailState>>();

    let on_request_viewing = move |_| detail.update(|d| d.viewing_notice = true);

    view! {
        <div class="property-details">
            <h2>{property.address.clone()}</h2>
            <p class="property-details__price">{format_usd(property.price)}</p>
            <div class="property-details__grid">
                <div>
                    <h4>"Property Details"</h4>
                    <p>{format!("{} bedrooms", property.bedrooms)}</p>
                    <p>{format!("{} bathrooms", format_count(property.bathrooms))}</p>
                    <p>{format_sqft(property.square_feet)}</p>
                    <p>{format!("Built in {}", property.year_built)}</p>
                </div>
                <div>
                    <h4>"Location Info"</h4>
                    <p>{property.neighborhood.clone()}</p>
                    <p>{property.city.clone()}</p>
                    <p>{format!("Walk Score: {}", property.walk_score)}</p>
                </div>
            </div>
            <button class="btn property-details__viewing" on:click=on_request_viewing>
                "Request Viewing"
            </button>
            <Show when=move || detail.get().viewing_notice>
                <p class="property-details__notice">"Viewing requests are coming soon."</p>
            </Show>
        </div>
    }
}
