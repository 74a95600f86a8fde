//! Search/map page: filters, markers, results list, and the detail modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the listing browse route. Every filter change re-issues the
//! search; responses carry the generation token from `SearchState`, so a
//! stale response can never overwrite fresher results. Search and detail
//! failures are logged only; the user keeps whatever was on screen.

use leptos::prelude::*;

use crate::components::map_host::MapHost;
use crate::components::property_list::PropertyList;
use crate::components::property_modal::PropertyModal;
use crate::components::search_panel::SearchPanel;
use crate::state::detail::DetailState;
use crate::state::search::SearchState;

/// Map page with search controls, marker map, list panel, and detail modal.
#[component]
pub fn MapPage() -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();
    let detail = expect_context::<RwSignal<DetailState>>();

    let run_search = Callback::new(move |()| load_properties(search));

    // Initial load once on mount.
    let requested_initial = RwSignal::new(false);
    Effect::new(move || {
        if requested_initial.get() {
            return;
        }
        requested_initial.set(true);
        run_search.run(());
    });

    let on_details = Callback::new(move |property_id: String| {
        open_property_details(detail, &property_id);
    });

    view! {
        <div class="map-page">
            <SearchPanel on_change=run_search/>
            <div class="map-page__body">
                <MapHost on_details=on_details/>
                <PropertyList on_details=on_details/>
            </div>
            <PropertyModal/>
        </div>
    }
}

/// Issue a property search for the current filters. The response is applied
/// only if no newer request has been issued in the meantime.
fn load_properties(search: RwSignal<SearchState>) {
    #[cfg(feature = "hydrate")]
    {
        let mut seq = 0;
        let mut query = None;
        search.update(|s| {
            seq = s.begin_request();
            query = Some(s.query.clone());
        });
        let Some(query) = query else {
            return;
        };
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_properties(&query).await {
                Ok(properties) => {
                    search.update(|s| {
                        s.apply_results(seq, properties);
                    });
                }
                Err(e) => {
                    log::error!("error loading properties: {e}");
                    search.update(|s| s.fail_request(seq));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = search;
    }
}

/// Fetch one listing and open the modal, or close it silently on failure.
fn open_property_details(detail: RwSignal<DetailState>, property_id: &str) {
    #[cfg(feature = "hydrate")]
    {
        detail.update(DetailState::begin);
        let property_id = property_id.to_owned();
        leptos::task::spawn_local(async move {
            let property = crate::net::api::fetch_property_detail(&property_id).await;
            if property.is_none() {
                log::error!("error loading property details for {property_id}");
            }
            detail.update(|d| d.resolve(property));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (detail, property_id);
    }
}
