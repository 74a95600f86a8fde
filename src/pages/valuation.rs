//! Valuation page: attribute form, result card, histogram, error banner.
//!
//! ERROR HANDLING
//! ==============
//! This is the only flow with a user-visible error surface. A failed
//! submission raises a banner that auto-dismisses after
//! [`ERROR_BANNER_MS`](crate::state::valuation::ERROR_BANNER_MS); the dismiss
//! timer carries the banner generation so it can never hide a newer banner.

use leptos::prelude::*;

use crate::components::valuation_chart::ValuationChart;
use crate::components::valuation_form::ValuationForm;
use crate::components::valuation_result::ValuationResultCard;
use crate::net::types::ValuationRequest;
use crate::state::valuation::ValuationState;

/// Valuation page with form, timed error banner, and result panel.
#[component]
pub fn ValuationPage() -> impl IntoView {
    let valuation = expect_context::<RwSignal<ValuationState>>();

    let on_submit = Callback::new(move |request: ValuationRequest| {
        submit_valuation(valuation, request);
    });

    view! {
        <div class="valuation-page">
            <h1>"AI Property Valuation"</h1>
            <ValuationForm on_submit=on_submit/>
            <Show when=move || valuation.get().error.is_some()>
                <div class="valuation-page__error">
                    {move || valuation.get().error.unwrap_or_default()}
                </div>
            </Show>
            <Show when=move || valuation.get().result.is_some()>
                <div class="valuation-page__result" id="valuation-result">
                    {move || {
                        valuation
                            .get()
                            .result
                            .map(|result| view! { <ValuationResultCard result=result/> })
                    }}
                    <ValuationChart/>
                </div>
            </Show>
        </div>
    }
}

/// Submit the form. The pending flag (and with it the control label) clears
/// on both outcomes; success scrolls the result panel into view, failure
/// raises the timed banner.
fn submit_valuation(valuation: RwSignal<ValuationState>, request: ValuationRequest) {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::valuation::ERROR_BANNER_MS;

        valuation.update(ValuationState::begin_submit);
        leptos::task::spawn_local(async move {
            match crate::net::api::request_valuation(&request).await {
                Ok(result) => {
                    valuation.update(|v| v.finish_success(result));
                    scroll_result_into_view();
                }
                Err(message) => {
                    let mut seq = 0;
                    valuation.update(|v| seq = v.finish_error(message));
                    leptos::task::spawn_local(async move {
                        gloo_timers::future::sleep(std::time::Duration::from_millis(ERROR_BANNER_MS)).await;
                        valuation.update(|v| {
                            v.dismiss_error(seq);
                        });
                    });
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (valuation, request);
    }
}

#[cfg(feature = "hydrate")]
fn scroll_result_into_view() {
    if let Some(document) = web_sys::window().and_then(|w| w.document())
        && let Some(panel) = document.get_element_by_id("valuation-result")
    {
        panel.scroll_into_view();
    }
}
