//! Bridge component between valuation results and the external Chart.js
//! widget.
//!
//! DESIGN
//! ======
//! `chart_config` builds the whole Chart.js configuration as plain JSON so
//! the bar data and labels stay unit-testable; the hydrate-only effect turns
//! it into a JS object and owns the widget lifecycle, destroying the previous
//! chart before each redraw.

#[cfg(test)]
#[path = "valuation_chart_test.rs"]
mod valuation_chart_test;

use leptos::prelude::*;

use crate::net::types::ComparableSale;
use crate::state::valuation::ValuationState;
use crate::util::histogram::{bin_labels, price_distribution};

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

/// Minimal binding to the global `Chart` constructor.
#[cfg(feature = "hydrate")]
mod chartjs {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        pub type Chart;

        #[wasm_bindgen(constructor, js_class = "Chart")]
        pub fn new(canvas: &web_sys::HtmlCanvasElement, config: &JsValue) -> Chart;

        #[wasm_bindgen(method)]
        pub fn destroy(this: &Chart);
    }
}

/// Chart.js configuration for the comparable-price histogram.
pub fn chart_config(estimated_value: f64, comparables: &[ComparableSale]) -> serde_json::Value {
    serde_json::json!({
        "type": "bar",
        "data": {
            "labels": bin_labels(estimated_value),
            "datasets": [{
                "label": "Price Distribution",
                "data": price_distribution(estimated_value, comparables),
                "backgroundColor": "rgba(37, 99, 235, 0.5)",
                "borderColor": "rgba(37, 99, 235, 1)",
                "borderWidth": 1
            }]
        },
        "options": {
            "responsive": true,
            "plugins": {
                "legend": { "display": false }
            },
            "scales": {
                "y": {
                    "beginAtZero": true,
                    "ticks": { "stepSize": 1 }
                }
            }
        }
    })
}

/// Canvas host for the histogram; redraws on every new result.
#[component]
pub fn ValuationChart() -> impl IntoView {
    let valuation = expect_context::<RwSignal<ValuationState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    {
        let chart: Rc<RefCell<Option<chartjs::Chart>>> = Rc::new(RefCell::new(None));

        let chart_handle = Rc::clone(&chart);
        Effect::new(move || {
            // Track the sequence so identical payloads still redraw.
            let _seq = valuation.with(|v| v.result_seq);
            let Some(result) = valuation.with(|v| v.result.clone()) else {
                return;
            };
            let Some(canvas) = canvas_ref.get() else {
                return;
            };

            if let Some(previous) = chart_handle.borrow_mut().take() {
                previous.destroy();
            }

            let config = chart_config(result.estimated_value, &result.comparables);
            let Ok(config) = js_sys::JSON::parse(&config.to_string()) else {
                return;
            };
            *chart_handle.borrow_mut() = Some(chartjs::Chart::new(&canvas, &config));
        });

        let cleanup_chart = Rc::clone(&chart);
        on_cleanup(move || {
            if let Some(previous) = cleanup_chart.borrow_mut().take() {
                previous.destroy();
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = valuation;
    }

    view! {
        <div class="valuation-chart">
            <canvas node_ref=canvas_ref></canvas>
        </div>
    }
}
