//! Property-attribute form for the valuation flow.

use leptos::prelude::*;

use crate::net::types::ValuationRequest;
use crate::state::valuation::ValuationState;
use crate::util::cities::CITIES;
use crate::util::form::{clamp_numeric, parse_or};

const PROPERTY_TYPES: [(&str, &str); 3] = [("house", "House"), ("condo", "Condo"), ("townhouse", "Townhouse")];

/// Attribute form. Numeric fields clamp to their bounds as the user types;
/// submit builds a typed [`ValuationRequest`] and hands it to the page. The
/// submit control disables and reads "Analyzing..." while a request is
/// pending, and always returns to its original label afterwards.
#[component]
pub fn ValuationForm(on_submit: Callback<ValuationRequest>) -> impl IntoView {
    let valuation = expect_context::<RwSignal<ValuationState>>();

    let address = RwSignal::new(String::new());
    let city = RwSignal::new("toronto".to_owned());
    let property_type = RwSignal::new("house".to_owned());
    let bedrooms = RwSignal::new("3".to_owned());
    let bathrooms = RwSignal::new("2".to_owned());
    let square_feet = RwSignal::new("1500".to_owned());
    let lot_size = RwSignal::new("3000".to_owned());
    let year_built = RwSignal::new("2000".to_owned());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if valuation.get_untracked().pending {
            return;
        }
        on_submit.run(ValuationRequest {
            address: address.get_untracked().trim().to_owned(),
            city: city.get_untracked(),
            property_type: property_type.get_untracked(),
            bedrooms: parse_or(&bedrooms.get_untracked(), 0.0),
            bathrooms: parse_or(&bathrooms.get_untracked(), 0.0),
            square_feet: parse_or(&square_feet.get_untracked(), 0.0),
            lot_size: parse_or(&lot_size.get_untracked(), 0.0),
            year_built: parse_or(&year_built.get_untracked(), 2000.0),
        });
    };

    view! {
        <form class="valuation-form" on:submit=submit>
            <label class="valuation-form__field">
                "Address"
                <input
                    type="text"
                    placeholder="12 King St W"
                    prop:value=move || address.get()
                    on:input=move |ev| address.set(event_target_value(&ev))
                />
            </label>
            <label class="valuation-form__field">
                "City"
                <select prop:value=move || city.get() on:change=move |ev| city.set(event_target_value(&ev))>
                    {CITIES
                        .into_iter()
                        .map(|(slug, label)| view! { <option value=slug>{label}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <label class="valuation-form__field">
                "Property Type"
                <select
                    prop:value=move || property_type.get()
                    on:change=move |ev| property_type.set(event_target_value(&ev))
                >
                    {PROPERTY_TYPES
                        .into_iter()
                        .map(|(slug, label)| view! { <option value=slug>{label}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <NumberField label="Bedrooms" value=bedrooms min=0.0 max=20.0/>
            <NumberField label="Bathrooms" value=bathrooms min=0.0 max=20.0/>
            <NumberField label="Square Feet" value=square_feet min=100.0 max=50_000.0/>
            <NumberField label="Lot Size (sq ft)" value=lot_size min=0.0 max=500_000.0/>
            <NumberField label="Year Built" value=year_built min=1850.0 max=2030.0/>
            <button class="btn btn--primary valuation-form__submit" type="submit" disabled=move || valuation.get().pending>
                {move || if valuation.get().pending { "Analyzing..." } else { "Get Valuation" }}
            </button>
        </form>
    }
}

/// Numeric input that clamps out-of-range values back into `[min, max]` as
/// the user types, leaving partial input (empty, `-`) alone.
#[component]
fn NumberField(label: &'static str, value: RwSignal<String>, min: f64, max: f64) -> impl IntoView {
    let on_input = move |ev| {
        let raw = event_target_value(&ev);
        match clamp_numeric(&raw, min, max) {
            Some(clamped) if clamped.to_string() != raw.trim() => value.set(clamped.to_string()),
            _ => value.set(raw),
        }
    };

    view! {
        <label class="valuation-form__field">
            {label}
            <input
                type="number"
                min=min.to_string()
                max=max.to_string()
                prop:value=move || value.get()
                on:input=on_input
            />
        </label>
    }
}
