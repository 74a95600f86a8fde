//! Bridge component between Leptos state and the external Leaflet map.
//!
//! ARCHITECTURE
//! ============
//! Leaflet owns the tile layer and marker rendering; this host owns an
//! explicit view-state (map handle plus the live marker set) and maps
//! search-state changes into widget calls. Marker sets are fully replaced on
//! every successful load, so a failed request leaves the previous markers on
//! screen. Popup content is built as DOM nodes with listeners attached
//! explicitly, never as interpolated HTML strings.

use leptos::prelude::*;

use crate::state::search::SearchState;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

#[cfg(feature = "hydrate")]
use crate::components::property_card::summary_lines;
#[cfg(feature = "hydrate")]
use crate::net::types::PropertySummary;
#[cfg(feature = "hydrate")]
use crate::util::cities::{CITY_ZOOM, city_center};

/// Minimal bindings to the parts of Leaflet this view uses.
#[cfg(feature = "hydrate")]
mod leaflet {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        pub type Map;
        pub type TileLayer;
        pub type Marker;

        #[wasm_bindgen(js_namespace = L, js_name = map)]
        pub fn new_map(container: &web_sys::HtmlElement) -> Map;

        #[wasm_bindgen(method, js_name = setView)]
        pub fn set_view(this: &Map, center: &JsValue, zoom: f64);

        #[wasm_bindgen(method)]
        pub fn remove(this: &Map);

        #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
        pub fn new_tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

        #[wasm_bindgen(method, js_name = addTo)]
        pub fn add_to(this: &TileLayer, map: &Map);

        #[wasm_bindgen(js_namespace = L, js_name = marker)]
        pub fn new_marker(lat_lng: &JsValue) -> Marker;

        #[wasm_bindgen(method, js_name = addTo)]
        pub fn add_to_map(this: &Marker, map: &Map);

        #[wasm_bindgen(method, js_name = bindPopup)]
        pub fn bind_popup(this: &Marker, content: &web_sys::Element);

        #[wasm_bindgen(method)]
        pub fn remove(this: &Marker);
    }
}

#[cfg(feature = "hydrate")]
const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
#[cfg(feature = "hydrate")]
const TILE_ATTRIBUTION: &str = "\u{00a9} OpenStreetMap contributors";

/// Map handle and the marker set currently on it. Popup button closures live
/// exactly as long as their markers.
#[cfg(feature = "hydrate")]
struct MapView {
    map: leaflet::Map,
    markers: Vec<leaflet::Marker>,
    popup_handlers: Vec<Closure<dyn FnMut()>>,
}

#[cfg(feature = "hydrate")]
impl MapView {
    fn clear_markers(&mut self) {
        for marker in self.markers.drain(..) {
            marker.remove();
        }
        self.popup_handlers.clear();
    }
}

/// Host for the Leaflet map; owns the widget lifecycle.
#[component]
pub fn MapHost(on_details: Callback<String>) -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();
    let map_div = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let view_state: Rc<RefCell<Option<MapView>>> = Rc::new(RefCell::new(None));

        // Create the map once the host div is mounted.
        let init_state = Rc::clone(&view_state);
        Effect::new(move || {
            let Some(div) = map_div.get() else {
                return;
            };
            if init_state.borrow().is_some() {
                return;
            }
            let container: &web_sys::HtmlElement = div.as_ref();
            let map = leaflet::new_map(container);
            let city = search.get_untracked().query.city;
            let (lat, lng) = city_center(&city).unwrap_or((43.6532, -79.3832));
            map.set_view(&lat_lng(lat, lng), CITY_ZOOM);
            leaflet::new_tile_layer(TILE_URL, &tile_options()).add_to(&map);

            let mut view = MapView {
                map,
                markers: Vec::new(),
                popup_handlers: Vec::new(),
            };
            // Results may already be in if hydration beat the first load.
            let properties = search.get_untracked().properties;
            rebuild_markers(&mut view, &properties, on_details);
            *init_state.borrow_mut() = Some(view);
        });

        // Recenter when the selected city changes.
        let recenter_state = Rc::clone(&view_state);
        Effect::new(move || {
            let city = search.with(|s| s.query.city.clone());
            if let Some(view) = recenter_state.borrow().as_ref()
                && let Some((lat, lng)) = city_center(&city)
            {
                view.map.set_view(&lat_lng(lat, lng), CITY_ZOOM);
            }
        });

        // Replace the marker set whenever a load commits new results.
        let markers_state = Rc::clone(&view_state);
        Effect::new(move || {
            let properties = search.with(|s| s.properties.clone());
            if let Some(view) = markers_state.borrow_mut().as_mut() {
                rebuild_markers(view, &properties, on_details);
            }
        });

        let cleanup_state = Rc::clone(&view_state);
        on_cleanup(move || {
            if let Some(mut view) = cleanup_state.borrow_mut().take() {
                view.clear_markers();
                view.map.remove();
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (search, on_details);
    }

    view! { <div class="map-host" node_ref=map_div></div> }
}

#[cfg(feature = "hydrate")]
fn rebuild_markers(view: &mut MapView, properties: &[PropertySummary], on_details: Callback<String>) {
    view.clear_markers();
    for property in properties {
        let marker = leaflet::new_marker(&lat_lng(property.latitude, property.longitude));
        marker.add_to_map(&view.map);
        if let Some((content, handler)) = popup_content(property, on_details) {
            marker.bind_popup(&content);
            view.popup_handlers.push(handler);
        }
        view.markers.push(marker);
    }
}

/// Build a popup DOM fragment sharing its lines with the list card. Returns
/// the root element plus the click closure keeping the button alive.
#[cfg(feature = "hydrate")]
fn popup_content(
    property: &PropertySummary,
    on_details: Callback<String>,
) -> Option<(web_sys::Element, Closure<dyn FnMut()>)> {
    let document = web_sys::window()?.document()?;
    let lines = summary_lines(property);

    let root = document.create_element("div").ok()?;
    root.set_class_name("property-popup");

    let heading = document.create_element("h3").ok()?;
    heading.set_text_content(Some(&property.address));
    root.append_child(&heading).ok()?;

    for (class, text) in [
        ("property-popup__price", lines.price.as_str()),
        ("", lines.rooms.as_str()),
        ("", lines.size.as_str()),
    ] {
        let line = document.create_element("p").ok()?;
        if !class.is_empty() {
            line.set_class_name(class);
        }
        line.set_text_content(Some(text));
        root.append_child(&line).ok()?;
    }

    let button = document.create_element("button").ok()?;
    button.set_class_name("btn property-popup__details");
    button.set_text_content(Some("View Details"));
    let id = property.id.clone();
    let handler = Closure::wrap(Box::new(move || on_details.run(id.clone())) as Box<dyn FnMut()>);
    button
        .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        .ok()?;
    root.append_child(&button).ok()?;

    Some((root, handler))
}

#[cfg(feature = "hydrate")]
fn lat_lng(lat: f64, lng: f64) -> JsValue {
    js_sys::Array::of2(&JsValue::from_f64(lat), &JsValue::from_f64(lng)).into()
}

#[cfg(feature = "hydrate")]
fn tile_options() -> JsValue {
    let options = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &options,
        &JsValue::from_str("attribution"),
        &JsValue::from_str(TILE_ATTRIBUTION),
    );
    options.into()
}
