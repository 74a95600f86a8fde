//! Supported cities and their map centers.

#[cfg(test)]
#[path = "cities_test.rs"]
mod cities_test;

/// City shown before the user touches the controls.
pub const DEFAULT_CITY: &str = "toronto";

/// Zoom level used whenever the map recenters on a city.
pub const CITY_ZOOM: f64 = 12.0;

/// Cities offered by the search controls, as `(slug, label)`.
pub const CITIES: [(&str, &str); 3] = [
    ("toronto", "Toronto"),
    ("vancouver", "Vancouver"),
    ("ottawa", "Ottawa"),
];

/// Map center for a city slug as `(latitude, longitude)`.
pub fn city_center(city: &str) -> Option<(f64, f64)> {
    match city {
        "toronto" => Some((43.6532, -79.3832)),
        "vancouver" => Some((49.2827, -123.1207)),
        "ottawa" => Some((45.4215, -75.6972)),
        _ => None,
    }
}
