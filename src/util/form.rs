//! Numeric form-input helpers.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Parse a numeric input's raw value and clamp it into `[min, max]`.
/// Returns `None` while the field is empty or mid-edit (e.g. `"-"`), letting
/// the caller leave the input untouched.
pub fn clamp_numeric(raw: &str, min: f64, max: f64) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(value.clamp(min, max))
}

/// Parse a field for request building, falling back to `default` when the
/// input is empty or unparseable.
pub fn parse_or(raw: &str, default: f64) -> f64 {
    raw.trim().parse().ok().filter(|v: &f64| v.is_finite()).unwrap_or(default)
}
