//! Display formatting for money, counts, areas, and sale dates.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a dollar amount with thousands separators, e.g. `$1,234,568`.
/// Rounds to the nearest dollar.
pub fn format_usd(amount: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let rounded = amount.round() as i64;
    format!("${}", format_thousands(rounded))
}

/// Insert thousands separators into an integer, e.g. `1,234,568`.
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && i % 3 == lead % 3 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format an interior area, e.g. `1,850 sq ft`.
pub fn format_sqft(square_feet: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let rounded = square_feet.round() as i64;
    format!("{} sq ft", format_thousands(rounded))
}

/// Format a count that may be fractional, dropping a trailing `.0` so whole
/// bathroom counts read as `2` rather than `2.0`.
pub fn format_count(value: f64) -> String {
    if value.fract() == 0.0 {
        #[allow(clippy::cast_possible_truncation)]
        let whole = value as i64;
        whole.to_string()
    } else {
        format!("{value}")
    }
}

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format an ISO 8601 date as `Jan 5, 2024`. Anything that does not start
/// with `YYYY-MM-DD` is returned unchanged rather than failing the render.
pub fn format_sold_date(iso: &str) -> String {
    let Some((year, month, day)) = parse_iso_date(iso) else {
        return iso.to_owned();
    };
    format!("{} {day}, {year}", MONTHS[month - 1])
}

fn parse_iso_date(iso: &str) -> Option<(u32, usize, u32)> {
    let date = iso.get(..10)?;
    let mut parts = date.splitn(3, '-');
    let year: u32 = parts.next()?.parse().ok()?;
    let month: usize = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some((year, month, day))
}
