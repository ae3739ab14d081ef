// Formatting and id helpers shared across components.

use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Currency display, e.g. 1234.5 -> "$1,234.50". Always shows the absolute
/// value; callers prepend the sign when they want one.
pub fn format_currency(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;
    let mut digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    while digits.len() > 3 {
        let rest = digits.split_off(digits.len() - 3);
        grouped = if grouped.is_empty() {
            rest
        } else {
            format!("{rest},{grouped}")
        };
    }
    if grouped.is_empty() {
        grouped = digits;
    } else {
        grouped = format!("{digits},{grouped}");
    }
    format!("${grouped}.{frac:02}")
}

/// "YYYY-MM-DD" -> "DD/MM/YYYY"; anything else passes through unchanged.
pub fn format_date(iso: &str) -> String {
    let parts: Vec<&str> = iso.split('-').collect();
    if parts.len() == 3 {
        format!("{}/{}/{}", parts[2], parts[1], parts[0])
    } else {
        iso.to_string()
    }
}

/// ISO date for a js timestamp in milliseconds.
pub fn iso_date_from_ms(ms: f64) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(ms));
    format!(
        "{:04}-{:02}-{:02}",
        date.get_full_year(),
        date.get_month() + 1,
        date.get_date()
    )
}

pub fn today() -> String {
    iso_date_from_ms(js_sys::Date::now())
}

pub fn days_ago(days: f64) -> String {
    iso_date_from_ms(js_sys::Date::now() - days * 24.0 * 60.0 * 60.0 * 1000.0)
}

/// Random opaque id; good enough for a local ledger.
pub fn gen_id() -> String {
    let a = (js_sys::Math::random() * 4294967296.0) as u32;
    let b = (js_sys::Math::random() * 4294967296.0) as u32;
    format!("{a:08x}{b:08x}")
}

/// Parse a user-typed amount, tolerating a comma decimal separator.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().replace(',', ".");
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Some(v),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(7.5), "$7.50");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1234567.89), "$1,234,567.89");
        assert_eq!(format_currency(-42.0), "$42.00");
    }

    #[test]
    fn date_display_is_day_first() {
        assert_eq!(format_date("2026-08-29"), "29/08/2026");
        assert_eq!(format_date("not-a-date-at-all"), "not-a-date-at-all");
    }

    #[test]
    fn amount_parsing_accepts_comma() {
        assert_eq!(parse_amount("12,50"), Some(12.5));
        assert_eq!(parse_amount(" 3.20 "), Some(3.2));
        assert_eq!(parse_amount("0"), None);
        assert_eq!(parse_amount("abc"), None);
    }
}
