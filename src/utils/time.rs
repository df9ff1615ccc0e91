//! Wall-clock and local-time helpers.
//!
//! The browser build reads `Date`; native builds (tests, tooling) fall back
//! to `SystemTime` and UTC formatting.

/// Current time in Unix milliseconds.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// `date` output for the given instant in the viewer's local time zone.
#[cfg(target_arch = "wasm32")]
pub fn format_local_date(ms: u64) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(ms as f64));
    String::from(date.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn format_local_date(ms: u64) -> String {
    super::format::format_date_utc(ms)
}

/// Local wall-clock time as `HH:MM:SS` for the profile clock.
#[cfg(target_arch = "wasm32")]
pub fn local_clock(ms: u64) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(ms as f64));
    format!(
        "{:02}:{:02}:{:02}",
        date.get_hours(),
        date.get_minutes(),
        date.get_seconds()
    )
}

#[cfg(not(target_arch = "wasm32"))]
pub fn local_clock(ms: u64) -> String {
    let secs = ms / 1000;
    format!(
        "{:02}:{:02}:{:02}",
        (secs % 86400) / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_is_after_2024() {
        assert!(now_ms() > 1_704_067_200_000);
    }

    #[test]
    fn test_local_clock_native() {
        assert_eq!(local_clock(1_704_458_040_000), "12:34:00");
    }

    #[test]
    fn test_local_date_native() {
        assert_eq!(format_local_date(0), "Thu Jan  1 00:00:00 UTC 1970");
    }
}
