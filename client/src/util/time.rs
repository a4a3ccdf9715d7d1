//! Session clock and timestamp formatting.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}

/// Format a timestamp as `HH:MM` in the viewer's local time.
pub fn format_clock(timestamp_ms: f64) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp_ms));
        format!("{:02}:{:02}", date.get_hours(), date.get_minutes())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        format_clock_utc(timestamp_ms)
    }
}

/// `HH:MM` of a timestamp in UTC.
#[allow(clippy::cast_possible_truncation)]
pub fn format_clock_utc(timestamp_ms: f64) -> String {
    const MS_PER_MINUTE: i64 = 60_000;
    const MINUTES_PER_DAY: i64 = 24 * 60;

    let minutes = (timestamp_ms as i64).div_euclid(MS_PER_MINUTE).rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
