//! Wall-clock helpers that work in the browser and in native tests.

/// Milliseconds since the Unix epoch.
#[must_use]
pub fn now_ms() -> i64 {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let now = js_sys::Date::now() as i64;
        now
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
    }
}

/// Local hour of day (0-23). Native builds use UTC.
#[must_use]
pub fn local_hour() -> u32 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::new_0().get_hours()
    }
    #[cfg(not(feature = "csr"))]
    {
        u32::try_from(now_ms().rem_euclid(86_400_000) / 3_600_000).unwrap_or(0)
    }
}
