//! Wall-clock helpers.

#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Local wall-clock reading.
pub struct LocalClock {
    /// Hour of day, 0-23.
    pub hour: u32,
    /// Minute, 0-59.
    pub minute: u32,
}

impl LocalClock {
    /// Formats the reading as a 12-hour clock without leading zero, e.g. `9:05 PM`.
    pub fn format_12h(self) -> String {
        let suffix = if self.hour < 12 { "AM" } else { "PM" };
        let hour = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{hour}:{:02} {suffix}", self.minute)
    }
}

/// Reads the local wall clock. Native targets report UTC.
pub fn local_clock_now() -> LocalClock {
    #[cfg(target_arch = "wasm32")]
    {
        let date = js_sys::Date::new_0();
        LocalClock {
            hour: date.get_hours(),
            minute: date.get_minutes(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let secs = unix_time_ms_now() / 1000;
        LocalClock {
            hour: ((secs / 3600) % 24) as u32,
            minute: ((secs / 60) % 60) as u32,
        }
    }
}

/// Returns the browser's long date string (`Date.prototype.toString`).
pub fn local_date_string() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        String::from(js_sys::Date::new_0().to_string())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        format!("{} ms since unix epoch", unix_time_ms_now())
    }
}

/// Returns the local calendar year. Native targets report the UTC year.
pub fn current_year() -> i32 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::new_0().get_full_year() as i32
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        year_from_unix_days((unix_time_ms_now() / 86_400_000) as i64)
    }
}

/// Proleptic Gregorian year containing `days` since 1970-01-01.
#[cfg(any(test, not(target_arch = "wasm32")))]
fn year_from_unix_days(days: i64) -> i32 {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let year = yoe + era * 400 + i64::from(mp >= 10);
    year as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_hour_format_handles_midnight_and_noon() {
        assert_eq!(LocalClock { hour: 0, minute: 7 }.format_12h(), "12:07 AM");
        assert_eq!(LocalClock { hour: 12, minute: 0 }.format_12h(), "12:00 PM");
        assert_eq!(LocalClock { hour: 21, minute: 45 }.format_12h(), "9:45 PM");
    }

    #[test]
    fn unix_days_map_to_calendar_years() {
        assert_eq!(year_from_unix_days(0), 1970);
        assert_eq!(year_from_unix_days(364), 1970);
        assert_eq!(year_from_unix_days(365), 1971);
        // 2024-02-29 and 2024-12-31.
        assert_eq!(year_from_unix_days(19_782), 2024);
        assert_eq!(year_from_unix_days(20_088), 2024);
        assert_eq!(year_from_unix_days(20_089), 2025);
    }
}
