//! Time Utilities
//!
//! Epoch-millisecond clock and local calendar-day boundaries.
//! The streak rule counts activities per local day, so day boundaries
//! follow the device timezone rather than UTC.

use chrono::{Local, LocalResult, TimeZone};

/// Milliseconds in one week
pub const WEEK_MS: i64 = 7 * 24 * 60 * 60 * 1000;

/// Current wall-clock time in epoch milliseconds
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Local midnight of the calendar day containing `ts_ms`, in epoch milliseconds
pub fn day_start_ms(ts_ms: i64) -> i64 {
    let dt = match Local.timestamp_millis_opt(ts_ms) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt,
        // Out-of-range timestamp: fall back to UTC day arithmetic
        LocalResult::None => return ts_ms - ts_ms.rem_euclid(86_400_000),
    };
    let midnight = dt
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .unwrap_or_else(|| dt.naive_local());
    match Local.from_local_datetime(&midnight) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.timestamp_millis(),
        LocalResult::None => ts_ms - ts_ms.rem_euclid(86_400_000),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_start_not_after_timestamp() {
        let now = now_ms();
        let start = day_start_ms(now);
        assert!(start <= now);
        assert!(now - start < 24 * 60 * 60 * 1000 + 3_600_000); // DST slack
    }

    #[test]
    fn test_day_start_idempotent() {
        let now = now_ms();
        let start = day_start_ms(now);
        assert_eq!(day_start_ms(start), start);
    }

    #[test]
    fn test_previous_day_start_is_earlier() {
        let today = day_start_ms(now_ms());
        let yesterday = day_start_ms(today - 1);
        assert!(yesterday < today);
    }
}
