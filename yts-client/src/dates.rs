//! Helpers over the `date_uploaded_unix` field.

use chrono::Utc;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;

/// Uploaded within the last 7 days.
pub fn is_new(date_uploaded_unix: i64) -> bool {
    Utc::now().timestamp() - date_uploaded_unix <= WEEK
}

/// Uploaded within the last 24 hours.
pub fn is_very_recent(date_uploaded_unix: i64) -> bool {
    Utc::now().timestamp() - date_uploaded_unix <= DAY
}

/// "Just now", then minute/hour/day/week buckets.
pub fn format_relative_time(date_uploaded_unix: i64) -> String {
    format_relative_to(Utc::now().timestamp(), date_uploaded_unix)
}

fn format_relative_to(now_unix: i64, date_uploaded_unix: i64) -> String {
    let elapsed = now_unix - date_uploaded_unix;

    if elapsed < MINUTE {
        "Just now".to_string()
    } else if elapsed < HOUR {
        format!("{}m ago", elapsed / MINUTE)
    } else if elapsed < DAY {
        format!("{}h ago", elapsed / HOUR)
    } else if elapsed < WEEK {
        format!("{}d ago", elapsed / DAY)
    } else {
        format!("{}w ago", elapsed / WEEK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_boundaries() {
        assert_eq!(format_relative_to(1000, 990), "Just now");
        assert_eq!(format_relative_to(1000, 1000 - 59), "Just now");
        assert_eq!(format_relative_to(1000, 1000 - 60), "1m ago");
        assert_eq!(format_relative_to(10_000, 10_000 - 59 * MINUTE), "59m ago");
        assert_eq!(format_relative_to(10_000, 10_000 - HOUR), "1h ago");
        assert_eq!(format_relative_to(DAY * 2, DAY * 2 - 23 * HOUR), "23h ago");
        assert_eq!(format_relative_to(DAY * 2, DAY), "1d ago");
        assert_eq!(format_relative_to(WEEK * 2, WEEK * 2 - 6 * DAY), "6d ago");
        assert_eq!(format_relative_to(WEEK * 2, WEEK), "1w ago");
        assert_eq!(format_relative_to(WEEK * 10, 0), "10w ago");
    }

    #[test]
    fn freshness_windows() {
        let now = Utc::now().timestamp();
        assert!(is_new(now - 3 * DAY));
        assert!(!is_new(now - 8 * DAY));
        assert!(is_very_recent(now - 2 * HOUR));
        assert!(!is_very_recent(now - 2 * DAY));
    }
}
