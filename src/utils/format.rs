//! Formatting utilities for sizes, timestamps, durations and playback positions.

/// Format file size for display (e.g., "1.2K", "3.4M").
///
/// Returns a right-aligned string for terminal display or compact string for UI.
pub fn format_size(size: Option<u64>, right_align: bool) -> String {
    match size {
        None => {
            if right_align {
                "    -".to_string()
            } else {
                "-".to_string()
            }
        }
        Some(bytes) => {
            if bytes >= 1_000_000 {
                if right_align {
                    format!("{:4.1}M", bytes as f64 / 1_000_000.0)
                } else {
                    format!("{:.1}M", bytes as f64 / 1_000_000.0)
                }
            } else if bytes >= 1_000 {
                if right_align {
                    format!("{:4.1}K", bytes as f64 / 1_000.0)
                } else {
                    format!("{:.1}K", bytes as f64 / 1_000.0)
                }
            } else if right_align {
                format!("{:4}B", bytes)
            } else {
                format!("{}B", bytes)
            }
        }
    }
}

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const WEEKDAYS: [&str; 7] = ["Thu", "Fri", "Sat", "Sun", "Mon", "Tue", "Wed"];

/// Civil (year, month 1-12, day 1-31) for days since the Unix epoch.
fn civil_from_days(days: u64) -> (i64, usize, u64) {
    let mut year = 1970i64;
    let mut remaining = days;
    loop {
        let days_in_year = if is_leap_year(year) { 366 } else { 365 };
        if remaining < days_in_year {
            break;
        }
        remaining -= days_in_year;
        year += 1;
    }

    let days_in_months: [u64; 12] = if is_leap_year(year) {
        [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    } else {
        [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    };

    let mut month = 0;
    for days_in_month in days_in_months {
        if remaining < days_in_month {
            break;
        }
        remaining -= days_in_month;
        month += 1;
    }

    (year, month + 1, remaining + 1)
}

/// Check if a year is a leap year.
fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Format Unix seconds for `ls -l` (e.g., "Jan  5 12:34"), UTC.
pub fn format_date_short(timestamp: u64) -> String {
    let (_, month, day) = civil_from_days(timestamp / 86400);
    let hour = (timestamp % 86400) / 3600;
    let min = (timestamp % 3600) / 60;
    format!("{} {:2} {:02}:{:02}", MONTHS[month - 1], day, hour, min)
}

/// Format Unix milliseconds like `date` (e.g., "Mon Jan  1 00:00:00 UTC 2024").
pub fn format_date_utc(ms: u64) -> String {
    let secs = ms / 1000;
    let days = secs / 86400;
    let (year, month, day) = civil_from_days(days);
    format!(
        "{} {} {:2} {:02}:{:02}:{:02} UTC {}",
        WEEKDAYS[(days % 7) as usize],
        MONTHS[month - 1],
        day,
        (secs % 86400) / 3600,
        (secs % 3600) / 60,
        secs % 60,
        year
    )
}

/// Elapsed milliseconds with one decimal (e.g., "12.3ms").
pub fn format_elapsed_ms(ms: f64) -> String {
    format!("{:.1}ms", ms)
}

/// Playback position as `m:ss`. Non-finite or negative input shows `0:00`.
pub fn format_playback(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(None, false), "-");
        assert_eq!(format_size(None, true), "    -");
        assert_eq!(format_size(Some(500), false), "500B");
        assert_eq!(format_size(Some(1500), false), "1.5K");
        assert_eq!(format_size(Some(1_500_000), false), "1.5M");
    }

    #[test]
    fn test_format_date_short() {
        // 2024-01-05 12:34:00 UTC
        assert_eq!(format_date_short(1_704_458_040), "Jan  5 12:34");
        // 2024-02-29 00:00:00 UTC (leap day)
        assert_eq!(format_date_short(1_709_164_800), "Feb 29 00:00");
    }

    #[test]
    fn test_format_date_utc() {
        assert_eq!(format_date_utc(0), "Thu Jan  1 00:00:00 UTC 1970");
        assert_eq!(
            format_date_utc(1_704_067_200_000),
            "Mon Jan  1 00:00:00 UTC 2024"
        );
    }

    #[test]
    fn test_format_elapsed_ms() {
        assert_eq!(format_elapsed_ms(12.34), "12.3ms");
        assert_eq!(format_elapsed_ms(0.0), "0.0ms");
    }

    #[test]
    fn test_format_playback() {
        assert_eq!(format_playback(0.0), "0:00");
        assert_eq!(format_playback(62.9), "1:02");
        assert_eq!(format_playback(600.0), "10:00");
        assert_eq!(format_playback(f64::NAN), "0:00");
        assert_eq!(format_playback(-3.0), "0:00");
    }
}
