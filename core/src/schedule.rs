//! Due-date normalization: explicit date and time-of-day components.
//!
//! # Design
//! The backend stores a due timestamp as one combined value while the edit
//! surface works with separate date and time fields. Rather than slicing
//! strings at a fixed layout, every conversion goes through parse/format
//! functions over `chrono` components with defined behavior on malformed
//! input: parse functions return `None`, they never panic.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Field format for a date-only draft value.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Field format for a time-only draft value.
pub const TIME_FORMAT: &str = "%H:%M";

/// Combine a calendar date and an optional time-of-day into a due
/// timestamp. A missing time means midnight.
pub fn combine(date: NaiveDate, time: Option<NaiveTime>) -> NaiveDateTime {
    date.and_time(time.unwrap_or(NaiveTime::MIN))
}

/// Split a due timestamp back into its date and time-of-day components.
pub fn split(due: NaiveDateTime) -> (NaiveDate, NaiveTime) {
    (due.date(), due.time())
}

/// Parse a stored due value. Accepts full timestamps with or without
/// seconds and bare dates (read as midnight).
pub fn parse_due(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
        .or_else(|| parse_date(raw).map(|date| combine(date, None)))
}

/// Parse a date-only field value (`YYYY-MM-DD`).
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

/// Parse a time-only field value (`HH:MM`, seconds tolerated).
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Wall-clock snapshot supplied by the composition root.
///
/// The core never reads the system clock itself; operations that need the
/// current instant take a `Clock`, which keeps them deterministic under
/// test.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    /// Instant stamped into `createdAt`.
    pub utc: DateTime<Utc>,
    /// Local wall-clock time, used for due-date defaults and overdue
    /// checks. Due timestamps are naive local values.
    pub local: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn combine_defaults_missing_time_to_midnight() {
        let due = combine(date(2026, 8, 6), None);
        assert_eq!(due, date(2026, 8, 6).and_time(NaiveTime::MIN));
    }

    #[test]
    fn combine_uses_given_time() {
        let due = combine(date(2026, 8, 6), Some(time(14, 30)));
        assert_eq!(due.to_string(), "2026-08-06 14:30:00");
    }

    #[test]
    fn split_inverts_combine() {
        let due = combine(date(2026, 12, 31), Some(time(23, 59)));
        assert_eq!(split(due), (date(2026, 12, 31), time(23, 59)));
    }

    #[test]
    fn parse_due_accepts_full_timestamp() {
        let due = parse_due("2026-08-06T14:30:00").unwrap();
        assert_eq!(due, combine(date(2026, 8, 6), Some(time(14, 30))));
    }

    #[test]
    fn parse_due_accepts_timestamp_without_seconds() {
        let due = parse_due("2026-08-06T14:30").unwrap();
        assert_eq!(due, combine(date(2026, 8, 6), Some(time(14, 30))));
    }

    #[test]
    fn parse_due_reads_bare_date_as_midnight() {
        let due = parse_due("2026-08-06").unwrap();
        assert_eq!(due, combine(date(2026, 8, 6), None));
    }

    #[test]
    fn parse_due_rejects_garbage() {
        assert!(parse_due("not a date").is_none());
        assert!(parse_due("").is_none());
        assert!(parse_due("2026-13-40T99:99:99").is_none());
    }

    #[test]
    fn field_values_roundtrip() {
        let d = date(2026, 1, 2);
        let t = time(9, 5);
        assert_eq!(parse_date(&format_date(d)), Some(d));
        assert_eq!(parse_time(&format_time(t)), Some(t));
        assert_eq!(format_date(d), "2026-01-02");
        assert_eq!(format_time(t), "09:05");
    }

    #[test]
    fn parse_time_tolerates_seconds() {
        assert_eq!(parse_time("14:30:45").unwrap().to_string(), "14:30:45");
    }
}
