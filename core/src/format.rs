//! Read-side rendering of due timestamps.
//!
//! Pure projections consumed by whatever draws the list: given a stored
//! due value, a completion flag, and the current local time, decide what
//! text (if any) to show and whether the item counts as overdue.

use chrono::NaiveDateTime;

use crate::types::DueDate;

/// Marker shown when a stored due value cannot be parsed.
pub const INVALID_DUE: &str = "Invalid date";

/// How a todo's due timestamp should be presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DueDisplay {
    /// No due date stored; render nothing.
    None,
    Scheduled { text: String, overdue: bool },
    /// The stored value is not a recognizable timestamp.
    Invalid,
}

impl DueDisplay {
    pub fn text(&self) -> Option<&str> {
        match self {
            DueDisplay::None => None,
            DueDisplay::Scheduled { text, .. } => Some(text),
            DueDisplay::Invalid => Some(INVALID_DUE),
        }
    }

    pub fn is_overdue(&self) -> bool {
        matches!(self, DueDisplay::Scheduled { overdue: true, .. })
    }
}

/// Classify and render a due value for display.
pub fn due_display(due: Option<&DueDate>, completed: bool, now: NaiveDateTime) -> DueDisplay {
    match due {
        None => DueDisplay::None,
        Some(DueDate::Invalid(_)) => DueDisplay::Invalid,
        Some(DueDate::At(ts)) => DueDisplay::Scheduled {
            text: format_due(*ts),
            overdue: is_overdue(*ts, completed, now),
        },
    }
}

/// Human-readable rendering, e.g. `Aug 6, 2026, 02:30 PM`.
pub fn format_due(ts: NaiveDateTime) -> String {
    ts.format("%b %-d, %Y, %I:%M %p").to_string()
}

/// A due timestamp strictly in the past marks an item overdue, unless the
/// item is already completed.
pub fn is_overdue(due: NaiveDateTime, completed: bool, now: NaiveDateTime) -> bool {
    !completed && due < now
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::parse_due;

    fn ts(raw: &str) -> NaiveDateTime {
        parse_due(raw).unwrap()
    }

    #[test]
    fn formats_month_day_year_hour_minute() {
        assert_eq!(format_due(ts("2026-08-06T14:30:00")), "Aug 6, 2026, 02:30 PM");
        assert_eq!(format_due(ts("2026-01-02T00:00:00")), "Jan 2, 2026, 12:00 AM");
    }

    #[test]
    fn past_due_and_not_completed_is_overdue() {
        let now = ts("2026-08-06T12:00:00");
        assert!(is_overdue(ts("2026-08-06T11:59:00"), false, now));
    }

    #[test]
    fn completed_items_are_never_overdue() {
        let now = ts("2026-08-06T12:00:00");
        assert!(!is_overdue(ts("2020-01-01T00:00:00"), true, now));
    }

    #[test]
    fn due_exactly_now_or_later_is_not_overdue() {
        let now = ts("2026-08-06T12:00:00");
        assert!(!is_overdue(now, false, now));
        assert!(!is_overdue(ts("2026-08-06T12:01:00"), false, now));
    }

    #[test]
    fn display_of_missing_due_is_empty() {
        let display = due_display(None, false, ts("2026-08-06T12:00:00"));
        assert_eq!(display, DueDisplay::None);
        assert!(display.text().is_none());
        assert!(!display.is_overdue());
    }

    #[test]
    fn display_of_invalid_due_is_the_marker_not_a_panic() {
        let due = DueDate::Invalid("soon".to_string());
        let display = due_display(Some(&due), false, ts("2026-08-06T12:00:00"));
        assert_eq!(display, DueDisplay::Invalid);
        assert_eq!(display.text(), Some(INVALID_DUE));
        assert!(!display.is_overdue());
    }

    #[test]
    fn display_of_scheduled_due_carries_overdue_flag() {
        let due = DueDate::At(ts("2026-08-05T09:00:00"));
        let now = ts("2026-08-06T12:00:00");
        let display = due_display(Some(&due), false, now);
        assert_eq!(display.text(), Some("Aug 5, 2026, 09:00 AM"));
        assert!(display.is_overdue());

        let done = due_display(Some(&due), true, now);
        assert!(!done.is_overdue());
    }
}
