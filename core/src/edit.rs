//! Transient per-item edit state.
//!
//! A draft exists only while an item is being edited: seeded from the live
//! record, committed through `TodoStore::update`, and discarded on cancel.
//! Cancel re-seeds from the record rather than restoring a snapshot taken
//! at entry, so a record refreshed mid-edit wins. Each item's draft is
//! independent; editing two items at once needs no coordination.

use std::fmt;

use crate::schedule;
use crate::types::{DueDate, Todo, TodoPatch};

/// Editable field contents for a single todo, as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditDraft {
    pub title: String,
    /// `YYYY-MM-DD`, or empty for no due date.
    pub due_date: String,
    /// `HH:MM`, or empty for midnight.
    pub due_time: String,
}

impl EditDraft {
    /// Seed a draft from the record's committed fields, splitting a stored
    /// due timestamp into separate date and time field values.
    pub fn from_todo(todo: &Todo) -> Self {
        let (due_date, due_time) = match &todo.due_date {
            Some(DueDate::At(ts)) => {
                let (date, time) = schedule::split(*ts);
                (schedule::format_date(date), schedule::format_time(time))
            }
            // Unparseable stored values edit as blank rather than leaking
            // raw text into the date field.
            Some(DueDate::Invalid(_)) | None => (String::new(), String::new()),
        };
        Self {
            title: todo.title.clone(),
            due_date,
            due_time,
        }
    }

    /// Discard edits, restoring every field from the live record.
    pub fn cancel(&mut self, todo: &Todo) {
        *self = Self::from_todo(todo);
    }

    /// Validate the draft and turn it into an update payload.
    ///
    /// A draft with a date gets a single combined due timestamp (the
    /// separate time field is dropped by construction); a draft with both
    /// fields blank clears the due date; a time without a date has no day
    /// to attach to and is rejected.
    pub fn submit(&self) -> Result<TodoPatch, DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::EmptyTitle);
        }
        let date = match self.due_date.trim() {
            "" => None,
            raw => Some(
                schedule::parse_date(raw).ok_or_else(|| DraftError::InvalidDate(raw.to_string()))?,
            ),
        };
        let time = match self.due_time.trim() {
            "" => None,
            raw => Some(
                schedule::parse_time(raw).ok_or_else(|| DraftError::InvalidTime(raw.to_string()))?,
            ),
        };
        let due = match (date, time) {
            (Some(date), time) => Some(DueDate::from(schedule::combine(date, time))),
            (None, Some(_)) => return Err(DraftError::TimeWithoutDate),
            (None, None) => None,
        };
        Ok(TodoPatch {
            title: Some(self.title.clone()),
            completed: None,
            due_date: Some(due),
        })
    }
}

/// Why a draft refused to commit. The caller keeps the item in edit mode
/// and surfaces (or ignores) the reason; nothing has been sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    EmptyTitle,
    InvalidDate(String),
    InvalidTime(String),
    TimeWithoutDate,
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftError::EmptyTitle => write!(f, "title cannot be empty"),
            DraftError::InvalidDate(raw) => write!(f, "not a date (expected YYYY-MM-DD): {raw}"),
            DraftError::InvalidTime(raw) => write!(f, "not a time (expected HH:MM): {raw}"),
            DraftError::TimeWithoutDate => write!(f, "a due time needs a due date"),
        }
    }
}

impl std::error::Error for DraftError {}
