//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the backend's JSON schema (camelCase field names) but
//! are defined independently of the mock-server crate; the integration tests
//! catch any schema drift between the two. Due timestamps are tolerant on
//! the way in: a stored value this client cannot parse is preserved as
//! `DueDate::Invalid` instead of failing the whole collection.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::schedule;

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "dueDate", default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DueDate>,
}

/// A stored due timestamp: naive local wall-clock time.
///
/// Backends may hold due strings this client never wrote. Unparseable
/// values deserialize into `Invalid`, keeping the raw text so it can be
/// written back unchanged, and render as an explicit invalid marker on the
/// read side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DueDate {
    At(NaiveDateTime),
    Invalid(String),
}

impl DueDate {
    /// The parsed timestamp, if there is one.
    pub fn at(&self) -> Option<NaiveDateTime> {
        match self {
            DueDate::At(ts) => Some(*ts),
            DueDate::Invalid(_) => None,
        }
    }
}

impl From<NaiveDateTime> for DueDate {
    fn from(ts: NaiveDateTime) -> Self {
        DueDate::At(ts)
    }
}

impl Serialize for DueDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DueDate::At(ts) => serializer.serialize_str(&ts.format("%Y-%m-%dT%H:%M:%S").to_string()),
            DueDate::Invalid(raw) => serializer.serialize_str(raw),
        }
    }
}

impl<'de> Deserialize<'de> for DueDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(match schedule::parse_due(&raw) {
            Some(ts) => DueDate::At(ts),
            None => DueDate::Invalid(raw),
        })
    }
}

/// Request payload for creating a new todo. The id is assigned by the
/// server; `createdAt` is stamped by the client at submission time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "dueDate", default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DueDate>,
}

/// Partial update payload. Fields absent from the JSON remain unchanged on
/// the server. The due field is a double `Option` so a patch can say
/// "leave unchanged" (omitted), "clear" (explicit null), or "set" (value).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(
        rename = "dueDate",
        default,
        skip_serializing_if = "Option::is_none",
        with = "double_option"
    )]
    pub due_date: Option<Option<DueDate>>,
}

/// Serde helpers distinguishing a missing field from an explicit null.
pub(crate) mod double_option {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S, T>(value: &Option<Option<T>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}
