//! Client-side state core for the todue todo manager.
//!
//! # Overview
//! Everything here is the view/state logic of a todo list with due-date
//! scheduling: the authoritative collection ([`TodoStore`]), transient
//! per-item edit drafts ([`EditDraft`]), and the pure read-side
//! projections (list filtering, due-date formatting). Rendering and the
//! backend itself live elsewhere.
//!
//! # Design
//! - The crate performs no I/O. `TodoClient` builds `HttpRequest` values
//!   and parses `HttpResponse` values; the composition root supplies a
//!   [`Transport`] that executes the round-trips.
//! - Operations that need the current time take a [`Clock`], so every
//!   code path is deterministic under test.
//! - After a successful write the server's response body is the source of
//!   truth for local state.
//! - DTOs are defined independently from the mock-server crate; the
//!   integration tests catch schema drift.

pub mod client;
pub mod edit;
pub mod error;
pub mod filter;
pub mod format;
pub mod http;
pub mod schedule;
pub mod store;
pub mod types;

pub use client::TodoClient;
pub use edit::{DraftError, EditDraft};
pub use error::ApiError;
pub use filter::Filter;
pub use format::DueDisplay;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use schedule::Clock;
pub use store::TodoStore;
pub use types::{CreateTodo, DueDate, Todo, TodoPatch};
