//! Authoritative in-memory todo collection, synchronized with the backend.
//!
//! # Design
//! `TodoStore` owns the collection and is the only component that mutates
//! it. Every operation sends the remote call first and touches local state
//! only once the backend has confirmed; a failed call returns the error
//! and leaves the collection exactly as it was. There is no retry, no
//! offline queue, and no optimistic apply.
//!
//! After a successful write the server's response body is the source of
//! truth: create appends the record the backend returned (which carries
//! the authoritative id) and update replaces the local record with the
//! backend's merged result rather than re-applying the request payload.

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::Transport;
use crate::schedule::{self, Clock};
use crate::types::{CreateTodo, Todo, TodoPatch};

#[derive(Debug)]
pub struct TodoStore {
    client: TodoClient,
    todos: Vec<Todo>,
}

impl TodoStore {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: TodoClient::new(base_url),
            todos: Vec::new(),
        }
    }

    /// Read-only view of the collection, in backend order.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: Uuid) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Replace the collection with the backend's current contents.
    pub fn load(&mut self, transport: &impl Transport) -> Result<(), ApiError> {
        let request = self.client.build_list_todos();
        let todos = self.client.parse_list_todos(transport.execute(request)?)?;
        self.todos = todos;
        Ok(())
    }

    /// Fetch a single record from the backend without touching local state.
    pub fn fetch(&self, transport: &impl Transport, id: Uuid) -> Result<Todo, ApiError> {
        let request = self.client.build_get_todo(id);
        self.client.parse_get_todo(transport.execute(request)?)
    }

    /// Create a todo and append the backend's record to the collection.
    ///
    /// A blank or whitespace-only title is skipped: nothing is sent and
    /// `Ok(None)` is returned. The effective due timestamp is
    /// `combine(date, time)` when a date is given (time defaults to
    /// midnight) and the current local instant otherwise.
    pub fn add(
        &mut self,
        transport: &impl Transport,
        title: &str,
        due_date: Option<NaiveDate>,
        due_time: Option<NaiveTime>,
        clock: Clock,
    ) -> Result<Option<&Todo>, ApiError> {
        if title.trim().is_empty() {
            return Ok(None);
        }
        let due = match due_date {
            Some(date) => schedule::combine(date, due_time),
            None => clock.local,
        };
        let input = CreateTodo {
            title: title.to_string(),
            completed: false,
            created_at: clock.utc,
            due_date: Some(due.into()),
        };
        let request = self.client.build_create_todo(&input)?;
        let created = self.client.parse_create_todo(transport.execute(request)?)?;
        self.todos.push(created);
        Ok(self.todos.last())
    }

    /// Flip one item's completion flag.
    pub fn toggle(&mut self, transport: &impl Transport, id: Uuid) -> Result<&Todo, ApiError> {
        let completed = self.get(id).ok_or(ApiError::NotFound)?.completed;
        let patch = TodoPatch {
            completed: Some(!completed),
            ..TodoPatch::default()
        };
        self.update(transport, id, &patch)
    }

    /// Send a partial update and replace the local record with the
    /// backend's merged result.
    pub fn update(
        &mut self,
        transport: &impl Transport,
        id: Uuid,
        patch: &TodoPatch,
    ) -> Result<&Todo, ApiError> {
        let index = self
            .todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or(ApiError::NotFound)?;
        let request = self.client.build_update_todo(id, patch)?;
        let updated = self.client.parse_update_todo(transport.execute(request)?)?;
        self.todos[index] = updated;
        Ok(&self.todos[index])
    }

    /// Delete an item. The collection keeps it if the backend refuses.
    pub fn remove(&mut self, transport: &impl Transport, id: Uuid) -> Result<(), ApiError> {
        let request = self.client.build_delete_todo(id);
        self.client.parse_delete_todo(transport.execute(request)?)?;
        self.todos.retain(|todo| todo.id != id);
        Ok(())
    }
}
