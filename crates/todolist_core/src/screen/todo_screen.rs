//! Todo screen state.
//!
//! # Responsibility
//! - Own the transient entry text and the submit/toggle interactions.
//! - Derive render rows from the persisted list.
//!
//! # Invariants
//! - The screen holds no list state of its own; every mutation goes through
//!   the service with a derived list.
//! - The entry text is cleared only when a submit actually appended.

use crate::kv::slot_repo::KvStore;
use crate::model::todo::TodoId;
use crate::service::todo_service::TodoService;
use crate::store::todo_store::{LoadOutcome, StoreResult};

/// Render model for one list row.
///
/// `done` drives the strikethrough style in the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    pub id: TodoId,
    pub name: String,
    pub done: bool,
}

/// State of the single todo screen: entry text plus the persisted list.
pub struct TodoScreen<K: KvStore> {
    input: String,
    service: TodoService<K>,
}

impl<K: KvStore> TodoScreen<K> {
    /// Creates a screen with empty entry text over the given service.
    pub fn new(service: TodoService<K>) -> Self {
        Self {
            input: String::new(),
            service,
        }
    }

    /// Loads persisted state; called once when the screen mounts.
    ///
    /// # Errors
    /// - Propagates durable-read failures unchanged.
    pub fn load(&mut self) -> StoreResult<LoadOutcome> {
        self.service.load()
    }

    /// Current entry text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replaces the entry text as the user types.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Submits the entry text as a new item.
    ///
    /// Empty or whitespace-only text is a no-op and keeps the entry text
    /// untouched; on success the entry text is cleared and the fresh id is
    /// returned.
    pub fn submit(&mut self) -> Option<TodoId> {
        let id = self.service.append(&self.input)?;
        self.input.clear();
        Some(id)
    }

    /// Toggles the tapped row; returns whether a row matched.
    pub fn toggle(&mut self, id: TodoId) -> bool {
        self.service.toggle(id)
    }

    /// Rows in list order for rendering.
    pub fn rows(&self) -> Vec<TodoRow> {
        self.service
            .todos()
            .iter()
            .map(|todo| TodoRow {
                id: todo.id,
                name: todo.name.clone(),
                done: todo.done,
            })
            .collect()
    }
}
