//! Todo domain model.
//!
//! # Responsibility
//! - Define the single persisted record: id, name, done flag.
//! - Validate names on construction and on deserialization.
//! - Assign fresh ids for appended items.
//!
//! # Invariants
//! - `name` is non-empty after trimming and immutable after creation.
//! - `id` assignment is strictly monotonic: a fresh id is always greater
//!   than every id already present in the list.
//! - Items are append-only; there is no delete operation anywhere in core.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

/// Identifier for one todo item, unique within its list.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Ids are epoch-millisecond seeded, so lists persisted by earlier app
/// versions keep valid ids.
pub type TodoId = i64;

/// Validation failure for todo construction or deserialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoValidationError {
    /// Name is empty after trimming surrounding whitespace.
    EmptyName,
}

impl Display for TodoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "todo name must be non-empty after trimming"),
        }
    }
}

impl Error for TodoValidationError {}

/// One entry of the persisted todo list.
///
/// Wire shape is exactly `{"id": int, "name": string, "done": bool}`, the
/// format already present in slots written by earlier app versions, so
/// deserialization must stay compatible with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TodoWire")]
pub struct Todo {
    /// Unique within the list; assigned once at creation.
    pub id: TodoId,
    /// Trimmed, non-empty display text. Immutable after creation.
    pub name: String,
    /// Completion flag, the only mutable field.
    pub done: bool,
}

/// Raw wire shape; converted into [`Todo`] through validation.
#[derive(Deserialize)]
struct TodoWire {
    id: TodoId,
    name: String,
    done: bool,
}

impl TryFrom<TodoWire> for Todo {
    type Error = TodoValidationError;

    fn try_from(wire: TodoWire) -> Result<Self, Self::Error> {
        let mut todo = Todo::new(wire.id, wire.name)?;
        todo.done = wire.done;
        Ok(todo)
    }
}

impl Todo {
    /// Creates a new, not-yet-done todo with the given id.
    ///
    /// The name is trimmed before storage.
    ///
    /// # Errors
    /// - [`TodoValidationError::EmptyName`] when the trimmed name is empty.
    pub fn new(id: TodoId, name: impl Into<String>) -> Result<Self, TodoValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(TodoValidationError::EmptyName);
        }
        Ok(Self {
            id,
            name,
            done: false,
        })
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.done = !self.done;
    }

    /// Re-checks construction invariants on an existing record.
    ///
    /// Used by load paths that must reject invalid persisted state instead
    /// of masking it.
    pub fn validate(&self) -> Result<(), TodoValidationError> {
        if self.name.trim().is_empty() {
            return Err(TodoValidationError::EmptyName);
        }
        Ok(())
    }
}

/// Returns a fresh id strictly greater than every id in `existing`.
///
/// Seeded from the wall clock in epoch milliseconds and bumped past the
/// current list maximum, so two appends within the same millisecond can
/// never collide.
pub fn next_todo_id(existing: &[Todo]) -> TodoId {
    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0);
    let floor = existing
        .iter()
        .map(|todo| todo.id)
        .max()
        .map_or(TodoId::MIN, |max_id| max_id.saturating_add(1));
    now_ms.max(floor)
}

#[cfg(test)]
mod tests {
    use super::{next_todo_id, Todo, TodoValidationError};

    #[test]
    fn new_trims_name_and_defaults_done_to_false() {
        let todo = Todo::new(1, "  buy milk  ").unwrap();
        assert_eq!(todo.name, "buy milk");
        assert!(!todo.done);
    }

    #[test]
    fn new_rejects_whitespace_only_name() {
        let err = Todo::new(1, "   \t ").unwrap_err();
        assert_eq!(err, TodoValidationError::EmptyName);
    }

    #[test]
    fn toggle_twice_restores_original_state() {
        let mut todo = Todo::new(7, "water plants").unwrap();
        todo.toggle();
        assert!(todo.done);
        todo.toggle();
        assert!(!todo.done);
    }

    #[test]
    fn next_id_is_fresh_for_every_existing_id() {
        let existing = vec![
            Todo::new(5, "a").unwrap(),
            Todo::new(i64::MAX - 1, "b").unwrap(),
        ];
        let id = next_todo_id(&existing);
        assert!(existing.iter().all(|todo| todo.id != id));
        assert!(id > i64::MAX - 1);
    }
}
