//! Todo use-case service.
//!
//! # Responsibility
//! - Provide the two mutating operations of the app: append and toggle.
//! - Delegate state ownership to the persisted store.
//!
//! # Invariants
//! - Appends always go to the end of the list with a fresh id and
//!   `done = false`.
//! - Empty or whitespace-only input never mutates state.
//! - Toggle changes exactly one item's `done` flag and nothing else.

use crate::kv::slot_repo::KvStore;
use crate::model::todo::{next_todo_id, Todo, TodoId};
use crate::store::todo_store::{LoadOutcome, StoreResult, TodoStore};
use log::info;

/// Use-case wrapper over the persisted todo store.
pub struct TodoService<K: KvStore> {
    store: TodoStore<K>,
}

impl<K: KvStore> TodoService<K> {
    /// Creates a service owning the provided store.
    pub fn new(store: TodoStore<K>) -> Self {
        Self { store }
    }

    /// Loads durable state into the store mirror.
    ///
    /// # Errors
    /// - Propagates durable-read failures from the store unchanged.
    pub fn load(&mut self) -> StoreResult<LoadOutcome> {
        self.store.load()
    }

    /// Current list, freshest-first from the caller's perspective.
    pub fn todos(&self) -> &[Todo] {
        self.store.get()
    }

    /// Appends a new not-done item named `name` at the end of the list.
    ///
    /// # Contract
    /// - Input is trimmed; an empty result is a no-op returning `None`.
    /// - Returns the fresh id of the appended item otherwise.
    pub fn append(&mut self, name: &str) -> Option<TodoId> {
        let id = next_todo_id(self.store.get());
        let todo = match Todo::new(id, name) {
            Ok(todo) => todo,
            Err(_) => {
                // Empty submission is the one locally validated guard; it is
                // a no-op, not an error.
                info!("event=todo_append module=service status=ok outcome=empty_input_noop");
                return None;
            }
        };

        self.store.update(|todos| {
            let mut next = todos.to_vec();
            next.push(todo);
            next
        });
        info!("event=todo_append module=service status=ok id={id}");
        Some(id)
    }

    /// Flips the `done` flag of the item with `id`.
    ///
    /// Returns `false` without mutating anything when no item matches.
    /// Order and all other items are left unchanged.
    pub fn toggle(&mut self, id: TodoId) -> bool {
        if !self.store.get().iter().any(|todo| todo.id == id) {
            info!("event=todo_toggle module=service status=ok id={id} outcome=not_found");
            return false;
        }

        self.store.update(|todos| {
            todos
                .iter()
                .cloned()
                .map(|mut todo| {
                    if todo.id == id {
                        todo.toggle();
                    }
                    todo
                })
                .collect()
        });
        info!("event=todo_toggle module=service status=ok id={id}");
        true
    }
}
