//! Persisted todo-list store.
//!
//! # Responsibility
//! - Mirror one key-value slot as an in-memory todo list.
//! - Write through on every mutation; load durable state on demand.
//!
//! # Invariants
//! - Construction performs no I/O; the mirror starts at the default.
//! - `set`/`update` refresh the mirror before touching durable storage, so
//!   readers observe the new value even when the write fails.
//! - A load never overwrites a mirror that a `set` already refreshed.
//! - Malformed persisted data is recovered to the default, never surfaced
//!   as an error to callers.

use crate::kv::slot_repo::{KvError, KvStore};
use crate::model::todo::Todo;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-layer error. Only durable-read transport failures surface here;
/// write failures are swallowed by contract (see [`TodoStore::set`]).
#[derive(Debug)]
pub enum StoreError {
    Kv(KvError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Kv(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Kv(err) => Some(err),
        }
    }
}

impl From<KvError> for StoreError {
    fn from(value: KvError) -> Self {
        Self::Kv(value)
    }
}

/// What a [`TodoStore::load`] call did to the mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Slot held a valid document; mirror replaced with it.
    Loaded,
    /// Slot was never written; mirror keeps the default.
    Absent,
    /// Slot held a malformed document; mirror keeps the default and a
    /// warning was logged.
    RecoveredDefault,
    /// A `set` already happened on this store; the durable value is stale
    /// relative to the mirror and was dropped unread.
    Discarded,
}

/// Read-mostly, write-through view of a todo list stored in one slot.
///
/// The store is the exclusive owner of the in-memory mirror and of the only
/// write path to its slot. Callers mutate the list solely through
/// [`set`](Self::set)/[`update`](Self::update) with a derived list.
pub struct TodoStore<K: KvStore> {
    kv: K,
    key: String,
    mirror: Vec<Todo>,
    default: Vec<Todo>,
    /// True once any `set` happened; guards against a stale load clobbering
    /// a fresher mirror.
    dirty: bool,
}

impl<K: KvStore> TodoStore<K> {
    /// Creates a store bound to `key` with the mirror set to `default`.
    ///
    /// No I/O happens here; durable state arrives only through
    /// [`load`](Self::load). Early readers therefore observe the default
    /// until a load completes.
    pub fn new(kv: K, key: impl Into<String>, default: Vec<Todo>) -> Self {
        Self {
            kv,
            key: key.into(),
            mirror: default.clone(),
            default,
            dirty: false,
        }
    }

    /// The slot key this store is bound to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current in-memory mirror.
    pub fn get(&self) -> &[Todo] {
        &self.mirror
    }

    /// Reads the durable slot and reconciles it into the mirror.
    ///
    /// # Contract
    /// - Absent slot: mirror keeps the default ([`LoadOutcome::Absent`]).
    /// - Valid document: mirror replaced ([`LoadOutcome::Loaded`]).
    /// - Malformed document: logged warning, mirror reset to the default
    ///   ([`LoadOutcome::RecoveredDefault`]).
    /// - Any prior `set` on this store wins over the durable value
    ///   ([`LoadOutcome::Discarded`]); the slot is not even read.
    ///
    /// # Errors
    /// - [`StoreError::Kv`] when the durable read itself fails.
    pub fn load(&mut self) -> StoreResult<LoadOutcome> {
        if self.dirty {
            info!(
                "event=slot_load module=store status=ok key={} outcome=discarded",
                self.key
            );
            return Ok(LoadOutcome::Discarded);
        }

        let Some(raw) = self.kv.get(&self.key)? else {
            info!(
                "event=slot_load module=store status=ok key={} outcome=absent",
                self.key
            );
            return Ok(LoadOutcome::Absent);
        };

        match parse_document(&raw) {
            Ok(todos) => {
                info!(
                    "event=slot_load module=store status=ok key={} outcome=loaded items={}",
                    self.key,
                    todos.len()
                );
                self.mirror = todos;
                Ok(LoadOutcome::Loaded)
            }
            Err(err) => {
                warn!(
                    "event=slot_load module=store status=warn key={} outcome=recovered_default error={err}",
                    self.key
                );
                self.mirror = self.default.clone();
                Ok(LoadOutcome::RecoveredDefault)
            }
        }
    }

    /// Replaces the list with a literal new value.
    ///
    /// Side effects, in order: the mirror is refreshed synchronously, then
    /// the serialized document is written to the slot. A write failure is
    /// logged and otherwise ignored; there is no retry and the mirror is
    /// not rolled back, so the durable slot may silently lag the mirror.
    pub fn set(&mut self, todos: Vec<Todo>) {
        self.mirror = todos;
        self.dirty = true;
        self.persist_mirror();
    }

    /// Replaces the list with the result of a pure updater applied to the
    /// current mirror.
    ///
    /// The updater runs synchronously against the mirror, never against the
    /// durable value, so rapid successive updates always compose.
    pub fn update(&mut self, updater: impl FnOnce(&[Todo]) -> Vec<Todo>) {
        let next = updater(&self.mirror);
        self.set(next);
    }

    fn persist_mirror(&self) {
        let document = match serde_json::to_string(&self.mirror) {
            Ok(document) => document,
            Err(err) => {
                warn!(
                    "event=slot_write module=store status=warn key={} error_code=serialize_failed error={err}",
                    self.key
                );
                return;
            }
        };

        match self.kv.set(&self.key, &document) {
            Ok(()) => info!(
                "event=slot_write module=store status=ok key={} items={}",
                self.key,
                self.mirror.len()
            ),
            Err(err) => warn!(
                "event=slot_write module=store status=warn key={} error_code=write_failed error={err}",
                self.key
            ),
        }
    }
}

fn parse_document(raw: &str) -> Result<Vec<Todo>, serde_json::Error> {
    // Todo's validating deserialization already rejects empty names, so a
    // parsed document is a valid list.
    serde_json::from_str::<Vec<Todo>>(raw)
}

#[cfg(test)]
mod tests {
    use super::{LoadOutcome, TodoStore};
    use crate::kv::slot_repo::{KvResult, KvStore};
    use crate::model::todo::Todo;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryKv {
        slots: RefCell<HashMap<String, String>>,
    }

    impl KvStore for MemoryKv {
        fn get(&self, key: &str) -> KvResult<Option<String>> {
            Ok(self.slots.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> KvResult<()> {
            self.slots
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn construction_does_not_touch_the_slot() {
        let kv = MemoryKv::default();
        let default = vec![Todo::new(1, "seed").unwrap()];
        let store = TodoStore::new(kv, "tasks", default.clone());

        assert_eq!(store.get(), default.as_slice());
        assert!(store.kv.slots.borrow().is_empty());
    }

    #[test]
    fn document_with_empty_name_is_malformed() {
        let kv = MemoryKv::default();
        kv.set("tasks", r#"[{"id":1,"name":"   ","done":false}]"#)
            .unwrap();

        let mut store = TodoStore::new(kv, "tasks", Vec::new());
        assert_eq!(store.load().unwrap(), LoadOutcome::RecoveredDefault);
        assert!(store.get().is_empty());
    }
}
