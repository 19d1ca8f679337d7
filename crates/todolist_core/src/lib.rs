//! Core domain logic for the persisted todo list app.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod kv;
pub mod logging;
pub mod model;
pub mod screen;
pub mod service;
pub mod store;

pub use kv::slot_repo::{KvError, KvResult, KvStore, SqliteKvStore};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::{next_todo_id, Todo, TodoId, TodoValidationError};
pub use screen::todo_screen::{TodoRow, TodoScreen};
pub use service::todo_service::TodoService;
pub use store::todo_store::{LoadOutcome, StoreError, StoreResult, TodoStore};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
