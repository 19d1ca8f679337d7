//! Storage-backed list state.
//!
//! # Responsibility
//! - Provide the write-through in-memory view of the persisted todo list.
//!
//! # Invariants
//! - The in-memory mirror is the freshest value immediately after every
//!   `set`, regardless of durable-write outcome.

pub mod todo_store;
