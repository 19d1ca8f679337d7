//! Domain model for the persisted todo list.
//!
//! # Responsibility
//! - Define the canonical todo record used by core business logic.
//! - Own validation and id-assignment rules for new items.
//!
//! # Invariants
//! - Every item is identified by an integer `TodoId`, unique within its list.
//! - `done` is the only field ever mutated after creation.

pub mod todo;
