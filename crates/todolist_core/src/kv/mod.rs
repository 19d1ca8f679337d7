//! Key-value persistence layer.
//!
//! # Responsibility
//! - Define the durable slot-storage contract consumed by the store layer.
//! - Isolate SQLite query details from store/service orchestration.
//!
//! # Invariants
//! - The contract is exactly two operations: read a slot, replace a slot.
//! - Implementations return semantic schema errors in addition to DB
//!   transport errors.

pub mod slot_repo;
