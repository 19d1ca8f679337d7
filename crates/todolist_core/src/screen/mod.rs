//! Screen-level state for the single todo screen.
//!
//! # Responsibility
//! - Hold transient UI state (the entry text) outside the persisted list.
//! - Map list items to render models for the presentation layer.

pub mod todo_screen;
