//! FFI crate exposing the todo core to the Flutter UI.

pub mod api;
