//! FFI crate exposing the note store to the mobile shell.

pub mod api;
