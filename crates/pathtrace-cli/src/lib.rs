//! pathtrace CLI library.
//!
//! Subcommand handlers, output rendering and terminal styling for the
//! `pathtrace` binary. Handlers return rendered strings; `main.rs` prints them.

pub mod commands;
pub mod output;
pub mod terminal;
