//! CLI command handlers for tally-cli
//!
//! Thin glue between the clap command definitions in `main.rs` and the
//! service layer.

pub mod expense;
pub mod month;

pub use expense::{handle_add, handle_delete, handle_list, handle_total};
pub use month::{handle_clear_history, handle_history, handle_reset};
