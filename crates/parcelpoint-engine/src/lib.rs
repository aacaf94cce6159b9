//! # ParcelPoint Engine
//!
//! Orchestration between the pure lifecycle core and the flat-file store.
//! Each command is one transaction: load the full collection, decide against
//! it, apply the mutation, persist the result. Nothing is persisted for a
//! rejected command, and the store is the only state between calls.

pub mod commands;

pub use commands::engine_query;
pub use commands::{apply_engine_command, EngineCommandResult};
