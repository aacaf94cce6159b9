//! Engine entry points
//!
//! `engine_command` is the write path (one command, one persisted mutation);
//! `engine_query` is the read path.

pub mod engine_command;
pub mod engine_query;

pub use engine_command::{apply_engine_command, EngineCommandResult};
