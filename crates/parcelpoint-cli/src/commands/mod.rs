//! CLI subcommand implementations

pub mod courier;
pub mod customer;
pub mod list;
