//! Read-only queries
//!
//! Queries take the order collection as a plain slice so callers can run
//! them against a freshly loaded file or an in-memory snapshot alike.

pub mod order_queries;

pub use order_queries::{list_orders, list_returns};
