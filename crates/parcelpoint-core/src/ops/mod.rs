//! Decision operations over an order snapshot
//!
//! Each operation validates one command against the current collection and,
//! on success, returns the [`crate::mutation::Mutation`] describing the
//! change. Operations never modify the snapshot they inspect.

pub mod courier_ops;
pub mod customer_ops;
pub mod snapshot;

pub use snapshot::Snapshot;
