//! Mutations produced by the decision layer
//!
//! A Mutation is the full description of one accepted change. It is computed
//! by [`crate::apply::decide`] without touching the collection, then carried
//! out by [`crate::apply::apply_mutation`].

use chrono::NaiveDate;

use crate::model::Order;

/// One accepted change to the order collection
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// Add a freshly accepted order
    Append(Order),

    /// Tombstone a live order as returned to the courier
    MarkDeleted { order_id: u64 },

    /// Mark a batch of orders as issued on the given day
    MarkIssued {
        order_ids: Vec<u64>,
        issued_date: NaiveDate,
    },

    /// Mark an issued order as returned by the customer
    MarkReturned { order_id: u64 },
}
