//! In-memory snapshot of the full order collection
//!
//! All decisions and mutations run against a Snapshot loaded from storage.
//! Order ids may be reused by the courier once the previous holder was
//! returned, so lookups prefer the live copy and fall back to the most
//! recent tombstoned one.

use crate::model::Order;

/// Owned view of every order known to the pickup point
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub(crate) orders: Vec<Order>,
}

impl Snapshot {
    /// Wrap a loaded order collection
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// Borrow the underlying orders in storage order
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Unwrap into the underlying orders for persistence
    pub fn into_orders(self) -> Vec<Order> {
        self.orders
    }

    /// Number of orders, tombstones included
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Check if the collection holds no orders at all
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Append an order to the collection
    pub fn push(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// Find the live order with this id, if any
    pub fn find_live(&self, order_id: u64) -> Option<&Order> {
        self.orders
            .iter()
            .find(|o| o.order_id == order_id && o.is_live())
    }

    /// Find the order with this id, preferring the live copy
    ///
    /// Falls back to the latest tombstoned copy so callers can tell
    /// "never existed" apart from "already returned to the courier".
    pub fn resolve(&self, order_id: u64) -> Option<&Order> {
        self.find_live(order_id)
            .or_else(|| self.orders.iter().rev().find(|o| o.order_id == order_id))
    }

    /// Index of the live order with this id, if any
    pub fn position_live(&self, order_id: u64) -> Option<usize> {
        self.orders
            .iter()
            .position(|o| o.order_id == order_id && o.is_live())
    }

    /// Index of the order with this id, preferring the live copy
    pub fn position(&self, order_id: u64) -> Option<usize> {
        self.position_live(order_id).or_else(|| {
            self.orders
                .iter()
                .rposition(|o| o.order_id == order_id)
        })
    }
}
