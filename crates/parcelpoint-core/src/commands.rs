//! Commands accepted by the order lifecycle engine
//!
//! A Command carries the caller's intent and nothing else. Deciding whether
//! the intent is allowed against the current collection happens in
//! [`crate::apply::decide`].

/// All state-changing requests a pickup point handles
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Take a new order from the courier onto the shelf
    AcceptOrder {
        order_id: u64,
        customer_id: u64,
        shelf_life: String,
    },

    /// Hand an expired order back to the courier
    ReturnOrder { order_id: u64 },

    /// Hand a batch of orders to one customer, all or nothing
    IssueOrders { order_ids: Vec<u64> },

    /// Take an issued order back from a customer within the return window
    AcceptReturn { order_id: u64, customer_id: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_compare_by_value() {
        let a = Command::ReturnOrder { order_id: 5 };
        let b = Command::ReturnOrder { order_id: 5 };
        assert_eq!(a, b);

        let c = Command::IssueOrders {
            order_ids: vec![1, 2],
        };
        assert_ne!(a, c);
    }
}
