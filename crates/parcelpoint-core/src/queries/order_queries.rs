//! Read-only queries over the order collection

use crate::model::Order;

/// List orders, optionally narrowed to one customer
///
/// # Arguments
/// * `orders` - Full order collection in storage order
/// * `customer_id` - Customer to narrow to, or `0` for all customers
/// * `last_n` - Keep only the final `n` entries of the filtered list
///
/// # Returns
/// Matching orders, oldest first
pub fn list_orders(orders: &[Order], customer_id: u64, last_n: Option<usize>) -> Vec<Order> {
    let mut matched: Vec<Order> = orders
        .iter()
        .filter(|o| customer_id == 0 || o.customer_id == customer_id)
        .cloned()
        .collect();

    if let Some(n) = last_n {
        if n < matched.len() {
            matched.drain(..matched.len() - n);
        }
    }

    matched
}

/// List one page of customer-returned orders
///
/// # Arguments
/// * `orders` - Full order collection in storage order
/// * `customer_id` - Customer to narrow to, or `0` for all customers
/// * `page` - Zero-based page index
/// * `page_size` - Records per page
///
/// # Returns
/// The requested page; empty when the page starts past the end
pub fn list_returns(
    orders: &[Order],
    customer_id: u64,
    page: usize,
    page_size: usize,
) -> Vec<Order> {
    let matched: Vec<&Order> = orders
        .iter()
        .filter(|o| o.returned && (customer_id == 0 || o.customer_id == customer_id))
        .collect();

    let start = page.saturating_mul(page_size);
    if start >= matched.len() {
        return Vec::new();
    }
    let end = start.saturating_add(page_size).min(matched.len());

    matched[start..end].iter().map(|o| (*o).clone()).collect()
}
