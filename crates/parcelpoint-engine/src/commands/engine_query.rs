//! Read-side queries against the store

use parcelpoint_core::{queries, Order, Result};
use parcelpoint_store::OrderFile;

/// List stored orders, optionally narrowed to one customer
///
/// # Arguments
/// * `store` - Backing order file
/// * `customer_id` - Customer to narrow to, or `0` for all customers
/// * `last_n` - Keep only the final `n` entries of the filtered list
///
/// # Errors
/// * `Io` / `Malformed` - Store read failed
pub fn list_orders(
    store: &OrderFile,
    customer_id: u64,
    last_n: Option<usize>,
) -> Result<Vec<Order>> {
    let orders = store.list_all(0)?;
    Ok(queries::list_orders(&orders, customer_id, last_n))
}

/// List one page of customer returns
///
/// # Errors
/// * `Io` / `Malformed` - Store read failed
pub fn list_returns(
    store: &OrderFile,
    customer_id: u64,
    page: usize,
    page_size: usize,
) -> Result<Vec<Order>> {
    store.list_returns_page(customer_id, page, page_size)
}
