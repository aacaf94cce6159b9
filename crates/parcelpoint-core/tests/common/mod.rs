//! Shared builders for order lifecycle tests

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use parcelpoint_core::{Order, Snapshot};

/// Fixed instant used across tests: 2026-08-10 12:00:00 UTC
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 10, 12, 0, 0).unwrap()
}

/// Calendar date `days` away from the fixed test instant, as stored
pub fn days_from_today(days: i64) -> String {
    (test_now().date_naive() + Duration::days(days)).to_string()
}

/// Order sitting on the shelf, not yet issued
pub fn accepted_order(order_id: u64, customer_id: u64, shelf_life: &str) -> Order {
    Order::accepted(order_id, customer_id, shelf_life)
}

/// Order already handed to the customer on `issued_date`
pub fn issued_order(order_id: u64, customer_id: u64, issued_date: &str) -> Order {
    let mut order = Order::accepted(order_id, customer_id, days_from_today(30));
    order.issued = true;
    order.issued_date = issued_date.to_string();
    order
}

/// Order the customer already returned
pub fn returned_order(order_id: u64, customer_id: u64) -> Order {
    let mut order = issued_order(order_id, customer_id, &days_from_today(0));
    order.returned = true;
    order
}

/// Order already handed back to the courier
pub fn deleted_order(order_id: u64, customer_id: u64) -> Order {
    let mut order = Order::accepted(order_id, customer_id, days_from_today(-5));
    order.deleted = true;
    order
}

/// Snapshot over a literal order list
pub fn snapshot_of(orders: Vec<Order>) -> Snapshot {
    Snapshot::new(orders)
}
