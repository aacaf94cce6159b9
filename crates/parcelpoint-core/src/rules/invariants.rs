//! Structural invariant finders over the order collection
//!
//! Each finder scans the full collection and reports every violation it can
//! see. They make no judgement about severity; translating findings into
//! errors is the job of [`crate::rules::validation`].

use std::collections::HashSet;

use crate::model::Order;

/// Find order ids shared by more than one live order
pub fn find_duplicate_live_ids(orders: &[Order]) -> Vec<u64> {
    let mut seen: HashSet<u64> = HashSet::new();
    let mut duplicates = Vec::new();

    for order in orders.iter().filter(|o| o.is_live()) {
        if !seen.insert(order.order_id) && !duplicates.contains(&order.order_id) {
            duplicates.push(order.order_id);
        }
    }

    duplicates
}

/// Find orders marked returned that were never issued
pub fn find_returned_without_issue(orders: &[Order]) -> Vec<u64> {
    orders
        .iter()
        .filter(|o| o.returned && !o.issued)
        .map(|o| o.order_id)
        .collect()
}

/// Find orders carrying both terminal markers
pub fn find_issued_and_deleted(orders: &[Order]) -> Vec<u64> {
    orders
        .iter()
        .filter(|o| o.issued && o.deleted)
        .map(|o| o.order_id)
        .collect()
}

/// Find orders whose issue flag disagrees with their issue date
pub fn find_issue_date_inconsistencies(orders: &[Order]) -> Vec<u64> {
    orders
        .iter()
        .filter(|o| (o.issued && o.issued_date.is_empty()) || (!o.issued && !o.issued_date.is_empty()))
        .map(|o| o.order_id)
        .collect()
}
