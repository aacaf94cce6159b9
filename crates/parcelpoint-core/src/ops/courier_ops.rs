//! Courier-side operations: accepting orders and returning expired ones

use chrono::NaiveDate;

use crate::errors::{ParcelPointError, Result};
use crate::model::Order;
use crate::mutation::Mutation;
use crate::ops::Snapshot;

/// Decide whether a new order can be taken onto the shelf
///
/// # Arguments
/// * `snapshot` - Current order collection
/// * `order_id` - Courier-assigned identifier
/// * `customer_id` - Owning customer
/// * `shelf_life` - Last holding day as `YYYY-MM-DD`
/// * `today` - Acceptance day
///
/// # Returns
/// The `Append` mutation carrying the new order
///
/// # Errors
/// * `InvalidShelfLife` - If `shelf_life` is not a `YYYY-MM-DD` date
/// * `ShelfLifeInPast` - If the shelf life ends before `today`
/// * `AlreadyAccepted` - If a live order with this id exists for the same customer
/// * `AcceptedForOtherCustomer` - If a live order with this id exists for another customer
pub fn accept_order(
    snapshot: &Snapshot,
    order_id: u64,
    customer_id: u64,
    shelf_life: &str,
    today: NaiveDate,
) -> Result<Mutation> {
    let candidate = Order::accepted(order_id, customer_id, shelf_life);

    let shelf = candidate.shelf_life_date()?;
    if shelf < today {
        return Err(ParcelPointError::ShelfLifeInPast {
            order_id,
            date: shelf,
        });
    }

    if let Some(existing) = snapshot.find_live(order_id) {
        if existing.customer_id == customer_id {
            return Err(ParcelPointError::AlreadyAccepted {
                order_id,
                customer_id,
            });
        }
        return Err(ParcelPointError::AcceptedForOtherCustomer {
            order_id,
            customer_id: existing.customer_id,
        });
    }

    Ok(Mutation::Append(candidate))
}

/// Decide whether an order can be handed back to the courier
///
/// Only live, unissued orders whose shelf life has run out qualify.
///
/// # Arguments
/// * `snapshot` - Current order collection
/// * `order_id` - Order to return
/// * `today` - Day of the return
///
/// # Returns
/// The `MarkDeleted` mutation tombstoning the order
///
/// # Errors
/// * `OrderNotFound` - If no live order carries this id
/// * `IssuedCannotReturn` - If the order was already handed to the customer
/// * `InvalidShelfLife` - If the stored shelf life cannot be parsed
/// * `ShelfLifeNotExpired` - If the shelf life runs past `today`
pub fn return_order(snapshot: &Snapshot, order_id: u64, today: NaiveDate) -> Result<Mutation> {
    let order = snapshot
        .find_live(order_id)
        .ok_or(ParcelPointError::OrderNotFound { order_id })?;

    if order.issued {
        return Err(ParcelPointError::IssuedCannotReturn { order_id });
    }

    let shelf = order.shelf_life_date()?;
    if shelf > today {
        return Err(ParcelPointError::ShelfLifeNotExpired {
            order_id,
            date: shelf,
        });
    }

    Ok(Mutation::MarkDeleted { order_id })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_accept_order_rejects_unparseable_shelf_life() {
        let snapshot = Snapshot::default();
        let result = accept_order(&snapshot, 1, 10, "2026-13-40", day(2026, 8, 1));
        assert!(matches!(
            result,
            Err(ParcelPointError::InvalidShelfLife { order_id: 1, .. })
        ));
    }

    #[test]
    fn test_accept_order_allows_shelf_life_today() {
        let snapshot = Snapshot::default();
        let result = accept_order(&snapshot, 1, 10, "2026-08-01", day(2026, 8, 1));
        assert!(matches!(result, Ok(Mutation::Append(_))));
    }

    #[test]
    fn test_return_order_requires_expired_shelf_life() {
        let snapshot = Snapshot::new(vec![Order::accepted(1, 10, "2026-08-05")]);

        let early = return_order(&snapshot, 1, day(2026, 8, 4));
        assert!(matches!(
            early,
            Err(ParcelPointError::ShelfLifeNotExpired { order_id: 1, .. })
        ));

        let on_day = return_order(&snapshot, 1, day(2026, 8, 5));
        assert_eq!(on_day.unwrap(), Mutation::MarkDeleted { order_id: 1 });
    }
}
