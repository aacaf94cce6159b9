//! Customer-side operations: issuing batches and accepting returns

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use crate::errors::{ParcelPointError, Result};
use crate::mutation::Mutation;
use crate::ops::Snapshot;

/// Hours after issuance during which a customer may return an order
pub const RETURN_WINDOW_HOURS: i64 = 48;

/// Decide whether a batch of orders can be handed to one customer
///
/// The batch succeeds as a whole or not at all: the first order that fails a
/// check rejects the entire request and nothing is marked.
///
/// # Arguments
/// * `snapshot` - Current order collection
/// * `order_ids` - Orders requested at the counter
/// * `today` - Day of issuance
///
/// # Returns
/// The `MarkIssued` mutation covering the whole batch
///
/// # Errors
/// * `EmptyIssueBatch` - If no order ids were given
/// * `OrderNotFound` - If an id matches no order at all
/// * `ReturnedToCourierCannotIssue` - If an order was returned to the courier
/// * `AlreadyIssued` - If an order was already handed out
/// * `BatchCustomerMismatch` - If the orders belong to different customers
/// * `InvalidShelfLife` - If a stored shelf life cannot be parsed
/// * `ShelfLifeExpired` - If an order expired before `today`
pub fn issue_orders(snapshot: &Snapshot, order_ids: &[u64], today: NaiveDate) -> Result<Mutation> {
    if order_ids.is_empty() {
        return Err(ParcelPointError::EmptyIssueBatch);
    }

    let mut batch_customer: Option<u64> = None;
    for &order_id in order_ids {
        let order = snapshot
            .resolve(order_id)
            .ok_or(ParcelPointError::OrderNotFound { order_id })?;

        if order.deleted {
            return Err(ParcelPointError::ReturnedToCourierCannotIssue { order_id });
        }
        if order.issued {
            return Err(ParcelPointError::AlreadyIssued { order_id });
        }

        match batch_customer {
            None => batch_customer = Some(order.customer_id),
            Some(expected) if order.customer_id != expected => {
                return Err(ParcelPointError::BatchCustomerMismatch {
                    order_id,
                    customer_id: order.customer_id,
                    expected_customer_id: expected,
                });
            }
            Some(_) => {}
        }

        let shelf = order.shelf_life_date()?;
        if shelf < today {
            return Err(ParcelPointError::ShelfLifeExpired {
                order_id,
                date: shelf,
            });
        }
    }

    Ok(Mutation::MarkIssued {
        order_ids: order_ids.to_vec(),
        issued_date: today,
    })
}

/// Decide whether a customer return can be taken back
///
/// Returns are accepted within [`RETURN_WINDOW_HOURS`] of issuance, counted
/// from midnight UTC of the recorded issue day.
///
/// # Arguments
/// * `snapshot` - Current order collection
/// * `order_id` - Order the customer brought back
/// * `now` - Moment of the return attempt
///
/// # Returns
/// The `MarkReturned` mutation for the order
///
/// # Errors
/// * `OrderNotFound` - If the id matches no order
/// * `NeverIssued` - If the order was never handed out
/// * `AlreadyReturned` - If the customer already returned it
/// * `InvalidIssuedDate` - If the stored issue date cannot be parsed
/// * `ReturnWindowExpired` - If more than the allowed hours have passed
pub fn accept_return(snapshot: &Snapshot, order_id: u64, now: DateTime<Utc>) -> Result<Mutation> {
    let order = snapshot
        .resolve(order_id)
        .ok_or(ParcelPointError::OrderNotFound { order_id })?;

    if !order.issued {
        return Err(ParcelPointError::NeverIssued { order_id });
    }
    if order.returned {
        return Err(ParcelPointError::AlreadyReturned { order_id });
    }

    let issued_on = order.issued_on()?;
    let issued_at = issued_on.and_time(NaiveTime::MIN).and_utc();
    if now.signed_duration_since(issued_at) > Duration::hours(RETURN_WINDOW_HOURS) {
        return Err(ParcelPointError::ReturnWindowExpired {
            order_id,
            issued_date: issued_on,
            limit_hours: RETURN_WINDOW_HOURS,
        });
    }

    Ok(Mutation::MarkReturned { order_id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Order;
    use chrono::TimeZone;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn issued(order_id: u64, customer_id: u64, issued_date: &str) -> Order {
        let mut order = Order::accepted(order_id, customer_id, "2026-12-31");
        order.issued = true;
        order.issued_date = issued_date.to_string();
        order
    }

    #[test]
    fn test_issue_orders_rejects_empty_batch() {
        let snapshot = Snapshot::default();
        let result = issue_orders(&snapshot, &[], day(2026, 8, 1));
        assert_eq!(result.unwrap_err(), ParcelPointError::EmptyIssueBatch);
    }

    #[test]
    fn test_issue_orders_rejects_mixed_customers() {
        let snapshot = Snapshot::new(vec![
            Order::accepted(1, 10, "2026-12-31"),
            Order::accepted(2, 20, "2026-12-31"),
        ]);

        let result = issue_orders(&snapshot, &[1, 2], day(2026, 8, 1));
        assert_eq!(
            result.unwrap_err(),
            ParcelPointError::BatchCustomerMismatch {
                order_id: 2,
                customer_id: 20,
                expected_customer_id: 10,
            }
        );
    }

    #[test]
    fn test_issue_orders_marks_whole_batch() {
        let snapshot = Snapshot::new(vec![
            Order::accepted(1, 10, "2026-12-31"),
            Order::accepted(2, 10, "2026-12-31"),
        ]);

        let mutation = issue_orders(&snapshot, &[1, 2], day(2026, 8, 1)).unwrap();
        assert_eq!(
            mutation,
            Mutation::MarkIssued {
                order_ids: vec![1, 2],
                issued_date: day(2026, 8, 1),
            }
        );
    }

    #[test]
    fn test_accept_return_within_window() {
        let snapshot = Snapshot::new(vec![issued(1, 10, "2026-08-01")]);
        let now = Utc.with_ymd_and_hms(2026, 8, 2, 23, 0, 0).unwrap();

        let mutation = accept_return(&snapshot, 1, now).unwrap();
        assert_eq!(mutation, Mutation::MarkReturned { order_id: 1 });
    }

    #[test]
    fn test_accept_return_after_window_fails() {
        let snapshot = Snapshot::new(vec![issued(1, 10, "2026-08-01")]);
        let now = Utc.with_ymd_and_hms(2026, 8, 3, 1, 0, 0).unwrap();

        let result = accept_return(&snapshot, 1, now);
        assert!(matches!(
            result,
            Err(ParcelPointError::ReturnWindowExpired {
                order_id: 1,
                limit_hours: 48,
                ..
            })
        ));
    }

    #[test]
    fn test_accept_return_at_exact_window_boundary() {
        let snapshot = Snapshot::new(vec![issued(1, 10, "2026-08-01")]);
        let now = Utc.with_ymd_and_hms(2026, 8, 3, 0, 0, 0).unwrap();

        assert!(accept_return(&snapshot, 1, now).is_ok());
    }
}
