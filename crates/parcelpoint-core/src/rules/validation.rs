//! Snapshot validation against the structural invariants

use crate::errors::{ParcelPointError, Result};
use crate::ops::Snapshot;
use crate::rules::invariants;

/// Verify the structural invariants of a mutated snapshot
///
/// Runs after every mutation. A violation means the mutation produced a
/// collection no later operation could trust, so the mutation is discarded
/// rather than persisted.
///
/// # Errors
/// * `DuplicateLiveOrder` - Two live orders share one id
/// * `ReturnedWithoutIssue` - An order is returned but was never issued
/// * `IssuedAndDeleted` - An order carries both terminal markers
/// * `IssueDateInconsistent` - Issue flag and issue date disagree
pub fn check_snapshot(snapshot: &Snapshot) -> Result<()> {
    let orders = snapshot.orders();

    if let Some(&order_id) = invariants::find_duplicate_live_ids(orders).first() {
        return Err(ParcelPointError::DuplicateLiveOrder { order_id });
    }
    if let Some(&order_id) = invariants::find_returned_without_issue(orders).first() {
        return Err(ParcelPointError::ReturnedWithoutIssue { order_id });
    }
    if let Some(&order_id) = invariants::find_issued_and_deleted(orders).first() {
        return Err(ParcelPointError::IssuedAndDeleted { order_id });
    }
    if let Some(&order_id) = invariants::find_issue_date_inconsistencies(orders).first() {
        return Err(ParcelPointError::IssueDateInconsistent { order_id });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Order;

    #[test]
    fn test_clean_snapshot_passes() {
        let mut issued = Order::accepted(2, 10, "2026-12-31");
        issued.issued = true;
        issued.issued_date = "2026-08-01".to_string();

        let snapshot = Snapshot::new(vec![Order::accepted(1, 10, "2026-12-31"), issued]);
        assert!(check_snapshot(&snapshot).is_ok());
    }

    #[test]
    fn test_duplicate_live_id_rejected() {
        let snapshot = Snapshot::new(vec![
            Order::accepted(1, 10, "2026-12-31"),
            Order::accepted(1, 20, "2026-12-31"),
        ]);

        assert_eq!(
            check_snapshot(&snapshot).unwrap_err(),
            ParcelPointError::DuplicateLiveOrder { order_id: 1 }
        );
    }

    #[test]
    fn test_returned_without_issue_rejected() {
        let mut bad = Order::accepted(3, 10, "2026-12-31");
        bad.returned = true;
        let snapshot = Snapshot::new(vec![bad]);

        assert_eq!(
            check_snapshot(&snapshot).unwrap_err(),
            ParcelPointError::ReturnedWithoutIssue { order_id: 3 }
        );
    }
}
