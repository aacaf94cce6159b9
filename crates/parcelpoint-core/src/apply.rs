//! Command decision and mutation application
//!
//! `decide` turns a command into a mutation without touching the snapshot.
//! `apply_mutation` consumes a snapshot and returns the mutated one; on any
//! error the mutation is discarded before a single field was written, so the
//! caller's stored state is never half-changed. `apply` chains the two.

use chrono::{DateTime, Utc};

use crate::commands::Command;
use crate::errors::{ParcelPointError, Result};
use crate::mutation::Mutation;
use crate::ops::{courier_ops, customer_ops, Snapshot};
use crate::rules;

/// Decide whether a command is legal against the current collection
///
/// # Arguments
/// * `snapshot` - Current order collection
/// * `command` - Requested lifecycle change
/// * `now` - Current instant; calendar checks use its UTC date
///
/// # Returns
/// The mutation describing the accepted change
///
/// # Errors
/// Returns the operation-specific validation error; see
/// [`crate::ops::courier_ops`] and [`crate::ops::customer_ops`]
pub fn decide(snapshot: &Snapshot, command: &Command, now: DateTime<Utc>) -> Result<Mutation> {
    match command {
        Command::AcceptOrder {
            order_id,
            customer_id,
            shelf_life,
        } => courier_ops::accept_order(
            snapshot,
            *order_id,
            *customer_id,
            shelf_life,
            now.date_naive(),
        ),
        Command::ReturnOrder { order_id } => {
            courier_ops::return_order(snapshot, *order_id, now.date_naive())
        }
        Command::IssueOrders { order_ids } => {
            customer_ops::issue_orders(snapshot, order_ids, now.date_naive())
        }
        // customer_id is rendering context; the engine resolves by order id
        Command::AcceptReturn { order_id, .. } => {
            customer_ops::accept_return(snapshot, *order_id, now)
        }
    }
}

/// Carry out a mutation, enforcing the terminal-state guards
///
/// Takes ownership of the snapshot and returns the mutated one. Guards run
/// before any field is written and the structural invariants are re-checked
/// afterwards, so an `Err` always means "nothing changed".
///
/// # Arguments
/// * `snapshot` - Collection to mutate
/// * `mutation` - Accepted change to carry out
///
/// # Returns
/// The mutated snapshot
///
/// # Errors
/// * `AlreadyAccepted` / `AcceptedForOtherCustomer` - Append onto a live id
/// * `OrderNotFound` - Target id absent from the collection
/// * `AlreadyReturnedToCourier` - Delete of an already tombstoned order
/// * `IssuedCannotReturn` - Delete of an issued order
/// * `ReturnedToCourierCannotIssue` / `AlreadyIssued` - Illegal issue target
/// * `NeverIssued` / `AlreadyReturned` - Illegal customer-return target
/// * Invariant violations from [`rules::check_snapshot`]
pub fn apply_mutation(mut snapshot: Snapshot, mutation: &Mutation) -> Result<Snapshot> {
    match mutation {
        Mutation::Append(order) => {
            if let Some(existing) = snapshot.find_live(order.order_id) {
                if existing.customer_id == order.customer_id {
                    return Err(ParcelPointError::AlreadyAccepted {
                        order_id: order.order_id,
                        customer_id: order.customer_id,
                    });
                }
                return Err(ParcelPointError::AcceptedForOtherCustomer {
                    order_id: order.order_id,
                    customer_id: existing.customer_id,
                });
            }
            snapshot.push(order.clone());
        }

        Mutation::MarkDeleted { order_id } => {
            let Some(idx) = snapshot.position_live(*order_id) else {
                if snapshot.resolve(*order_id).is_some() {
                    return Err(ParcelPointError::AlreadyReturnedToCourier {
                        order_id: *order_id,
                    });
                }
                return Err(ParcelPointError::OrderNotFound {
                    order_id: *order_id,
                });
            };
            if snapshot.orders[idx].issued {
                return Err(ParcelPointError::IssuedCannotReturn {
                    order_id: *order_id,
                });
            }
            snapshot.orders[idx].deleted = true;
        }

        Mutation::MarkIssued {
            order_ids,
            issued_date,
        } => {
            let mut targets: Vec<usize> = Vec::with_capacity(order_ids.len());
            for &order_id in order_ids {
                let Some(idx) = snapshot.position_live(order_id) else {
                    if snapshot.resolve(order_id).is_some() {
                        return Err(ParcelPointError::ReturnedToCourierCannotIssue { order_id });
                    }
                    return Err(ParcelPointError::OrderNotFound { order_id });
                };
                if snapshot.orders[idx].issued {
                    return Err(ParcelPointError::AlreadyIssued { order_id });
                }
                if !targets.contains(&idx) {
                    targets.push(idx);
                }
            }
            for idx in targets {
                snapshot.orders[idx].issued = true;
                snapshot.orders[idx].issued_date = issued_date.to_string();
            }
        }

        Mutation::MarkReturned { order_id } => {
            let Some(idx) = snapshot.position(*order_id) else {
                return Err(ParcelPointError::OrderNotFound {
                    order_id: *order_id,
                });
            };
            if !snapshot.orders[idx].issued {
                return Err(ParcelPointError::NeverIssued {
                    order_id: *order_id,
                });
            }
            if snapshot.orders[idx].returned {
                return Err(ParcelPointError::AlreadyReturned {
                    order_id: *order_id,
                });
            }
            snapshot.orders[idx].returned = true;
        }
    }

    rules::check_snapshot(&snapshot)?;
    Ok(snapshot)
}

/// Decide a command and carry out the resulting mutation
///
/// # Errors
/// Any error from [`decide`] or [`apply_mutation`]
pub fn apply(snapshot: Snapshot, command: &Command, now: DateTime<Utc>) -> Result<Snapshot> {
    let mutation = decide(&snapshot, command, now)?;
    let next = apply_mutation(snapshot, &mutation)?;
    tracing::debug!(?mutation, orders = next.len(), "mutation applied");
    Ok(next)
}
