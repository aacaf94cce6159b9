//! Command orchestration: load, decide, apply, persist

use chrono::{NaiveDate, Utc};

use parcelpoint_core::{apply_mutation, decide, Command, Mutation, Result, Snapshot};
use parcelpoint_store::OrderFile;

/// Outcome of a persisted command, carrying what the caller renders
#[derive(Debug, Clone)]
pub enum EngineCommandResult {
    /// A new order is on the shelf
    OrderAccepted {
        order_id: u64,
        customer_id: u64,
        shelf_life: String,
    },
    /// An expired order went back to the courier
    OrderReturnedToCourier { order_id: u64 },
    /// A batch was handed to one customer
    OrdersIssued {
        order_ids: Vec<u64>,
        customer_id: u64,
        issued_date: NaiveDate,
    },
    /// A customer return was taken back
    ReturnAccepted { order_id: u64, customer_id: u64 },
}

/// Run one lifecycle command against the store
///
/// Loads the full collection, decides the command at `Utc::now()`, applies
/// the mutation, and persists: a fresh order is appended, every other
/// mutation replaces the stored collection wholesale. A rejected command
/// leaves the store untouched.
///
/// # Errors
/// Validation errors from the decision layer, or `Io`/`Malformed` from the
/// store
pub fn apply_engine_command(command: Command, store: &OrderFile) -> Result<EngineCommandResult> {
    let orders = store.list_all(0).map_err(|e| {
        tracing::error!(error = %e, path = %store.path().display(), "failed to load order store");
        e
    })?;
    let snapshot = Snapshot::new(orders);
    let now = Utc::now();

    let mutation = decide(&snapshot, &command, now).map_err(|e| {
        tracing::warn!(error = %e, "command rejected");
        e
    })?;

    let result = engine_result(&snapshot, &command, &mutation);
    let next = apply_mutation(snapshot, &mutation)?;

    match &mutation {
        Mutation::Append(order) => store.append_one(order)?,
        _ => store.replace_all(next.orders())?,
    }

    tracing::info!(result = ?result, "order mutation persisted");
    Ok(result)
}

// Must run before apply_mutation takes ownership of the snapshot.
fn engine_result(
    snapshot: &Snapshot,
    command: &Command,
    mutation: &Mutation,
) -> EngineCommandResult {
    match mutation {
        Mutation::Append(order) => EngineCommandResult::OrderAccepted {
            order_id: order.order_id,
            customer_id: order.customer_id,
            shelf_life: order.shelf_life.clone(),
        },
        Mutation::MarkDeleted { order_id } => EngineCommandResult::OrderReturnedToCourier {
            order_id: *order_id,
        },
        Mutation::MarkIssued {
            order_ids,
            issued_date,
        } => EngineCommandResult::OrdersIssued {
            order_ids: order_ids.clone(),
            customer_id: order_ids
                .first()
                .and_then(|id| snapshot.resolve(*id))
                .map_or(0, |o| o.customer_id),
            issued_date: *issued_date,
        },
        Mutation::MarkReturned { order_id } => EngineCommandResult::ReturnAccepted {
            order_id: *order_id,
            customer_id: match command {
                Command::AcceptReturn { customer_id, .. } => *customer_id,
                _ => snapshot.resolve(*order_id).map_or(0, |o| o.customer_id),
            },
        },
    }
}
