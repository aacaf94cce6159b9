//! Engine round trips against a real store file

use chrono::{Duration, Utc};
use parcelpoint_core::{Command, ParcelPointError};
use parcelpoint_engine::{apply_engine_command, engine_query, EngineCommandResult};
use parcelpoint_store::OrderFile;
use tempfile::TempDir;

fn days_from_now(days: i64) -> String {
    (Utc::now().date_naive() + Duration::days(days)).to_string()
}

fn accept(order_id: u64, customer_id: u64, shelf_life: String) -> Command {
    Command::AcceptOrder {
        order_id,
        customer_id,
        shelf_life,
    }
}

#[test]
fn test_accept_persists_one_record() {
    // GIVEN an empty store
    let dir = TempDir::new().unwrap();
    let store = OrderFile::new(dir.path().join("orders.json"));

    // WHEN an order is accepted
    let result = apply_engine_command(accept(5, 77, days_from_now(3)), &store).unwrap();

    // THEN the result and the store both carry the new order
    assert!(matches!(
        result,
        EngineCommandResult::OrderAccepted {
            order_id: 5,
            customer_id: 77,
            ..
        }
    ));
    let stored = store.list_all(0).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].order_id, 5);
}

#[test]
fn test_duplicate_accept_leaves_single_record() {
    // GIVEN a store holding order 5
    let dir = TempDir::new().unwrap();
    let store = OrderFile::new(dir.path().join("orders.json"));
    apply_engine_command(accept(5, 77, days_from_now(3)), &store).unwrap();

    // WHEN the same order arrives again
    let result = apply_engine_command(accept(5, 77, days_from_now(3)), &store);

    // THEN the command fails and nothing extra was written
    assert_eq!(
        result.unwrap_err(),
        ParcelPointError::AlreadyAccepted {
            order_id: 5,
            customer_id: 77,
        }
    );
    assert_eq!(store.list_all(0).unwrap().len(), 1);
}

#[test]
fn test_mixed_customer_batch_persists_nothing() {
    // GIVEN orders for two customers
    let dir = TempDir::new().unwrap();
    let store = OrderFile::new(dir.path().join("orders.json"));
    apply_engine_command(accept(1, 10, days_from_now(3)), &store).unwrap();
    apply_engine_command(accept(2, 20, days_from_now(3)), &store).unwrap();

    // WHEN both are requested in one batch
    let result = apply_engine_command(
        Command::IssueOrders {
            order_ids: vec![1, 2],
        },
        &store,
    );

    // THEN the batch fails and no stored order was marked
    assert!(result.is_err());
    assert!(store.list_all(0).unwrap().iter().all(|o| !o.issued));
}

#[test]
fn test_full_lifecycle_against_store() {
    // GIVEN an accepted and issued order
    let dir = TempDir::new().unwrap();
    let store = OrderFile::new(dir.path().join("orders.json"));
    apply_engine_command(accept(1, 10, days_from_now(5)), &store).unwrap();

    let issued = apply_engine_command(
        Command::IssueOrders {
            order_ids: vec![1],
        },
        &store,
    )
    .unwrap();
    assert!(matches!(
        issued,
        EngineCommandResult::OrdersIssued {
            customer_id: 10,
            ..
        }
    ));

    // WHEN the customer returns it the same day
    let returned = apply_engine_command(
        Command::AcceptReturn {
            order_id: 1,
            customer_id: 10,
        },
        &store,
    )
    .unwrap();

    // THEN the stored record carries the full history
    assert!(matches!(
        returned,
        EngineCommandResult::ReturnAccepted {
            order_id: 1,
            customer_id: 10,
        }
    ));
    let stored = store.list_all(0).unwrap();
    assert!(stored[0].issued);
    assert!(stored[0].returned);
    assert!(!stored[0].deleted);
}

#[test]
fn test_courier_return_tombstones_expired_order() {
    // GIVEN an order whose shelf life ends today
    let dir = TempDir::new().unwrap();
    let store = OrderFile::new(dir.path().join("orders.json"));
    apply_engine_command(accept(1, 10, days_from_now(0)), &store).unwrap();

    // WHEN the courier takes it back
    let result = apply_engine_command(Command::ReturnOrder { order_id: 1 }, &store).unwrap();

    // THEN the stored record is tombstoned, not removed
    assert!(matches!(
        result,
        EngineCommandResult::OrderReturnedToCourier { order_id: 1 }
    ));
    let stored = store.list_all(0).unwrap();
    assert_eq!(stored.len(), 1);
    assert!(stored[0].deleted);
}

#[test]
fn test_queries_read_through_the_store() {
    let dir = TempDir::new().unwrap();
    let store = OrderFile::new(dir.path().join("orders.json"));
    apply_engine_command(accept(1, 10, days_from_now(3)), &store).unwrap();
    apply_engine_command(accept(2, 20, days_from_now(3)), &store).unwrap();
    apply_engine_command(accept(3, 10, days_from_now(3)), &store).unwrap();

    let mine = engine_query::list_orders(&store, 10, None).unwrap();
    assert_eq!(mine.len(), 2);

    let last_one = engine_query::list_orders(&store, 10, Some(1)).unwrap();
    assert_eq!(last_one.len(), 1);
    assert_eq!(last_one[0].order_id, 3);

    assert!(engine_query::list_returns(&store, 10, 0, 10)
        .unwrap()
        .is_empty());
}
