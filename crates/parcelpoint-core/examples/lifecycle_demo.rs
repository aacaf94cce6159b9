//! Walk one order through the full pickup-point lifecycle.
//!
//! Run with: cargo run --example lifecycle_demo -p parcelpoint-core

#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::{Duration, Utc};
use parcelpoint_core::{apply, Command, Snapshot};

fn main() {
    let now = Utc::now();
    let shelf_life = (now.date_naive() + Duration::days(5)).to_string();

    println!("=== ParcelPoint Lifecycle Demo ===\n");

    println!("1. Courier drops off order 42 for customer 7 (shelf life {shelf_life})");
    let accept = Command::AcceptOrder {
        order_id: 42,
        customer_id: 7,
        shelf_life,
    };
    let snapshot = apply(Snapshot::default(), &accept, now).expect("accept should succeed");
    println!("   ✓ accepted, collection holds {} order(s)\n", snapshot.len());

    println!("2. Customer 7 picks the order up at the counter");
    let issue = Command::IssueOrders {
        order_ids: vec![42],
    };
    let snapshot = apply(snapshot, &issue, now).expect("issue should succeed");
    let order = &snapshot.orders()[0];
    println!("   ✓ issued on {}\n", order.issued_date);

    println!("3. Customer 7 brings the order back the same day");
    let take_back = Command::AcceptReturn {
        order_id: 42,
        customer_id: 7,
    };
    let snapshot = apply(snapshot, &take_back, now).expect("return should succeed");
    let order = &snapshot.orders()[0];
    println!(
        "   ✓ returned (issued: {}, returned: {}, deleted: {})\n",
        order.issued, order.returned, order.deleted
    );

    println!("4. A second return of the same order is rejected");
    let err = apply(snapshot, &take_back, now).unwrap_err();
    println!("   ✓ rejected: {err}");
}
