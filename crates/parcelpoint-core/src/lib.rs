//! # ParcelPoint Core
//!
//! Pure decision logic for the pickup-point order lifecycle. The crate owns
//! the `Order` model, the command/mutation vocabulary, the validation rules,
//! and the error taxonomy shared by the rest of the workspace. It performs
//! no I/O: callers load the collection, hand it in as a [`Snapshot`], and
//! persist whatever [`apply`] hands back.
//!
//! An order runs `accepted → issued → returned by customer` or
//! `accepted → returned to courier`. Both end states are tombstones; nothing
//! is ever removed from the collection, and a courier may reuse an order id
//! once the prior holder was tombstoned.
//!
//! ## Example
//!
//! ```
//! use chrono::Utc;
//! use parcelpoint_core::{apply, Command, Snapshot};
//!
//! let accept = Command::AcceptOrder {
//!     order_id: 1,
//!     customer_id: 10,
//!     shelf_life: "2099-12-31".to_string(),
//! };
//! let snapshot = apply(Snapshot::default(), &accept, Utc::now()).unwrap();
//! assert_eq!(snapshot.len(), 1);
//! ```

pub mod apply;
pub mod commands;
pub mod errors;
pub mod logging;
pub mod model;
pub mod mutation;
pub mod ops;
pub mod queries;
pub mod rules;

pub use apply::{apply, apply_mutation, decide};
pub use commands::Command;
pub use errors::{ParcelPointError, Result};
pub use model::Order;
pub use mutation::Mutation;
pub use ops::Snapshot;
