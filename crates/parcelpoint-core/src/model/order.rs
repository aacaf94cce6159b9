use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{ParcelPointError, Result};

/// Order - the single entity tracked by the pickup point
///
/// An Order moves through two legs of a lifecycle: the courier leg
/// (accepted, then possibly returned to the courier once its shelf life has
/// run out) and the customer leg (issued, then possibly returned by the
/// customer). Both terminal states are tombstones; an order is never removed
/// from the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Identifier assigned by the courier-side system; unique among live orders
    pub order_id: u64,

    /// Customer the order belongs to
    pub customer_id: u64,

    /// Last calendar day the order may be held, as an ISO `YYYY-MM-DD` string
    pub shelf_life: String,

    /// True once the order was handed to the customer
    pub issued: bool,

    /// Calendar day of issuance as an ISO string; empty until `issued` is set
    pub issued_date: String,

    /// Tombstone flag - true once the order was returned to the courier
    pub deleted: bool,

    /// True once the customer returned the order; requires `issued`
    pub returned: bool,
}

impl Order {
    /// Create a freshly accepted Order
    ///
    /// # Arguments
    /// * `order_id` - Courier-assigned identifier
    /// * `customer_id` - Owning customer
    /// * `shelf_life` - Last holding day as `YYYY-MM-DD`
    ///
    /// # Returns
    /// A new Order with all lifecycle flags cleared and no issue date
    pub fn accepted(order_id: u64, customer_id: u64, shelf_life: impl Into<String>) -> Self {
        Self {
            order_id,
            customer_id,
            shelf_life: shelf_life.into(),
            issued: false,
            issued_date: String::new(),
            deleted: false,
            returned: false,
        }
    }

    /// Check if this Order is live (not returned to the courier)
    pub fn is_live(&self) -> bool {
        !self.deleted
    }

    /// Parse the stored shelf life into a calendar date
    ///
    /// Dates are persisted as strings so that a bad value surfaces as a
    /// validation error naming the order, not as a load failure for the
    /// whole collection.
    ///
    /// # Errors
    /// * `InvalidShelfLife` - If the stored value is not a `YYYY-MM-DD` date
    pub fn shelf_life_date(&self) -> Result<NaiveDate> {
        self.shelf_life
            .parse()
            .map_err(|_| ParcelPointError::InvalidShelfLife {
                order_id: self.order_id,
                value: self.shelf_life.clone(),
            })
    }

    /// Parse the stored issue date into a calendar date
    ///
    /// # Errors
    /// * `InvalidIssuedDate` - If the stored value is not a `YYYY-MM-DD` date
    ///   (including the empty string of an unissued order)
    pub fn issued_on(&self) -> Result<NaiveDate> {
        self.issued_date
            .parse()
            .map_err(|_| ParcelPointError::InvalidIssuedDate {
                order_id: self.order_id,
                value: self.issued_date.clone(),
            })
    }
}
