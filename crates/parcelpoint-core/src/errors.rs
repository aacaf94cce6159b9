use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for parcel point operations
pub type Result<T> = std::result::Result<T, ParcelPointError>;

/// Errors that can occur across the order lifecycle
///
/// Lifecycle and input errors are recoverable: the command is rejected, the
/// stored collection is untouched, and the caller may retry with corrected
/// input. Storage errors are fatal for the current run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParcelPointError {
    // ===== Lookup Errors =====
    /// Order does not exist in the collection
    #[error("Order not found: {order_id}")]
    OrderNotFound { order_id: u64 },

    // ===== Accept Errors =====
    /// A live order with this id already exists for the same customer
    #[error("Order {order_id} was already accepted for customer {customer_id}")]
    AlreadyAccepted { order_id: u64, customer_id: u64 },

    /// A live order with this id already exists for another customer
    #[error("Order {order_id} is already held for customer {customer_id}")]
    AcceptedForOtherCustomer { order_id: u64, customer_id: u64 },

    /// Stored or supplied shelf life is not a YYYY-MM-DD date
    #[error("Order {order_id} has an invalid shelf life '{value}'")]
    InvalidShelfLife { order_id: u64, value: String },

    /// Shelf life ends before the acceptance day
    #[error("Order {order_id} has a shelf life in the past: {date}")]
    ShelfLifeInPast { order_id: u64, date: NaiveDate },

    // ===== Courier Return Errors =====
    /// Issued orders stay with the customer and cannot go back to the courier
    #[error("Order {order_id} was already issued, cannot return to courier")]
    IssuedCannotReturn { order_id: u64 },

    /// Shelf life has not run out yet
    #[error("Order {order_id} is still within its shelf life until {date}")]
    ShelfLifeNotExpired { order_id: u64, date: NaiveDate },

    /// Order was already returned to the courier
    #[error("Order {order_id} was already returned to the courier")]
    AlreadyReturnedToCourier { order_id: u64 },

    // ===== Issue Errors =====
    /// An issue request must name at least one order
    #[error("Issue request contains no order ids")]
    EmptyIssueBatch,

    /// Orders returned to the courier can no longer be issued
    #[error("Order {order_id} was returned to the courier and cannot be issued")]
    ReturnedToCourierCannotIssue { order_id: u64 },

    /// Order was already handed to the customer
    #[error("Order {order_id} was already issued")]
    AlreadyIssued { order_id: u64 },

    /// All orders in one issue request must belong to one customer
    #[error(
        "Order {order_id} belongs to customer {customer_id}, batch is for customer {expected_customer_id}"
    )]
    BatchCustomerMismatch {
        order_id: u64,
        customer_id: u64,
        expected_customer_id: u64,
    },

    /// Shelf life ran out before the issue day
    #[error("Order {order_id} expired on {date} and cannot be issued")]
    ShelfLifeExpired { order_id: u64, date: NaiveDate },

    // ===== Customer Return Errors =====
    /// Only issued orders can come back from a customer
    #[error("Order {order_id} was never issued, nothing to return")]
    NeverIssued { order_id: u64 },

    /// Order was already returned by the customer
    #[error("Order {order_id} was already returned by the customer")]
    AlreadyReturned { order_id: u64 },

    /// Stored issue date is not a YYYY-MM-DD date
    #[error("Order {order_id} has an invalid issue date '{value}'")]
    InvalidIssuedDate { order_id: u64, value: String },

    /// Return attempted after the allowed window
    #[error("Return window expired for order {order_id}: issued {issued_date}, limit {limit_hours} hours")]
    ReturnWindowExpired {
        order_id: u64,
        issued_date: NaiveDate,
        limit_hours: i64,
    },

    // ===== Collection Invariant Errors =====
    /// Two live orders share one id
    #[error("Duplicate live order id: {order_id}")]
    DuplicateLiveOrder { order_id: u64 },

    /// An order is marked returned without ever being issued
    #[error("Order {order_id} is marked returned but was never issued")]
    ReturnedWithoutIssue { order_id: u64 },

    /// An order carries both terminal markers
    #[error("Order {order_id} is marked both issued and returned to courier")]
    IssuedAndDeleted { order_id: u64 },

    /// Issue flag and issue date disagree
    #[error("Order {order_id} has an issue flag inconsistent with its issue date")]
    IssueDateInconsistent { order_id: u64 },

    // ===== Storage Errors =====
    /// Filesystem operation failed
    #[error("Storage operation '{op}' failed: {message}")]
    Io { op: String, message: String },

    /// Stored collection could not be decoded
    #[error("Malformed order data: {message}")]
    Malformed { message: String },
}

impl ParcelPointError {
    /// Check if this error is fatal rather than a rejected command
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            ParcelPointError::Io { .. } | ParcelPointError::Malformed { .. }
        )
    }
}

impl From<serde_json::Error> for ParcelPointError {
    fn from(err: serde_json::Error) -> Self {
        ParcelPointError::Malformed {
            message: err.to_string(),
        }
    }
}
