//! JSON flat-file order store

use std::fs;
use std::path::{Path, PathBuf};

use parcelpoint_core::queries;
use parcelpoint_core::Order;

use crate::atomic::atomic_write;
use crate::errors::{io_error, malformed, Result};

/// Order collection persisted as a pretty-printed JSON array
///
/// An absent file is initialized to an empty collection on first use. Every
/// write replaces the whole file through [`atomic_write`], so a crash
/// mid-write never leaves a truncated store behind.
pub struct OrderFile {
    path: PathBuf,
}

impl OrderFile {
    /// Open a store over the given file path
    ///
    /// The file is not touched until the first read or write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all orders, optionally narrowed to one customer
    ///
    /// # Arguments
    /// * `customer_id` - Customer to narrow to, or `0` for all customers
    ///
    /// # Errors
    /// * `Io` - The file exists but cannot be read
    /// * `Malformed` - The file content is not a valid order array
    pub fn list_all(&self, customer_id: u64) -> Result<Vec<Order>> {
        let orders = self.load()?;
        if customer_id == 0 {
            return Ok(orders);
        }
        Ok(orders
            .into_iter()
            .filter(|o| o.customer_id == customer_id)
            .collect())
    }

    /// Append one order to the stored collection
    ///
    /// # Errors
    /// * `Io` / `Malformed` - Load or persist failed
    pub fn append_one(&self, order: &Order) -> Result<()> {
        let mut orders = self.load()?;
        orders.push(order.clone());
        self.persist(&orders)
    }

    /// Replace the stored collection wholesale
    ///
    /// # Errors
    /// * `Io` / `Malformed` - Persist failed
    pub fn replace_all(&self, orders: &[Order]) -> Result<()> {
        self.persist(orders)
    }

    /// Load one page of customer returns
    ///
    /// Filtering and pagination arithmetic live in
    /// [`parcelpoint_core::queries::list_returns`]; this is the storage-backed
    /// entry point.
    ///
    /// # Errors
    /// * `Io` / `Malformed` - Load failed
    pub fn list_returns_page(
        &self,
        customer_id: u64,
        page: usize,
        page_size: usize,
    ) -> Result<Vec<Order>> {
        let orders = self.load()?;
        Ok(queries::list_returns(&orders, customer_id, page, page_size))
    }

    fn load(&self) -> Result<Vec<Order>> {
        if !self.path.exists() {
            atomic_write(&self.path, b"[]")?;
            tracing::debug!(path = %self.path.display(), "initialized empty order store");
            return Ok(Vec::new());
        }

        let bytes = fs::read(&self.path).map_err(|e| io_error("read_order_store", e))?;
        let orders = serde_json::from_slice(&bytes).map_err(|e| malformed(&self.path, e))?;
        Ok(orders)
    }

    fn persist(&self, orders: &[Order]) -> Result<()> {
        let json = serde_json::to_vec_pretty(orders)?;
        atomic_write(&self.path, &json)?;
        tracing::debug!(
            path = %self.path.display(),
            orders = orders.len(),
            "order store persisted"
        );
        Ok(())
    }
}
