//! # ParcelPoint Store
//!
//! Flat-file persistence for the order collection. One [`OrderFile`] wraps
//! one JSON store file and offers the primitives the orchestration layer
//! needs: load (optionally filtered), single append, wholesale replace, and
//! a paged view of customer returns. All writes go through an atomic
//! temp-file-then-rename so a failed write never corrupts the store.

pub mod atomic;
pub mod errors;
pub mod order_file;

pub use order_file::OrderFile;
