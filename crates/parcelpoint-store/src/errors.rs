//! Constructors for the storage side of the shared error type

use std::path::Path;

use parcelpoint_core::errors::ParcelPointError;

pub use parcelpoint_core::errors::Result;

/// Wrap a filesystem failure with the operation that hit it
pub fn io_error(operation: &str, err: std::io::Error) -> ParcelPointError {
    ParcelPointError::Io {
        op: operation.to_string(),
        message: err.to_string(),
    }
}

/// Wrap a decode failure with the file it came from
pub fn malformed(path: &Path, err: serde_json::Error) -> ParcelPointError {
    ParcelPointError::Malformed {
        message: format!("{}: {}", path.display(), err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_io_error_names_the_operation() {
        let err = io_error(
            "read_order_store",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.is_storage());
        assert!(err.to_string().contains("read_order_store"));
    }

    #[test]
    fn test_malformed_names_the_file() {
        let parse_err = serde_json::from_str::<Vec<u64>>("{").unwrap_err();
        let err = malformed(&PathBuf::from("/tmp/orders.json"), parse_err);
        assert!(err.is_storage());
        assert!(err.to_string().contains("/tmp/orders.json"));
    }
}
