//! Error types for KitPack.

use thiserror::Error;

/// Result type alias for KitPack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fitting kits into a container.
///
/// An infeasible fit is not an error for the solver itself; it is reported as
/// [`FitResult::NoFit`](crate::result::FitResult::NoFit). [`Error::NoFit`] is only
/// raised by operations that need a successful fit to proceed.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid kit dimensions provided.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Invalid container dimensions provided.
    #[error("Invalid boundary: {0}")]
    InvalidBoundary(String),

    /// Quantity must be at least one kit.
    #[error("Invalid quantity: {0} (must be at least 1)")]
    InvalidQuantity(usize),

    /// No orientation of the kit fits inside the container.
    #[error("Kit does not fit inside the container in any allowed orientation")]
    NoFit,

    /// The grid holds more units than `usize` can count.
    #[error("Capacity overflow: grid {0} holds more units than can be counted")]
    CapacityOverflow(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Serialization error.
    #[cfg(feature = "serde")]
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::InvalidGeometry("length must be positive".into());
        assert_eq!(err.to_string(), "Invalid geometry: length must be positive");

        let err = Error::InvalidQuantity(0);
        assert_eq!(err.to_string(), "Invalid quantity: 0 (must be at least 1)");

        let err = Error::CapacityOverflow("10000000 × 10000000 × 10000000".into());
        assert!(err.to_string().starts_with("Capacity overflow: grid 10000000"));
    }
}
