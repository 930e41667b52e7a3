//! Error types for the gateway crate

use hermes_core::{ProductCategory, Symbol};
use hermes_ports::ApiError;
use thiserror::Error;

/// Gateway-level errors (adapter operations)
///
/// Validation errors are raised before any network call; API errors are
/// surfaced unchanged from the client collaborator. A waiter timeout is
/// not an error - it is the `false` outcome of the wait.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Category {category} does not support {operation}")]
    UnsupportedCategory {
        category: ProductCategory,
        operation: &'static str,
    },

    #[error("Expected a trailing-stop order, got {0}")]
    UnsupportedOrderKind(&'static str),

    /// No usable reference price for a percentage trailing distance
    #[error("No price available for {0}")]
    PriceUnavailable(Symbol),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Api error: {0}")]
    Api(#[from] ApiError),
}
