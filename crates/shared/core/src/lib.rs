//! Hermes Core Domain
//!
//! Pure domain types for the Hermes venue adapter.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    Order, OrderEvent, OrderId, OrderKind, OrderStatus, PositionMode, ProductCategory, Side,
    TrailingStopParams,
};
pub use values::{Price, Quantity, Symbol, Timestamp};
