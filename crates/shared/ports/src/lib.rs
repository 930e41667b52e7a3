//! Hermes Ports
//!
//! Port definitions (traits) for the Hermes venue adapter.
//! These define the boundaries between the adapter logic and the
//! mechanical plumbing (HTTP transport, request signing, market-data
//! streaming) that lives outside this core.

mod market_data;
mod rest;
mod symbols;

pub use market_data::{PriceSource, TickSizeSource};
pub use rest::{ApiClient, ApiError};
pub use symbols::SymbolMapper;
