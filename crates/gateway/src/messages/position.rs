//! Position endpoint request bodies
//!
//! Built fresh per call and handed to the API client; nothing here is
//! persisted. Decimal fields serialize as JSON strings (rust_decimal's
//! default serde form), which is what the venue expects.

use hermes_core::{Price, ProductCategory, Quantity};
use serde::{Deserialize, Serialize};

/// Position index submitted with one-way mode requests
pub const ONE_WAY_POSITION_IDX: u8 = 0;

/// Body for the trading-stop endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingStopRequest {
    pub category: ProductCategory,
    /// Venue ticker
    pub symbol: String,
    /// Absolute trailing distance, quantized to the tick size
    pub trailing_stop: Price,
    /// 0 = one-way; hedge-mode indexes are not used by this core
    pub position_idx: u8,
    /// Stop-loss size: always the unsigned order size - the venue carries
    /// direction on the position, not on this field
    pub sl_size: Quantity,
    /// Activation price; omitted entirely when not set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_price: Option<Price>,
}

/// Body for the switch-mode endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchModeRequest {
    pub category: ProductCategory,
    /// Venue ticker
    pub symbol: String,
    /// Numeric mode code (see `PositionMode::wire_code`)
    pub mode: u8,
}

/// Body for the order-cancel endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderRequest {
    pub category: ProductCategory,
    /// Venue ticker
    pub symbol: String,
    /// Venue-assigned order id
    pub order_id: String,
}
