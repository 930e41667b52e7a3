use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Side;
use crate::values::{Price, Quantity, Symbol, Timestamp};

/// Unique local identifier for an order
pub type OrderId = Uuid;

/// Trailing stop parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailingStopParams {
    /// Trailing distance. Absolute price units, or a fraction of the
    /// reference price when `as_percentage` is set (0.01 = 1%).
    /// Must be > 0.
    pub amount: Decimal,
    /// Interpret `amount` as a fraction of the reference price
    pub as_percentage: bool,
    /// Price at which the stop becomes active. Zero means "not set".
    pub activation_price: Price,
}

/// Order kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OrderKind {
    Market,
    Limit {
        price: Price,
    },
    /// Stop that follows the market at a fixed distance, adjusting only favorably
    TrailingStop(TrailingStopParams),
}

impl OrderKind {
    /// Short name for diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            OrderKind::Market => "market",
            OrderKind::Limit { .. } => "limit",
            OrderKind::TrailingStop(_) => "trailing-stop",
        }
    }
}

/// Broker-agnostic order description
///
/// Immutable after creation, except for the venue-assigned submission
/// token: that is set once the venue accepts the order and is used to
/// correlate later push events back to this order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub symbol: Symbol,
    /// Signed quantity: the sign encodes the side
    pub quantity: Quantity,
    pub kind: OrderKind,
    pub created_at: Timestamp,
    /// Venue-assigned order id, set once accepted
    pub exchange_order_id: Option<String>,
}

impl Order {
    /// Create a new order with explicit timestamp
    pub fn new_with_time(
        symbol: impl Into<Symbol>,
        quantity: Quantity,
        kind: OrderKind,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            symbol: symbol.into(),
            quantity,
            kind,
            created_at: timestamp,
            exchange_order_id: None,
        }
    }

    /// Create a new order using current system time
    pub fn new(symbol: impl Into<Symbol>, quantity: Quantity, kind: OrderKind) -> Self {
        Self::new_with_time(symbol, quantity, kind, Utc::now())
    }

    /// Convenience constructor for a trailing stop order
    pub fn trailing_stop(
        symbol: impl Into<Symbol>,
        quantity: Quantity,
        params: TrailingStopParams,
    ) -> Self {
        Self::new(symbol, quantity, OrderKind::TrailingStop(params))
    }

    /// Side implied by the quantity sign
    pub fn side(&self) -> Side {
        Side::from_quantity(self.quantity)
    }

    /// Unsigned order size
    pub fn size(&self) -> Quantity {
        self.quantity.abs()
    }

    /// Validate the order based on kind requirements
    pub fn validate(&self) -> bool {
        match &self.kind {
            OrderKind::Market => true,
            OrderKind::Limit { price } => *price > Decimal::ZERO,
            OrderKind::TrailingStop(params) => params.amount > Decimal::ZERO,
        }
    }

    /// Record the venue-assigned order id after acceptance
    pub fn mark_submitted(&mut self, exchange_order_id: impl Into<String>) {
        self.exchange_order_id = Some(exchange_order_id.into());
    }
}
