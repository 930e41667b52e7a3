use serde::{Deserialize, Serialize};

use super::OrderStatus;

/// Order state-change notification pushed by the venue
///
/// Keyed by the venue-assigned order id: push events carry the venue's
/// own token, not the local one. The venue is the sole producer; all
/// active subscribers observe the same broadcast stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderEvent {
    /// Venue-assigned order id
    pub order_id: String,
    /// New status
    pub status: OrderStatus,
    /// Venue timestamp in nanoseconds
    pub timestamp_ns: i64,
}

impl OrderEvent {
    /// Create a new order event
    pub fn new(order_id: impl Into<String>, status: OrderStatus, timestamp_ns: i64) -> Self {
        Self {
            order_id: order_id.into(),
            status,
            timestamp_ns,
        }
    }
}
