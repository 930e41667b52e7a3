use serde::{Deserialize, Serialize};

/// Order lifecycle status as observed from venue push events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Order accepted by the venue, working
    Submitted,
    /// Order has been partially filled
    PartiallyFilled,
    /// Order has been completely filled
    Filled,
    /// Order has been canceled
    Canceled,
    /// Order was rejected by the venue
    Rejected,
}

impl OrderStatus {
    /// Returns true if the order is in a terminal state
    ///
    /// Events arriving after a terminal status carry no further
    /// transitions; consumers must tolerate late duplicates.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Filled | OrderStatus::Canceled | OrderStatus::Rejected
        )
    }

    /// Returns true if the order is still active
    pub fn is_active(&self) -> bool {
        matches!(self, OrderStatus::Submitted | OrderStatus::PartiallyFilled)
    }
}
