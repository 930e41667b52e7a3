use serde::{Deserialize, Serialize};

use crate::values::Quantity;

/// Order side (Buy or Sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Side implied by a signed quantity (negative = Sell)
    pub fn from_quantity(quantity: Quantity) -> Self {
        if quantity.is_sign_negative() {
            Side::Sell
        } else {
            Side::Buy
        }
    }

    /// Returns the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}
