use serde::{Deserialize, Serialize};
use std::fmt;

/// Venue product category
///
/// Determines which operations and request parameters apply. Position
/// operations (trading-stop, switch-mode) are defined only for the
/// derivative categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    /// Spot pairs - no position accounting
    Spot,
    /// Stable-margined perpetuals
    Linear,
    /// Coin-margined perpetuals
    Inverse,
}

impl ProductCategory {
    /// Wire name used in request bodies
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spot => "spot",
            Self::Linear => "linear",
            Self::Inverse => "inverse",
        }
    }

    /// Whether instruments in this category carry positions
    pub fn has_positions(&self) -> bool {
        !matches!(self, Self::Spot)
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spot_has_no_positions() {
        assert!(!ProductCategory::Spot.has_positions());
        assert!(ProductCategory::Linear.has_positions());
        assert!(ProductCategory::Inverse.has_positions());
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(ProductCategory::Linear.as_str(), "linear");
        assert_eq!(format!("{}", ProductCategory::Inverse), "inverse");
    }
}
