use serde::{Deserialize, Serialize};

/// Position accounting mode for a symbol/category pair
///
/// The venue is the sole authority for the current mode; this core never
/// stores it. After a successful switch, subsequent position queries for
/// the symbol reflect the new mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionMode {
    /// Single net position per symbol
    OneWay,
    /// Separate long and short positions
    Hedge,
}

impl PositionMode {
    /// Numeric mode code expected by the switch-mode endpoint
    pub fn wire_code(&self) -> u8 {
        match self {
            PositionMode::OneWay => 0,
            PositionMode::Hedge => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_codes() {
        assert_eq!(PositionMode::OneWay.wire_code(), 0);
        assert_eq!(PositionMode::Hedge.wire_code(), 3);
    }
}
