//! Venue REST endpoints

/// Paths on the venue's v5 REST surface
///
/// Collected here so request construction and tests share one spelling.
pub struct Endpoints;

impl Endpoints {
    /// Set or amend the trailing stop attached to a position
    pub const TRADING_STOP: &'static str = "/v5/position/trading-stop";

    /// Switch between one-way and hedge position accounting
    pub const SWITCH_MODE: &'static str = "/v5/position/switch-mode";

    /// Cancel an open order
    pub const CANCEL_ORDER: &'static str = "/v5/order/cancel";
}
