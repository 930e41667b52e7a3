use hermes_core::Symbol;

/// Port for resolving venue-facing tickers
///
/// Internal symbols are venue-agnostic; the venue wants its own ticker
/// spelling (e.g. "BTC/USDT" becomes "BTCUSDT").
pub trait SymbolMapper: Send + Sync {
    /// Resolve the venue ticker for an internal symbol
    fn to_exchange_ticker(&self, symbol: &Symbol) -> String;
}
