use hermes_core::{Price, ProductCategory, Symbol};

/// Port for the price reads consumed by the translator
///
/// Reads are synchronous: implementations serve the most recent value
/// already streamed from the venue, not a fresh network round trip.
pub trait PriceSource: Send + Sync {
    /// Last traded price for a venue ticker, if one has been observed
    fn last_price(&self, category: ProductCategory, ticker: &str) -> Option<Price>;

    /// Price of the currently held position for a symbol, if any
    fn held_position_price(&self, symbol: &Symbol) -> Option<Price>;
}

/// Port for instrument tick sizes
pub trait TickSizeSource: Send + Sync {
    /// Minimum price increment for an instrument
    fn min_price_increment(&self, symbol: &Symbol) -> Price;
}
