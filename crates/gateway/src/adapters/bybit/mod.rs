//! Bybit v5 position adapter
//!
//! Maps broker-agnostic order and position intents onto the venue's REST
//! surface. Each operation is pure request construction plus a single
//! post; the venue confirms outcomes out-of-band via push events (see
//! `crate::transport`).

mod endpoints;
mod trading_stop;

#[cfg(test)]
pub(crate) mod testkit;

pub use endpoints::Endpoints;

use std::sync::Arc;

use hermes_core::{PositionMode, ProductCategory, Symbol};
use hermes_ports::{ApiClient, PriceSource, SymbolMapper, TickSizeSource};
use log::{debug, info};
use serde::Serialize;

use crate::error::GatewayError;
use crate::messages::position::{CancelOrderRequest, SwitchModeRequest};

/// Adapter over the venue's position/order REST surface
///
/// Holds no mutable state: every call is self-contained and the adapter
/// is safe for concurrent use without locking.
pub struct BybitPositionAdapter {
    symbols: Arc<dyn SymbolMapper>,
    prices: Arc<dyn PriceSource>,
    tick_sizes: Arc<dyn TickSizeSource>,
    client: Arc<dyn ApiClient>,
}

impl BybitPositionAdapter {
    /// Create a new adapter from its collaborators
    pub fn new(
        symbols: Arc<dyn SymbolMapper>,
        prices: Arc<dyn PriceSource>,
        tick_sizes: Arc<dyn TickSizeSource>,
        client: Arc<dyn ApiClient>,
    ) -> Self {
        Self {
            symbols,
            prices,
            tick_sizes,
            client,
        }
    }

    /// Switch the position mode for a symbol/category pair
    ///
    /// No state is kept locally: the venue is the source of truth for the
    /// resulting mode, and subsequent position queries for the symbol
    /// reflect it.
    pub async fn switch_position_mode(
        &self,
        category: ProductCategory,
        symbol: &Symbol,
        mode: PositionMode,
    ) -> Result<(), GatewayError> {
        if !category.has_positions() {
            return Err(GatewayError::UnsupportedCategory {
                category,
                operation: "switch-mode",
            });
        }

        let request = SwitchModeRequest {
            category,
            symbol: self.symbols.to_exchange_ticker(symbol),
            mode: mode.wire_code(),
        };

        debug!("switching {} ({}) to {:?}", request.symbol, category, mode);
        self.post(Endpoints::SWITCH_MODE, &request).await?;
        info!(
            "position mode for {} ({}) switched to {:?}",
            request.symbol, category, mode
        );
        Ok(())
    }

    /// Cancel an order by its venue-assigned id
    ///
    /// Whether cancelling an already-terminal order is accepted, and
    /// whether it produces another Canceled event, is venue-defined; the
    /// outcome is forwarded unchanged either way.
    pub async fn cancel_order(
        &self,
        category: ProductCategory,
        symbol: &Symbol,
        exchange_order_id: &str,
    ) -> Result<(), GatewayError> {
        let request = CancelOrderRequest {
            category,
            symbol: self.symbols.to_exchange_ticker(symbol),
            order_id: exchange_order_id.to_string(),
        };

        debug!("cancelling {} on {}", exchange_order_id, request.symbol);
        self.post(Endpoints::CANCEL_ORDER, &request).await
    }

    /// Serialize a request body and post it to the venue
    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<(), GatewayError> {
        let body =
            serde_json::to_value(body).map_err(|e| GatewayError::Serialization(e.to_string()))?;
        self.client.post(path, body).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::testkit::{FixedPrices, adapter_with};
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_switch_mode_rejects_spot() {
        let (adapter, client) = adapter_with(FixedPrices::default(), dec!(0.5));

        let err = adapter
            .switch_position_mode(ProductCategory::Spot, &"BTC/USDT".to_string(), PositionMode::Hedge)
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::UnsupportedCategory { .. }));
        assert!(client.posts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_switch_mode_posts_wire_code() {
        let (adapter, client) = adapter_with(FixedPrices::default(), dec!(0.5));

        adapter
            .switch_position_mode(ProductCategory::Linear, &"BTC/USDT".to_string(), PositionMode::Hedge)
            .await
            .unwrap();

        let posts = client.posts.lock().unwrap();
        let (path, body) = &posts[0];
        assert_eq!(path, Endpoints::SWITCH_MODE);
        assert_eq!(body["symbol"], "BTCUSDT");
        assert_eq!(body["mode"], 3);
    }

    #[tokio::test]
    async fn test_cancel_posts_order_id() {
        let (adapter, client) = adapter_with(FixedPrices::default(), dec!(0.5));

        adapter
            .cancel_order(ProductCategory::Inverse, &"BTC/USD".to_string(), "ex-42")
            .await
            .unwrap();

        let posts = client.posts.lock().unwrap();
        let (path, body) = &posts[0];
        assert_eq!(path, Endpoints::CANCEL_ORDER);
        assert_eq!(body["category"], "inverse");
        assert_eq!(body["orderId"], "ex-42");
    }
}
