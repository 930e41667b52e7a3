//! Trailing-stop translation
//!
//! Derives the absolute trailing distance the venue expects from a
//! broker-agnostic trailing specification and submits it against the
//! position backing the order.

use hermes_core::{Order, OrderKind, Price, ProductCategory, TrailingStopParams};
use log::{debug, info};
use rust_decimal::{Decimal, RoundingStrategy};

use super::{BybitPositionAdapter, Endpoints};
use crate::error::GatewayError;
use crate::messages::position::{ONE_WAY_POSITION_IDX, TradingStopRequest};

impl BybitPositionAdapter {
    /// Set a trailing stop against the position backing `order`
    ///
    /// Fails fast, before any network call, unless the category is a
    /// derivative one and the order is a trailing stop. A percentage
    /// distance is resolved against the held position's price when one
    /// exists, falling back to the last traded price, and quantized to
    /// the instrument's tick size. With no usable price the call fails
    /// with `PriceUnavailable` rather than submitting a zero distance.
    pub async fn set_trailing_stop(
        &self,
        category: ProductCategory,
        order: &Order,
    ) -> Result<(), GatewayError> {
        if !category.has_positions() {
            return Err(GatewayError::UnsupportedCategory {
                category,
                operation: "trading-stop",
            });
        }
        let params = match &order.kind {
            OrderKind::TrailingStop(params) => params,
            other => return Err(GatewayError::UnsupportedOrderKind(other.name())),
        };

        let ticker = self.symbols.to_exchange_ticker(&order.symbol);
        let distance = self.trailing_distance(category, order, params, &ticker)?;

        let request = TradingStopRequest {
            category,
            symbol: ticker,
            trailing_stop: distance,
            position_idx: ONE_WAY_POSITION_IDX,
            sl_size: order.size(),
            active_price: activation_price(params),
        };

        debug!(
            "submitting trailing stop for {} ({}): distance {}",
            request.symbol, category, distance
        );
        self.post(Endpoints::TRADING_STOP, &request).await?;
        info!(
            "trailing stop set for {} ({}): distance {}, size {}",
            request.symbol, category, distance, request.sl_size
        );
        Ok(())
    }

    /// Resolve the absolute trailing distance for an order
    fn trailing_distance(
        &self,
        category: ProductCategory,
        order: &Order,
        params: &TrailingStopParams,
        ticker: &str,
    ) -> Result<Price, GatewayError> {
        if !params.as_percentage {
            // Already an absolute price distance; tick size does not apply
            return Ok(params.amount);
        }

        let price = self
            .reference_price(category, order, ticker)
            .ok_or_else(|| GatewayError::PriceUnavailable(order.symbol.clone()))?;
        let tick = self.tick_sizes.min_price_increment(&order.symbol);
        Ok(quantize_to_tick(price * params.amount, tick))
    }

    /// Reference price for percentage distances
    ///
    /// Prefers the held position's price; falls back to the last traded
    /// price. A zero price is treated as absent on both reads.
    fn reference_price(
        &self,
        category: ProductCategory,
        order: &Order,
        ticker: &str,
    ) -> Option<Price> {
        self.prices
            .held_position_price(&order.symbol)
            .filter(|price| !price.is_zero())
            .or_else(|| {
                self.prices
                    .last_price(category, ticker)
                    .filter(|price| !price.is_zero())
            })
    }
}

/// Activation price as the venue wants it: zero normalizes to "not set"
fn activation_price(params: &TrailingStopParams) -> Option<Price> {
    (!params.activation_price.is_zero()).then_some(params.activation_price)
}

/// Quantize a price distance to the nearest tick multiple
///
/// Exactly half a tick rounds away from zero. A zero tick leaves the
/// value unquantized.
fn quantize_to_tick(value: Price, tick: Price) -> Price {
    if tick == Decimal::ZERO {
        return value;
    }
    ((value / tick).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero) * tick)
        .normalize()
}
