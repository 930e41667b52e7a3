//! Hand-rolled fakes for the adapter's collaborators

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use hermes_core::{Price, ProductCategory, Symbol};
use hermes_ports::{ApiClient, ApiError, PriceSource, SymbolMapper, TickSizeSource};
use serde_json::Value;

use super::BybitPositionAdapter;

/// Maps symbols by stripping the separator ("BTC/USDT" -> "BTCUSDT")
pub struct StripSlashMapper;

impl SymbolMapper for StripSlashMapper {
    fn to_exchange_ticker(&self, symbol: &Symbol) -> String {
        symbol.replace('/', "")
    }
}

/// Price source returning fixed values
#[derive(Default)]
pub struct FixedPrices {
    pub last: Option<Price>,
    pub position: Option<Price>,
}

impl PriceSource for FixedPrices {
    fn last_price(&self, _category: ProductCategory, _ticker: &str) -> Option<Price> {
        self.last
    }

    fn held_position_price(&self, _symbol: &Symbol) -> Option<Price> {
        self.position
    }
}

/// Tick-size source returning one increment for every symbol
pub struct FixedTick(pub Price);

impl TickSizeSource for FixedTick {
    fn min_price_increment(&self, _symbol: &Symbol) -> Price {
        self.0
    }
}

/// Records every post and replies with a canned acknowledgement
#[derive(Default)]
pub struct RecordingClient {
    pub posts: Mutex<Vec<(String, Value)>>,
    pub fail_with: Mutex<Option<ApiError>>,
}

#[async_trait]
impl ApiClient for RecordingClient {
    async fn post(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.posts.lock().unwrap().push((path.to_string(), body));
        if let Some(err) = self.fail_with.lock().unwrap().take() {
            return Err(err);
        }
        Ok(serde_json::json!({ "retCode": 0, "retMsg": "OK" }))
    }
}

/// Build an adapter wired to the fakes, returning the recording client
pub fn adapter_with(
    prices: FixedPrices,
    tick: Price,
) -> (BybitPositionAdapter, Arc<RecordingClient>) {
    let client = Arc::new(RecordingClient::default());
    let adapter = BybitPositionAdapter::new(
        Arc::new(StripSlashMapper),
        Arc::new(prices),
        Arc::new(FixedTick(tick)),
        client.clone(),
    );
    (adapter, client)
}
