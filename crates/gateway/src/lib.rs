//! Hermes Gateway
//!
//! Venue adapter for the Hermes trading stack. Provides:
//! - Trailing-stop translation onto the venue's position REST surface
//! - Position-mode switching
//! - Order-state confirmation against the venue's push-event stream
//!
//! ## Architecture
//!
//! ```text
//! Caller ──▶ BybitPositionAdapter ──▶ ApiClient (REST post)
//!                   │ reads                    │
//!        SymbolMapper / PriceSource            ▼
//!             / TickSizeSource               Venue
//!                                              │ push events
//! Caller ◀── StatusWaiter ◀── OrderEventBus ◀──┘
//! ```
//!
//! The REST call that triggers a transition returns before the venue
//! confirms it; confirmation arrives out-of-band as an order event.
//! Create the [`StatusWaiter`] (which subscribes) before firing the
//! trigger, or use [`trigger_and_wait`] which enforces that ordering.

pub mod adapters;
pub mod error;
pub mod messages;
pub mod transport;

// Re-export commonly used types
pub use adapters::bybit::{BybitPositionAdapter, Endpoints};
pub use error::GatewayError;
pub use messages::position::{CancelOrderRequest, SwitchModeRequest, TradingStopRequest};
pub use transport::{OrderEventBus, StatusWaiter, trigger_and_wait};
