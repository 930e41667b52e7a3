//! Order-event transport
//!
//! Fan-out broadcast of venue push events, plus the waiter primitive
//! used to confirm asynchronous state transitions.

pub mod events;
pub mod waiter;

pub use events::OrderEventBus;
pub use waiter::{StatusWaiter, trigger_and_wait};
