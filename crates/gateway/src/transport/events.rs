//! Broadcast bus for order state-change events
//!
//! Uses a tokio broadcast channel for pub/sub semantics within a single
//! process. Every active subscriber observes every event (fan-out), and
//! subscribing or dropping receivers is safe under concurrent dispatch.

use chrono::Utc;
use hermes_core::{OrderEvent, OrderStatus};
use log::debug;
use tokio::sync::broadcast;

/// Default channel capacity
const DEFAULT_CAPACITY: usize = 1000;

/// Fan-out broadcast of order events
///
/// The venue feed is the producer; waiters and any other interested
/// components are the consumers.
pub struct OrderEventBus {
    tx: broadcast::Sender<OrderEvent>,
}

impl OrderEventBus {
    /// Create a bus with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a bus with the given buffer capacity
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publish an event to all current subscribers
    ///
    /// Publishing with no subscribers is not an error; the event is
    /// simply dropped.
    pub fn publish(&self, event: &OrderEvent) {
        let delivered = self.tx.send(event.clone()).unwrap_or(0);
        debug!(
            "order event {} -> {:?} delivered to {} subscriber(s)",
            event.order_id, event.status, delivered
        );
    }

    /// Publish a status change stamped with the current time
    ///
    /// Convenience for venue feeds that do not carry their own event
    /// timestamps.
    pub fn publish_status(&self, order_id: impl Into<String>, status: OrderStatus) {
        let timestamp_ns = Utc::now().timestamp_nanos_opt().unwrap_or(0);
        self.publish(&OrderEvent::new(order_id, status, timestamp_ns));
    }

    /// Open a new subscription to the event stream
    ///
    /// Dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> broadcast::Receiver<OrderEvent> {
        self.tx.subscribe()
    }

    /// Number of live subscriptions
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for OrderEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hermes_core::OrderStatus;

    #[tokio::test]
    async fn test_fan_out_to_all_subscribers() {
        let bus = OrderEventBus::with_capacity(10);
        let mut sub1 = bus.subscribe();
        let mut sub2 = bus.subscribe();

        bus.publish(&OrderEvent::new("ord-1", OrderStatus::Filled, 0));

        assert_eq!(sub1.recv().await.unwrap().order_id, "ord-1");
        assert_eq!(sub2.recv().await.unwrap().order_id, "ord-1");
    }

    #[tokio::test]
    async fn test_publish_without_subscribers() {
        let bus = OrderEventBus::new();
        // Must not panic or error
        bus.publish(&OrderEvent::new("ord-1", OrderStatus::Canceled, 0));
        assert_eq!(bus.receiver_count(), 0);
    }

    #[tokio::test]
    async fn test_publish_status_stamps_time() {
        let bus = OrderEventBus::new();
        let mut sub = bus.subscribe();

        bus.publish_status("ord-1", OrderStatus::Submitted);

        let event = sub.recv().await.unwrap();
        assert_eq!(event.status, OrderStatus::Submitted);
        assert!(event.timestamp_ns > 0);
    }
}
