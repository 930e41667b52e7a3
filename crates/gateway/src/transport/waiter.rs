//! Status waiter - blocks until an order reaches an expected status
//!
//! The confirmation half of the protocol for actions whose outcome
//! arrives via push events rather than in the triggering response.

use std::future::Future;
use std::time::Duration;

use hermes_core::{OrderEvent, OrderStatus};
use log::{debug, warn};
use tokio::sync::{broadcast, oneshot};
use tokio::time::Instant;

use super::events::OrderEventBus;

/// Waits for a specific order to reach an expected status
///
/// The subscription is established at construction: create the waiter
/// before firing the triggering call, so an event published between the
/// trigger returning and the wait starting cannot be missed.
///
/// `wait` consumes the waiter, so the subscription is released on every
/// return path and a satisfied waiter cannot be reused against late
/// duplicate events.
pub struct StatusWaiter {
    rx: broadcast::Receiver<OrderEvent>,
    order_id: String,
    expected: OrderStatus,
}

impl StatusWaiter {
    /// Subscribe to the bus, targeting (order id, expected status)
    pub fn new(bus: &OrderEventBus, order_id: impl Into<String>, expected: OrderStatus) -> Self {
        Self {
            rx: bus.subscribe(),
            order_id: order_id.into(),
            expected,
        }
    }

    /// Block until the matching event arrives (true) or the timeout
    /// elapses (false)
    ///
    /// Events for other orders and non-matching transitions are filtered
    /// out, not errors. The timeout is a hard upper bound: the wait
    /// unblocks even if no event ever arrives, and a timeout is a normal
    /// outcome rather than an error - callers decide how to treat it.
    pub async fn wait(mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            match tokio::time::timeout_at(deadline, self.rx.recv()).await {
                Err(_) => {
                    debug!(
                        "wait for {} -> {:?} timed out after {:?}",
                        self.order_id, self.expected, timeout
                    );
                    return false;
                }
                Ok(Ok(event)) => {
                    if event.order_id == self.order_id && event.status == self.expected {
                        return true;
                    }
                    // Unrelated order or other transition; keep waiting
                }
                Ok(Err(broadcast::error::RecvError::Lagged(skipped))) => {
                    warn!(
                        "status waiter for {} lagged, skipped {} event(s)",
                        self.order_id, skipped
                    );
                }
                Ok(Err(broadcast::error::RecvError::Closed)) => {
                    // No publisher left: the event can never arrive
                    debug!("event bus closed while waiting for {}", self.order_id);
                    return false;
                }
            }
        }
    }

    /// Like [`wait`](Self::wait), but also unblocks (returning false)
    /// when the caller signals cancellation
    ///
    /// Dropping the sender counts as cancellation; hold it for as long
    /// as the wait should keep running.
    pub async fn wait_with_cancel(
        self,
        timeout: Duration,
        cancel: oneshot::Receiver<()>,
    ) -> bool {
        tokio::select! {
            confirmed = self.wait(timeout) => confirmed,
            _ = cancel => false,
        }
    }
}

/// Run the full confirmation protocol: subscribe, trigger, wait
///
/// Subscribes before invoking `trigger`, closing the race where the
/// venue publishes the event before the caller starts listening. An
/// error from the trigger propagates; the wait outcome is the boolean.
pub async fn trigger_and_wait<F, Fut, E>(
    bus: &OrderEventBus,
    order_id: impl Into<String>,
    expected: OrderStatus,
    timeout: Duration,
    trigger: F,
) -> Result<bool, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    let waiter = StatusWaiter::new(bus, order_id, expected);
    trigger().await?;
    Ok(waiter.wait(timeout).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn event(order_id: &str, status: OrderStatus) -> OrderEvent {
        OrderEvent::new(
            order_id,
            status,
            Utc::now().timestamp_nanos_opt().unwrap_or(0),
        )
    }

    #[tokio::test]
    async fn test_matching_event_confirms() {
        let bus = OrderEventBus::new();
        let waiter = StatusWaiter::new(&bus, "ord-1", OrderStatus::Canceled);

        // Noise before the matching event: unrelated order, then an
        // unrelated transition for the right order
        bus.publish(&event("ord-other", OrderStatus::Canceled));
        bus.publish(&event("ord-1", OrderStatus::Submitted));
        bus.publish(&event("ord-1", OrderStatus::Canceled));

        assert!(waiter.wait(Duration::from_secs(1)).await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_returns_false() {
        let bus = OrderEventBus::new();
        let waiter = StatusWaiter::new(&bus, "ord-1", OrderStatus::Filled);

        assert!(!waiter.wait(Duration::from_secs(5)).await);
    }

    #[tokio::test]
    async fn test_subscription_released_after_wait() {
        let bus = OrderEventBus::new();
        let waiter = StatusWaiter::new(&bus, "ord-1", OrderStatus::Canceled);
        assert_eq!(bus.receiver_count(), 1);

        bus.publish(&event("ord-1", OrderStatus::Canceled));
        assert!(waiter.wait(Duration::from_secs(1)).await);

        // Both outcomes drop the subscription; a late duplicate has
        // nowhere to go
        assert_eq!(bus.receiver_count(), 0);
        bus.publish(&event("ord-1", OrderStatus::Canceled));
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscription_released_after_timeout() {
        let bus = OrderEventBus::new();
        let waiter = StatusWaiter::new(&bus, "ord-1", OrderStatus::Canceled);

        assert!(!waiter.wait(Duration::from_millis(50)).await);
        assert_eq!(bus.receiver_count(), 0);
    }

    #[tokio::test]
    async fn test_cancel_unblocks_wait() {
        let bus = OrderEventBus::new();
        let waiter = StatusWaiter::new(&bus, "ord-1", OrderStatus::Filled);
        let (cancel_tx, cancel_rx) = oneshot::channel();

        cancel_tx.send(()).unwrap();
        assert!(
            !waiter
                .wait_with_cancel(Duration::from_secs(30), cancel_rx)
                .await
        );
    }

    #[tokio::test]
    async fn test_trigger_and_wait_subscribes_before_trigger() {
        let bus = OrderEventBus::new();

        // The trigger publishes before the wait starts; the waiter must
        // still observe the event because it subscribed first
        let confirmed = trigger_and_wait(
            &bus,
            "ord-1",
            OrderStatus::Canceled,
            Duration::from_secs(1),
            || {
                bus.publish(&event("ord-1", OrderStatus::Canceled));
                async { Ok::<(), std::convert::Infallible>(()) }
            },
        )
        .await
        .unwrap();

        assert!(confirmed);
    }

    #[tokio::test]
    async fn test_trigger_error_propagates() {
        let bus = OrderEventBus::new();

        let result = trigger_and_wait(
            &bus,
            "ord-1",
            OrderStatus::Canceled,
            Duration::from_secs(1),
            || async { Err::<(), &str>("rejected") },
        )
        .await;

        assert_eq!(result, Err("rejected"));
        // The aborted protocol must not leak its subscription
        assert_eq!(bus.receiver_count(), 0);
    }
}
