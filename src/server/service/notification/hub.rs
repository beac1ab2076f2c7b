//! In-memory fan-out of freshly created notifications to live subscribers.

use tokio::sync::broadcast;

use crate::server::model::notification::Notification;

/// Capacity of the broadcast buffer. Slow subscribers that fall further behind skip
/// the oldest notifications.
const HUB_CAPACITY: usize = 1024;

/// Broadcast hub for live notification delivery.
///
/// Every subscriber receives every published notification and filters for its own
/// user. There is no backpressure: a lagging receiver loses messages instead of
/// blocking publishers.
#[derive(Clone)]
pub struct NotificationHub {
    sender: broadcast::Sender<Notification>,
}

impl NotificationHub {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(HUB_CAPACITY);
        Self { sender }
    }

    /// Publishes a notification to all current subscribers.
    ///
    /// # Returns
    /// Number of subscribers that received it, 0 when nobody is listening.
    pub fn publish(&self, notification: Notification) -> usize {
        match self.sender.send(notification) {
            Ok(count) => count,
            Err(e) => {
                tracing::debug!("No live subscribers for notification {}", e.0.id);
                0
            }
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }
}

impl Default for NotificationHub {
    fn default() -> Self {
        Self::new()
    }
}
