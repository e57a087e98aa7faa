use crate::core::node::{LogSummary, NodeInfo};
use crate::error::StriderResult;
use crate::memory::MemTopic;
use std::sync::atomic::{AtomicU64, Ordering};

/// Ring capacity used when the caller does not specify one.
const DEFAULT_CAPACITY: usize = 64;

/// Snapshot of a Hub's message counters.
#[derive(Debug, Clone, Copy, Default)]
pub struct HubMetrics {
    pub messages_sent: u64,
    pub messages_received: u64,
}

/// Pub/sub endpoint for a named topic.
///
/// A `Hub` both publishes to and subscribes from its topic; nodes typically
/// hold one Hub per channel they use. Sends are fire-and-forget: the
/// in-process ring evicts its oldest entry at capacity rather than refusing
/// a publish.
pub struct Hub<T> {
    topic: MemTopic<T>,
    messages_sent: AtomicU64,
    messages_received: AtomicU64,
}

impl<T: Clone + Send + 'static> std::fmt::Debug for Hub<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hub")
            .field("topic_name", &self.topic.name())
            .finish_non_exhaustive()
    }
}

impl<T: Clone + Send + 'static> Hub<T> {
    /// Create a new Hub with the default ring capacity.
    pub fn new(topic_name: &str) -> StriderResult<Self> {
        Self::new_with_capacity(topic_name, DEFAULT_CAPACITY)
    }

    /// Create a new Hub with a custom ring capacity.
    ///
    /// The capacity only takes effect for the first attachment to a topic;
    /// later attachments share the existing ring.
    pub fn new_with_capacity(topic_name: &str, capacity: usize) -> StriderResult<Self> {
        Ok(Hub {
            topic: MemTopic::attach(topic_name, capacity)?,
            messages_sent: AtomicU64::new(0),
            messages_received: AtomicU64::new(0),
        })
    }

    /// Publish a message on the topic.
    ///
    /// Hands the message back on transport refusal; the in-process ring
    /// never refuses, so with this backend the result is always `Ok`.
    pub fn send(&self, msg: T, ctx: Option<&mut NodeInfo>) -> Result<(), T>
    where
        T: LogSummary,
    {
        if let Some(ctx) = ctx {
            // Summary is taken before the move into the ring.
            let summary = msg.log_summary();
            self.topic.push(msg);
            self.messages_sent.fetch_add(1, Ordering::Relaxed);
            ctx.log_pub_summary(self.topic.name(), &summary);
        } else {
            self.topic.push(msg);
            self.messages_sent.fetch_add(1, Ordering::Relaxed);
        }
        Ok(())
    }

    /// Receive the next unread message, if any. Non-blocking.
    pub fn recv(&self, ctx: Option<&mut NodeInfo>) -> Option<T>
    where
        T: LogSummary,
    {
        let msg = self.topic.pop()?;
        self.messages_received.fetch_add(1, Ordering::Relaxed);
        if let Some(ctx) = ctx {
            ctx.log_sub_summary(self.topic.name(), &msg.log_summary());
        }
        Some(msg)
    }

    /// Get the topic name for this Hub
    pub fn topic_name(&self) -> &str {
        self.topic.name()
    }

    /// Get current metrics snapshot
    pub fn metrics(&self) -> HubMetrics {
        HubMetrics {
            messages_sent: self.messages_sent.load(Ordering::Relaxed),
            messages_received: self.messages_received.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_then_recv_roundtrip() {
        let publisher = Hub::<u32>::new("hub_roundtrip").unwrap();
        let subscriber = Hub::<u32>::new("hub_roundtrip").unwrap();

        publisher.send(42, None).unwrap();
        assert_eq!(subscriber.recv(None), Some(42));
        assert_eq!(subscriber.recv(None), None);
    }

    #[test]
    fn metrics_count_sends_and_receives() {
        let hub = Hub::<u32>::new("hub_metrics").unwrap();
        for value in 0..3 {
            hub.send(value, None).unwrap();
        }
        let _ = hub.recv(None);
        let _ = hub.recv(None);

        let metrics = hub.metrics();
        assert_eq!(metrics.messages_sent, 3);
        assert_eq!(metrics.messages_received, 2);
    }

    #[test]
    fn recv_on_empty_topic_is_none() {
        let hub = Hub::<bool>::new("hub_empty").unwrap();
        assert_eq!(hub.recv(None), None);
    }
}
