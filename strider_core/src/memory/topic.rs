use crate::error::{StriderError, StriderResult};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::any::{Any, TypeId};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Process-wide registry mapping topic names to their rings.
static TOPIC_REGISTRY: Lazy<Mutex<HashMap<String, RegisteredRing>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Type-erased ring entry so differently-typed topics share one registry.
struct RegisteredRing {
    type_id: TypeId,
    type_name: &'static str,
    ring: Arc<dyn Any + Send + Sync>,
}

/// Bounded ring shared by every attachment to one topic.
///
/// Each published message is stamped with a monotonically increasing
/// sequence number. When the ring is at capacity the oldest entry is
/// evicted; publishing never blocks and never fails.
struct TopicRing<T> {
    entries: Mutex<VecDeque<(u64, T)>>,
    capacity: usize,
    next_seq: AtomicU64,
    dropped: AtomicU64,
}

impl<T: Send + 'static> TopicRing<T> {
    fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity: capacity.max(1),
            next_seq: AtomicU64::new(0),
            dropped: AtomicU64::new(0),
        }
    }

    fn push(&self, msg: T) {
        let mut entries = self.entries.lock();
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        if entries.len() == self.capacity {
            entries.pop_front();
            self.dropped.fetch_add(1, Ordering::Relaxed);
        }
        entries.push_back((seq, msg));
    }

    /// Sequence number of the oldest entry still retained, or the next
    /// sequence to be assigned when the ring is empty.
    fn oldest_seq(&self) -> u64 {
        let entries = self.entries.lock();
        entries
            .front()
            .map(|(seq, _)| *seq)
            .unwrap_or_else(|| self.next_seq.load(Ordering::Relaxed))
    }
}

/// One attachment to a named topic, holding its own read cursor.
///
/// Attachments with the same name and payload type share one ring; the
/// capacity of the first attachment wins. Reads are non-destructive for
/// other attachments. A reader that falls behind the ring skips ahead to
/// the oldest retained message.
pub struct MemTopic<T> {
    name: String,
    ring: Arc<TopicRing<T>>,
    cursor: AtomicU64,
}

impl<T: Clone + Send + 'static> MemTopic<T> {
    /// Attach to `name`, creating the ring if this is the first attachment.
    ///
    /// Returns a `Communication` error when the topic already exists with a
    /// different payload type.
    pub fn attach(name: &str, capacity: usize) -> StriderResult<Self> {
        let mut registry = TOPIC_REGISTRY.lock();
        let ring: Arc<TopicRing<T>> = match registry.entry(name.to_string()) {
            Entry::Occupied(occupied) => {
                let registered = occupied.get();
                if registered.type_id != TypeId::of::<T>() {
                    return Err(StriderError::communication(format!(
                        "topic '{}' is already open with payload type {}",
                        name, registered.type_name
                    )));
                }
                registered
                    .ring
                    .clone()
                    .downcast::<TopicRing<T>>()
                    .map_err(|_| {
                        StriderError::internal(format!(
                            "topic '{}' ring failed to downcast to its registered type",
                            name
                        ))
                    })?
            }
            Entry::Vacant(vacant) => {
                let ring = Arc::new(TopicRing::<T>::new(capacity));
                vacant.insert(RegisteredRing {
                    type_id: TypeId::of::<T>(),
                    type_name: std::any::type_name::<T>(),
                    ring: ring.clone(),
                });
                ring
            }
        };

        let cursor = ring.oldest_seq();
        Ok(Self {
            name: name.to_string(),
            ring,
            cursor: AtomicU64::new(cursor),
        })
    }

    /// Publish a message. Never blocks; at capacity the oldest entry is
    /// evicted.
    pub fn push(&self, msg: T) {
        self.ring.push(msg);
    }

    /// Pop the next unread message for this attachment, if any.
    pub fn pop(&self) -> Option<T> {
        let entries = self.ring.entries.lock();
        let cursor = self.cursor.load(Ordering::Relaxed);
        let (seq, msg) = entries.iter().find(|(seq, _)| *seq >= cursor)?;
        self.cursor.store(seq + 1, Ordering::Relaxed);
        Some(msg.clone())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> usize {
        self.ring.capacity
    }

    /// Number of entries currently retained in the ring.
    pub fn len(&self) -> usize {
        self.ring.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total messages evicted from the ring since creation.
    pub fn dropped(&self) -> u64 {
        self.ring.dropped.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_returns_messages_in_publish_order() {
        let topic = MemTopic::<u32>::attach("mem_topic_order", 8).unwrap();
        for value in [3, 1, 4] {
            topic.push(value);
        }
        assert_eq!(topic.pop(), Some(3));
        assert_eq!(topic.pop(), Some(1));
        assert_eq!(topic.pop(), Some(4));
        assert_eq!(topic.pop(), None);
    }

    #[test]
    fn capacity_evicts_oldest_entries() {
        let topic = MemTopic::<u32>::attach("mem_topic_evict", 4).unwrap();
        for value in 0..6 {
            topic.push(value);
        }
        assert_eq!(topic.len(), 4);
        assert_eq!(topic.dropped(), 2);
        // Reader skips ahead to the oldest retained message.
        assert_eq!(topic.pop(), Some(2));
        assert_eq!(topic.pop(), Some(3));
    }

    #[test]
    fn attachments_read_independently() {
        let writer = MemTopic::<u32>::attach("mem_topic_fanout", 8).unwrap();
        let reader_a = MemTopic::<u32>::attach("mem_topic_fanout", 8).unwrap();
        let reader_b = MemTopic::<u32>::attach("mem_topic_fanout", 8).unwrap();

        writer.push(7);
        writer.push(8);

        assert_eq!(reader_a.pop(), Some(7));
        assert_eq!(reader_a.pop(), Some(8));
        // A's reads do not consume B's view.
        assert_eq!(reader_b.pop(), Some(7));
        assert_eq!(reader_b.pop(), Some(8));
    }

    #[test]
    fn payload_type_mismatch_is_rejected() {
        let _first = MemTopic::<u32>::attach("mem_topic_typed", 8).unwrap();
        let second = MemTopic::<String>::attach("mem_topic_typed", 8);
        assert!(matches!(second, Err(StriderError::Communication(_))));
    }

    #[test]
    fn first_attachment_capacity_wins() {
        let first = MemTopic::<u32>::attach("mem_topic_capacity", 2).unwrap();
        let second = MemTopic::<u32>::attach("mem_topic_capacity", 100).unwrap();
        assert_eq!(first.capacity(), 2);
        assert_eq!(second.capacity(), 2);
    }
}
