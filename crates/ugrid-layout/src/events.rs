// ABOUTME: Resize notifications fanned out to registered callbacks.
// ABOUTME: Drops samples from containers that have not been laid out yet.

use crate::geometry::ContainerSize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

type Callback = Box<dyn FnMut(ContainerSize)>;

/// Single-threaded observer list for container size changes.
///
/// Callbacks run synchronously on the publishing thread, in subscription order.
pub struct ResizeEvents {
    subscribers: Vec<(SubscriptionId, Callback)>,
    next_id: u64,
    last: Option<ContainerSize>,
}

impl ResizeEvents {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 0,
            last: None,
        }
    }

    pub fn subscribe(&mut self, callback: impl FnMut(ContainerSize) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    /// Deliver `size` to every subscriber.
    ///
    /// Returns false, without calling anyone, when either dimension is zero.
    pub fn publish(&mut self, size: ContainerSize) -> bool {
        if !size.is_laid_out() {
            tracing::trace!("Ignoring resize to {}x{}", size.width, size.height);
            return false;
        }
        self.last = Some(size);
        for (_, callback) in self.subscribers.iter_mut() {
            callback(size);
        }
        true
    }

    /// Most recent size that reached subscribers
    pub fn last_published(&self) -> Option<ContainerSize> {
        self.last
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl Default for ResizeEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ResizeEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResizeEvents")
            .field("subscribers", &self.subscribers.len())
            .field("last", &self.last)
            .finish()
    }
}
