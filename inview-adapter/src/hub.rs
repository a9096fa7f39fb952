use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use inview::{ScrollHandler, ScrollSource, SubscriptionId};

/// A process-wide scroll fan-out: one shared source, many independent
/// subscriber callbacks.
///
/// Clones share the same subscriber list, so the host can hand one hub to
/// every component instance and publish platform scroll events in a single
/// place. Handlers are passive: they observe the offset, they cannot block
/// or alter delivery.
#[derive(Clone)]
pub struct ScrollHub {
    inner: Arc<HubInner>,
}

struct HubInner {
    subscribers: RefCell<Vec<(SubscriptionId, ScrollHandler)>>,
    next_id: Cell<u64>,
}

impl ScrollHub {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(HubInner {
                subscribers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    /// Delivers one scroll tick to every subscriber.
    ///
    /// Dispatch runs over a snapshot of the current list, so handlers may
    /// subscribe or unsubscribe during delivery; changes take effect on the
    /// next publish.
    pub fn publish(&self, offset: f64) {
        let handlers: Vec<ScrollHandler> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(_, handler)| Arc::clone(handler))
            .collect();
        for handler in handlers {
            handler(offset);
        }
    }

    /// Subscribes and returns a guard that releases the subscription when
    /// dropped.
    pub fn subscribe_scoped(&self, handler: ScrollHandler) -> ScrollSubscription {
        let id = self.subscribe(handler);
        ScrollSubscription::new(Arc::new(self.clone()), id)
    }
}

impl Default for ScrollHub {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollSource for ScrollHub {
    fn subscribe(&self, handler: ScrollHandler) -> SubscriptionId {
        let id = SubscriptionId::from_raw(self.inner.next_id.get());
        self.inner.next_id.set(self.inner.next_id.get().wrapping_add(1));
        self.inner.subscribers.borrow_mut().push((id, handler));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        // Unknown or already-released ids are tolerated.
        self.inner
            .subscribers
            .borrow_mut()
            .retain(|(sid, _)| *sid != id);
    }
}

/// Scoped handle to a [`ScrollSource`] subscription.
///
/// Released exactly once: either explicitly via [`release`](Self::release)
/// or on drop. Dropping after an explicit release is a no-op.
pub struct ScrollSubscription {
    source: Arc<dyn ScrollSource>,
    id: Option<SubscriptionId>,
}

impl ScrollSubscription {
    pub fn new(source: Arc<dyn ScrollSource>, id: SubscriptionId) -> Self {
        Self {
            source,
            id: Some(id),
        }
    }

    pub fn id(&self) -> Option<SubscriptionId> {
        self.id
    }

    pub fn release(&mut self) {
        if let Some(id) = self.id.take() {
            self.source.unsubscribe(id);
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.release();
    }
}
