use alloc::string::String;
use alloc::sync::Arc;

use crate::SubscriptionId;

/// The resolved observation configuration handed to a [`ViewportObserver`].
///
/// `root_margin` has already been through default coalescing (see
/// [`crate::VisibilityOptions::resolved_root_margin`]) and `threshold` is
/// clamped to `0.0..=1.0`.
#[derive(Clone, Debug, PartialEq)]
pub struct ObserveConfig<T> {
    /// Containing element used as the viewport for the intersection test.
    /// `None` means the platform viewport.
    pub root: Option<T>,
    /// Inset/outset applied to the root's bounding box, CSS margin shorthand.
    pub root_margin: String,
    /// Fraction of the target's area required inside the root to count as
    /// intersecting.
    pub threshold: f64,
}

/// Platform capability reporting whether a target element overlaps a
/// reference viewport.
///
/// The engine issues `observe`/`unobserve` commands through this trait and
/// receives entries back through [`crate::VisibilityTracker::on_intersection`].
/// This keeps the core a plain driven state machine: an adapter owns the real
/// platform observer (or a geometry-driven stand-in) and routes its callbacks
/// to the tracker.
///
/// Unobserving a target that is not currently observed must be a no-op.
pub trait ViewportObserver<T> {
    fn observe(&self, target: &T, config: &ObserveConfig<T>);
    fn unobserve(&self, target: &T);
}

/// Handler invoked with the current vertical scroll offset on every tick.
pub type ScrollHandler = Arc<dyn Fn(f64)>;

/// A passive scroll-event source with independently scoped subscribers.
///
/// `unsubscribe` with an unknown or already-released id must be a no-op.
pub trait ScrollSource {
    fn subscribe(&self, handler: ScrollHandler) -> SubscriptionId;
    fn unsubscribe(&self, id: SubscriptionId);
}
