use alloc::sync::Arc;

use crate::observer::ViewportObserver;
use crate::visibility::VisibilityTracker;
use crate::{BoundingRect, CompressionState, IntersectionEntry, VisibilityOptions};

/// Fraction of the viewport height below the top edge: a target whose top is
/// above this line has entered the compression zone.
pub const ZONE_TOP_FRACTION: f64 = 0.2;

/// Exit progress beyond which the target reports as compressed.
pub const PROGRESS_THRESHOLD: f64 = 0.3;

/// Derives a boolean "compressed" signal from a target's position as the
/// page scrolls, layered on an unmodified [`VisibilityTracker`].
///
/// The host feeds the target's bounding rect and the viewport height on
/// every scroll tick; intersection entries are forwarded to the inner
/// visibility tracker untouched.
pub struct CompressionTracker<T> {
    visibility: VisibilityTracker<T>,
    is_compressed: bool,
}

impl<T> CompressionTracker<T> {
    pub fn new(observer: Arc<dyn ViewportObserver<T>>, options: VisibilityOptions<T>) -> Self {
        Self::from_visibility(VisibilityTracker::new(observer, options))
    }

    /// Wraps an existing visibility tracker.
    pub fn from_visibility(visibility: VisibilityTracker<T>) -> Self {
        Self {
            visibility,
            is_compressed: false,
        }
    }

    pub fn visibility(&self) -> &VisibilityTracker<T> {
        &self.visibility
    }

    pub fn visibility_mut(&mut self) -> &mut VisibilityTracker<T> {
        &mut self.visibility
    }

    pub fn into_visibility(self) -> VisibilityTracker<T> {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    pub fn is_compressed(&self) -> bool {
        self.is_compressed
    }

    pub fn state(&self) -> CompressionState {
        CompressionState {
            is_compressed: self.is_compressed,
        }
    }

    /// Detaches the inner observation. Idempotent.
    pub fn detach(&mut self) {
        self.visibility.detach();
    }

    /// Recomputes the compression signal from the current geometry.
    ///
    /// The flag is a pure function of this tick's rect and viewport height:
    /// in the zone (`top < 0.2 * H`, `bottom > 0`) it compares the exit
    /// progress `1 - bottom / H` against [`PROGRESS_THRESHOLD`]; out of the
    /// zone it is `false`. No-op without an attached target. Returns whether
    /// the flag changed.
    pub fn on_scroll(&mut self, rect: BoundingRect, viewport_height: f64) -> bool {
        if self.visibility.target().is_none() {
            return false;
        }
        let next = compressed_at(rect, viewport_height);
        if next == self.is_compressed {
            return false;
        }
        ivtrace!(
            top = rect.top,
            bottom = rect.bottom,
            viewport_height,
            is_compressed = next,
            "compression change"
        );
        self.is_compressed = next;
        true
    }
}

impl<T: Clone + PartialEq> CompressionTracker<T> {
    /// Binds (or clears) the watched target on the inner tracker.
    pub fn set_target(&mut self, target: Option<T>) {
        self.visibility.set_target(target);
    }

    /// Forwards an entry to the inner visibility tracker, unmodified.
    pub fn on_intersection(&mut self, entry: IntersectionEntry) {
        self.visibility.on_intersection(entry);
    }
}

fn compressed_at(rect: BoundingRect, viewport_height: f64) -> bool {
    if viewport_height <= 0.0 {
        return false;
    }
    let in_zone = rect.top < viewport_height * ZONE_TOP_FRACTION && rect.bottom > 0.0;
    if !in_zone {
        return false;
    }
    let progress = 1.0 - rect.bottom / viewport_height;
    progress > PROGRESS_THRESHOLD
}

impl<T: core::fmt::Debug> core::fmt::Debug for CompressionTracker<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CompressionTracker")
            .field("visibility", &self.visibility)
            .field("is_compressed", &self.is_compressed)
            .finish()
    }
}
