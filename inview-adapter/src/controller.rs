use alloc::sync::Arc;

use inview::{
    BoundingRect, CompressionTracker, ScrollDirection, ScrollDirectionTracker, VisibilityOptions,
};

use crate::{GeometryDriver, TargetKey};

/// Per-frame input from the host: the scroll offset plus current geometry.
///
/// `target_rect` / `root_rect` are the bounding edges the host read this
/// tick; leave them `None` when the element is unmounted (the frame then
/// only feeds direction classification) or when the root is the platform
/// viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollFrame {
    pub scroll_offset: f64,
    pub viewport_height: f64,
    pub target_rect: Option<BoundingRect>,
    pub root_rect: Option<BoundingRect>,
}

/// A framework-neutral controller that wires the three trackers to a single
/// geometry-driven observer.
///
/// This type does not hold any UI objects. The host drives it by calling:
/// - [`set_target`](Self::set_target) when the element mounts/unmounts
/// - [`on_frame`](Self::on_frame) on every scroll tick
///
/// One persistent scroll path feeds all derived signals; intersection
/// entries are synthesized by the [`GeometryDriver`] and routed into the
/// composed trackers.
pub struct Controller<T: TargetKey> {
    driver: Arc<GeometryDriver<T>>,
    compression: CompressionTracker<T>,
    direction: ScrollDirectionTracker,
}

impl<T: TargetKey + 'static> Controller<T> {
    pub fn new(options: VisibilityOptions<T>) -> Self {
        let driver = Arc::new(GeometryDriver::new());
        let compression = CompressionTracker::new(driver.clone(), options);
        Self {
            driver,
            compression,
            direction: ScrollDirectionTracker::new(),
        }
    }

    pub fn driver(&self) -> &GeometryDriver<T> {
        &self.driver
    }

    pub fn compression(&self) -> &CompressionTracker<T> {
        &self.compression
    }

    pub fn compression_mut(&mut self) -> &mut CompressionTracker<T> {
        &mut self.compression
    }

    pub fn direction_tracker(&self) -> &ScrollDirectionTracker {
        &self.direction
    }

    pub fn direction_tracker_mut(&mut self) -> &mut ScrollDirectionTracker {
        &mut self.direction
    }

    /// Binds (or clears) the watched element.
    pub fn set_target(&mut self, target: Option<T>) {
        self.compression.set_target(target);
    }

    /// Clones the tracker options, applies `f`, and lets the tracker decide
    /// whether the observation must be re-issued.
    pub fn update_options(&mut self, f: impl FnOnce(&mut VisibilityOptions<T>)) {
        self.compression.visibility_mut().update_options(f);
    }

    /// Advances every derived signal from one host frame.
    pub fn on_frame(&mut self, frame: ScrollFrame) {
        self.direction.on_scroll(frame.scroll_offset);

        let Some(rect) = frame.target_rect else {
            return;
        };
        let Some(target) = self.compression.visibility().target().cloned() else {
            return;
        };
        if let Some(entry) =
            self.driver
                .sample(&target, rect, frame.viewport_height, frame.root_rect)
        {
            self.compression.on_intersection(entry);
        }
        self.compression.on_scroll(rect, frame.viewport_height);
    }

    pub fn is_visible(&self) -> bool {
        self.compression.is_visible()
    }

    pub fn is_compressed(&self) -> bool {
        self.compression.is_compressed()
    }

    pub fn direction(&self) -> Option<ScrollDirection> {
        self.direction.direction()
    }
}
