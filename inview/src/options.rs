use alloc::string::String;
use alloc::sync::Arc;

use crate::visibility::VisibilityTracker;

/// A callback fired when a visibility tracker's observable state changes.
pub type OnChangeCallback<T> = Arc<dyn Fn(&VisibilityTracker<T>)>;

/// Default intersection threshold: 10% of the target inside the root.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Declared default root margin.
pub const DEFAULT_ROOT_MARGIN: &str = "0px";

/// An explicitly empty `root_margin` resolves to this value instead of the
/// declared default. Kept for compatibility with the observed behavior of
/// existing consumers.
pub const EMPTY_ROOT_MARGIN_FALLBACK: &str = "50px";

/// Configuration for [`crate::VisibilityTracker`].
///
/// Cheap to clone: the callback is stored in an `Arc`, so adapters can tweak
/// a field and call `VisibilityTracker::set_options` without reallocating
/// closures.
pub struct VisibilityOptions<T> {
    /// Fraction of the target's area required inside the root to count as
    /// intersecting. Clamped to `0.0..=1.0` when the observation is issued.
    pub threshold: f64,

    /// Containing element used as the viewport for the intersection test.
    /// `None` means the platform viewport.
    pub root: Option<T>,

    /// Inset/outset applied to the root's bounding box before the
    /// intersection test, CSS margin shorthand. An empty string resolves to
    /// [`EMPTY_ROOT_MARGIN_FALLBACK`].
    pub root_margin: String,

    /// When `true` (the default), the observation detaches permanently after
    /// the first positive intersection and `is_visible` stays `true`.
    pub once: bool,

    /// Optional callback fired when the tracker's state changes.
    pub on_change: Option<OnChangeCallback<T>>,
}

impl<T> VisibilityOptions<T> {
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root: None,
            root_margin: String::from(DEFAULT_ROOT_MARGIN),
            once: true,
            on_change: None,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_root(mut self, root: Option<T>) -> Self {
        self.root = root;
        self
    }

    pub fn with_root_margin(mut self, root_margin: impl Into<String>) -> Self {
        self.root_margin = root_margin.into();
        self
    }

    pub fn with_once(mut self, once: bool) -> Self {
        self.once = once;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&VisibilityTracker<T>) + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    /// The root margin as handed to the observer.
    ///
    /// An empty string coalesces to `"50px"`; everything else passes through
    /// unchanged, including the declared `"0px"` default.
    pub fn resolved_root_margin(&self) -> &str {
        if self.root_margin.is_empty() {
            EMPTY_ROOT_MARGIN_FALLBACK
        } else {
            &self.root_margin
        }
    }

    pub(crate) fn resolved_threshold(&self) -> f64 {
        self.threshold.clamp(0.0, 1.0)
    }
}

impl<T> Default for VisibilityOptions<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for VisibilityOptions<T> {
    fn clone(&self) -> Self {
        Self {
            threshold: self.threshold,
            root: self.root.clone(),
            root_margin: self.root_margin.clone(),
            once: self.once,
            on_change: self.on_change.clone(),
        }
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for VisibilityOptions<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VisibilityOptions")
            .field("threshold", &self.threshold)
            .field("root", &self.root)
            .field("root_margin", &self.root_margin)
            .field("once", &self.once)
            .finish_non_exhaustive()
    }
}
