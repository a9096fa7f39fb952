use alloc::string::String;
use alloc::sync::Arc;
use core::cell::Cell;

use crate::observer::{ObserveConfig, ViewportObserver};
use crate::{IntersectionEntry, VisibilityOptions, VisibilityState};

/// The intersection-driven visibility state machine.
///
/// Attach a target with [`set_target`](Self::set_target) and deliver platform
/// entries through [`on_intersection`](Self::on_intersection); the tracker
/// exposes a live `is_visible` signal and a sticky `has_animated` flag.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects, only an opaque target handle.
/// - Observation side effects go through an injected [`ViewportObserver`].
/// - Your adapter routes the platform's intersection callbacks back in.
///
/// With `once` configured (the default), the observation is torn down
/// permanently after the first positive intersection: `is_visible` never
/// reverts for the remainder of the mount.
pub struct VisibilityTracker<T> {
    options: VisibilityOptions<T>,
    observer: Arc<dyn ViewportObserver<T>>,
    target: Option<T>,
    is_visible: bool,
    has_animated: bool,
    observing: bool,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl<T> VisibilityTracker<T> {
    pub fn new(observer: Arc<dyn ViewportObserver<T>>, options: VisibilityOptions<T>) -> Self {
        if !(0.0..=1.0).contains(&options.threshold) {
            ivwarn!(
                threshold = options.threshold,
                "threshold outside 0.0..=1.0, clamping"
            );
        }
        ivdebug!(once = options.once, "VisibilityTracker::new");
        Self {
            options,
            observer,
            target: None,
            is_visible: false,
            has_animated: false,
            observing: false,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &VisibilityOptions<T> {
        &self.options
    }

    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    pub fn has_animated(&self) -> bool {
        self.has_animated
    }

    /// Returns a lightweight snapshot of the tracker's flags.
    pub fn state(&self) -> VisibilityState {
        VisibilityState {
            is_visible: self.is_visible,
            has_animated: self.has_animated,
        }
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&VisibilityTracker<T>) + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    /// Detaches the current observation, if any. Idempotent: detaching an
    /// already-detached target is a no-op.
    pub fn detach(&mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        if !self.observing {
            return;
        }
        self.observing = false;
        if let Some(target) = &self.target {
            self.observer.unobserve(target);
        }
    }

    /// `once` fired: the observation stays down for the rest of the mount.
    fn permanently_detached(&self) -> bool {
        self.options.once && self.has_animated
    }

    fn set_is_visible(&mut self, is_visible: bool) {
        if self.is_visible == is_visible {
            return;
        }
        self.is_visible = is_visible;
        self.notify();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }
}

impl<T: Clone + PartialEq> VisibilityTracker<T> {
    pub fn set_options(&mut self, options: VisibilityOptions<T>) {
        let resubscribe = self.options.threshold != options.threshold
            || self.options.root != options.root
            || self.options.root_margin != options.root_margin
            || self.options.once != options.once;
        self.options = options;
        ivtrace!(once = self.options.once, resubscribe, "set_options");
        if resubscribe {
            self.reconfigure();
        }
        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to
    /// `set_options`, which decides whether the observation must be
    /// re-issued.
    pub fn update_options(&mut self, f: impl FnOnce(&mut VisibilityOptions<T>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    /// Binds (or clears) the watched target.
    ///
    /// The previous target is always detached first. Visibility flags are
    /// retained across target changes; they belong to the mount, not to the
    /// handle.
    pub fn set_target(&mut self, target: Option<T>) {
        if self.target == target {
            return;
        }
        self.teardown();
        self.target = target;
        self.resubscribe();
        self.notify();
    }

    /// Tears down and re-issues the observation with the current
    /// configuration.
    ///
    /// This is the single entry point for every dependency change:
    /// `threshold`, `root`, `root_margin`, `once`, and `has_animated` all
    /// funnel through here. Re-running it with unchanged geometry must not
    /// flicker `is_visible`: the tracker's flags are untouched; only the
    /// subscription cycles.
    pub fn reconfigure(&mut self) {
        self.teardown();
        self.resubscribe();
    }

    fn resubscribe(&mut self) {
        if self.observing || self.permanently_detached() {
            return;
        }
        let Some(target) = self.target.clone() else {
            return;
        };
        let config = ObserveConfig {
            root: self.options.root.clone(),
            root_margin: String::from(self.options.resolved_root_margin()),
            threshold: self.options.resolved_threshold(),
        };
        self.observer.observe(&target, &config);
        self.observing = true;
    }

    /// Applies the most recent entry for the watched target.
    ///
    /// - Intersecting: `is_visible` becomes `true`; with `once`, the sticky
    ///   `has_animated` flag is set and the observation detaches for good.
    /// - Not intersecting: `is_visible` becomes `false` unless the sticky
    ///   post-animation state is in effect.
    ///
    /// No-op when no target is attached.
    pub fn on_intersection(&mut self, entry: IntersectionEntry) {
        if self.target.is_none() {
            return;
        }
        ivtrace!(
            is_intersecting = entry.is_intersecting,
            ratio = entry.intersection_ratio,
            "on_intersection"
        );
        self.batch_update(|t| {
            if entry.is_intersecting {
                t.set_is_visible(true);
                if t.options.once {
                    t.set_has_animated(true);
                }
            } else if !t.options.once || !t.has_animated {
                t.set_is_visible(false);
            }
        });
    }

    fn set_has_animated(&mut self, has_animated: bool) {
        if self.has_animated == has_animated {
            return;
        }
        self.has_animated = has_animated;
        // Subscription eligibility depends on this flag.
        self.reconfigure();
        self.notify();
    }

    /// Restores tracker flags from a snapshot and re-evaluates the
    /// subscription, since `has_animated` participates in the detach policy.
    pub fn restore_state(&mut self, state: VisibilityState) {
        self.batch_update(|t| {
            t.set_is_visible(state.is_visible);
            t.set_has_animated(state.has_animated);
        });
    }
}

impl<T> Drop for VisibilityTracker<T> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for VisibilityTracker<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VisibilityTracker")
            .field("options", &self.options)
            .field("target", &self.target)
            .field("is_visible", &self.is_visible)
            .field("has_animated", &self.has_animated)
            .field("observing", &self.observing)
            .finish_non_exhaustive()
    }
}
