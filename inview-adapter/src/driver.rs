use core::cell::RefCell;

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use inview::{BoundingRect, IntersectionEntry, ObserveConfig, ViewportObserver};

use crate::{RootMargin, TargetKey};

#[cfg(feature = "std")]
type RegistryMap<T> = HashMap<T, Registration<T>>;
#[cfg(not(feature = "std"))]
type RegistryMap<T> = BTreeMap<T, Registration<T>>;

struct Registration<T> {
    root: Option<T>,
    margin: RootMargin,
    threshold: f64,
    last_intersecting: Option<bool>,
}

/// A [`ViewportObserver`] implementation driven by host-supplied geometry.
///
/// The host feeds per-frame rectangles through [`sample`](Self::sample); the
/// driver computes the target's intersection ratio against the
/// margin-expanded root interval and reports an entry only when the
/// intersecting classification changes (the first sample after `observe`
/// always reports). This models a platform observer's threshold-crossing
/// delivery, which keeps the engine exercisable without a rendering surface.
pub struct GeometryDriver<T> {
    registry: RefCell<RegistryMap<T>>,
}

impl<T: TargetKey> GeometryDriver<T> {
    pub fn new() -> Self {
        Self {
            registry: RefCell::new(RegistryMap::new()),
        }
    }

    pub fn is_observing(&self, target: &T) -> bool {
        self.registry.borrow().contains_key(target)
    }

    pub fn observed_count(&self) -> usize {
        self.registry.borrow().len()
    }

    /// The root element registered for `target`, if any. Hosts use this to
    /// decide which rectangle to pass as `root_rect` when sampling.
    pub fn root_for(&self, target: &T) -> Option<T> {
        self.registry
            .borrow()
            .get(target)
            .and_then(|r| r.root.clone())
    }

    /// Evaluates one geometry frame for `target`.
    ///
    /// `root_rect` is the registered root element's rect; pass `None` when
    /// the root is the platform viewport (`[0, viewport_height]`). Returns
    /// an entry only on a crossing; `None` for unobserved targets and for
    /// frames that do not change the classification.
    pub fn sample(
        &self,
        target: &T,
        target_rect: BoundingRect,
        viewport_height: f64,
        root_rect: Option<BoundingRect>,
    ) -> Option<IntersectionEntry> {
        let mut registry = self.registry.borrow_mut();
        let registration = registry.get_mut(target)?;
        let root = root_rect.unwrap_or(BoundingRect {
            top: 0.0,
            bottom: viewport_height,
        });
        let entry = evaluate(
            target_rect,
            root,
            registration.margin,
            registration.threshold,
        );
        if registration.last_intersecting == Some(entry.is_intersecting) {
            return None;
        }
        registration.last_intersecting = Some(entry.is_intersecting);
        Some(entry)
    }
}

impl<T: TargetKey> Default for GeometryDriver<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TargetKey> ViewportObserver<T> for GeometryDriver<T> {
    fn observe(&self, target: &T, config: &ObserveConfig<T>) {
        let registration = Registration {
            root: config.root.clone(),
            margin: RootMargin::parse_or_zero(&config.root_margin),
            threshold: config.threshold,
            last_intersecting: None,
        };
        // Re-observing replaces the previous registration wholesale.
        self.registry
            .borrow_mut()
            .insert(target.clone(), registration);
    }

    fn unobserve(&self, target: &T) {
        // Unknown targets are tolerated.
        self.registry.borrow_mut().remove(target);
    }
}

/// Only the scroll axis participates: the root interval is expanded by the
/// vertical margins, then overlapped with the target's edges.
fn evaluate(
    target: BoundingRect,
    root: BoundingRect,
    margin: RootMargin,
    threshold: f64,
) -> IntersectionEntry {
    let root_top = root.top - margin.top;
    let root_bottom = root.bottom + margin.bottom;
    let overlap = (target.bottom.min(root_bottom) - target.top.max(root_top)).max(0.0);
    let height = target.height();
    let intersection_ratio = if height > 0.0 {
        (overlap / height).clamp(0.0, 1.0)
    } else if target.top >= root_top && target.top <= root_bottom {
        // Zero-height targets intersect as a point.
        1.0
    } else {
        0.0
    };
    let is_intersecting = if threshold <= 0.0 {
        intersection_ratio > 0.0
    } else {
        intersection_ratio >= threshold
    };
    IntersectionEntry {
        is_intersecting,
        intersection_ratio,
    }
}
