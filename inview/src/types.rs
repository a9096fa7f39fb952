/// Classification of the most recent vertical scroll movement.
///
/// "No movement classified yet" is `Option::None` on the tracker side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Up,
    Down,
}

/// A target's bounding edges on the scroll axis, relative to the viewport.
///
/// `top` is negative once the target's top edge has scrolled past the
/// viewport's top edge.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingRect {
    pub top: f64,
    pub bottom: f64,
}

impl BoundingRect {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// A single observation delivered for a watched target.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntersectionEntry {
    pub is_intersecting: bool,
    /// Fraction of the target's area inside the (margin-expanded) root.
    pub intersection_ratio: f64,
}

/// Opaque handle issued by a [`crate::ScrollSource`] for one subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}
