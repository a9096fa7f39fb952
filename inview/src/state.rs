use crate::ScrollDirection;

/// A lightweight, serializable snapshot of a visibility tracker's flags.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibilityState {
    pub is_visible: bool,
    /// Sticky once `once` is configured: set on the first positive
    /// intersection and never cleared for the rest of the mount.
    pub has_animated: bool,
}

/// A lightweight, serializable snapshot of a direction tracker.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectionState {
    pub direction: Option<ScrollDirection>,
    pub last_offset: f64,
}

/// Snapshot of the derived compression signal.
///
/// The flag is a pure function of the latest geometry tick; nothing else is
/// persisted between computations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompressionState {
    pub is_compressed: bool,
}
