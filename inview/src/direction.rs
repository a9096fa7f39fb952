use core::cmp::Ordering;

use crate::{DirectionState, ScrollDirection};

/// Classifies the most recent vertical scroll movement by comparing
/// successive offsets.
///
/// `last_offset` is seeded at `0.0`, not the mount-time scroll position: the
/// first tick on a page that mounts already scrolled down classifies as
/// [`ScrollDirection::Down`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollDirectionTracker {
    direction: Option<ScrollDirection>,
    last_offset: f64,
}

impl ScrollDirectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with a preset classification instead of none.
    pub fn new_with_initial(direction: Option<ScrollDirection>) -> Self {
        Self {
            direction,
            last_offset: 0.0,
        }
    }

    /// Applies one scroll tick and returns the current classification.
    ///
    /// Strictly greater offsets classify as down, strictly smaller as up; an
    /// unchanged offset leaves the classification alone. `last_offset` is
    /// always updated afterwards. A non-comparable offset (NaN) is ignored
    /// entirely.
    pub fn on_scroll(&mut self, offset: f64) -> Option<ScrollDirection> {
        let Some(ord) = offset.partial_cmp(&self.last_offset) else {
            return self.direction;
        };
        self.direction = match ord {
            Ordering::Greater => Some(ScrollDirection::Down),
            Ordering::Less => Some(ScrollDirection::Up),
            Ordering::Equal => self.direction,
        };
        self.last_offset = offset;
        ivtrace!(offset, direction = ?self.direction, "on_scroll");
        self.direction
    }

    pub fn direction(&self) -> Option<ScrollDirection> {
        self.direction
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    /// Returns a lightweight snapshot of the tracker.
    pub fn state(&self) -> DirectionState {
        DirectionState {
            direction: self.direction,
            last_offset: self.last_offset,
        }
    }

    /// Restores a previously captured snapshot. Hosts that want the true
    /// mount-time scroll position as the comparison seed can restore one
    /// here.
    pub fn restore_state(&mut self, state: DirectionState) {
        self.direction = state.direction;
        self.last_offset = state.last_offset;
    }
}
