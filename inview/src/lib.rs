//! A headless scroll-visibility engine for reveal-on-scroll UI state.
//!
//! For host-side glue (geometry-driven observation, scroll fan-out, a
//! combined controller), see the `inview-adapter` crate.
//!
//! This crate focuses on the state machines behind scroll-reactive UI
//! behavior: an intersection-driven visibility signal with a sticky
//! "animated once" policy, an up/down classification of scroll movement, and
//! a compression signal derived from a target's bounding geometry.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - an element-intersection observation primitive (via [`ViewportObserver`])
//! - a passive scroll-event source (via [`ScrollSource`])
//! - bounding-rectangle and viewport-height queries per tick
//!
//! All failure modes are silent no-ops by design: a missing target, a
//! duplicate detach, or an unknown subscription id never surface an error.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod compression;
mod direction;
mod observer;
mod options;
mod state;
mod types;
mod visibility;

#[cfg(test)]
mod tests;

pub use compression::{CompressionTracker, PROGRESS_THRESHOLD, ZONE_TOP_FRACTION};
pub use direction::ScrollDirectionTracker;
pub use observer::{ObserveConfig, ScrollHandler, ScrollSource, ViewportObserver};
pub use options::{
    DEFAULT_ROOT_MARGIN, DEFAULT_THRESHOLD, EMPTY_ROOT_MARGIN_FALLBACK, OnChangeCallback,
    VisibilityOptions,
};
pub use state::{CompressionState, DirectionState, VisibilityState};
pub use types::{BoundingRect, IntersectionEntry, ScrollDirection, SubscriptionId};
pub use visibility::VisibilityTracker;
