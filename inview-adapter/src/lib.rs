//! Adapter utilities for the `inview` crate.
//!
//! The `inview` crate is UI-agnostic and focuses on the tracker state
//! machines. This crate provides small, framework-neutral helpers commonly
//! needed by hosts:
//!
//! - Root-margin parsing (CSS margin shorthand)
//! - A geometry-driven [`ViewportObserver`](inview::ViewportObserver)
//!   implementation, so the engine runs without a real rendering surface
//! - A shared scroll fan-out with scoped, RAII-released subscriptions
//! - A controller wiring all three trackers to per-frame host input
//!
//! This crate is intentionally framework-agnostic (no DOM/winit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod driver;
mod hub;
mod key;
mod margin;


pub use controller::{Controller, ScrollFrame};
pub use driver::GeometryDriver;
pub use hub::{ScrollHub, ScrollSubscription};
pub use key::TargetKey;
pub use margin::RootMargin;
