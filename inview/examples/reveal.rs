// Example: reveal-on-scroll visibility driven by synthetic entries.
use std::sync::Arc;

use inview::{
    IntersectionEntry, ObserveConfig, ViewportObserver, VisibilityOptions, VisibilityTracker,
};

struct LoggingObserver;

impl ViewportObserver<&'static str> for LoggingObserver {
    fn observe(&self, target: &&'static str, config: &ObserveConfig<&'static str>) {
        println!(
            "observe {target} (threshold={}, root_margin={})",
            config.threshold, config.root_margin
        );
    }

    fn unobserve(&self, target: &&'static str) {
        println!("unobserve {target}");
    }
}

fn main() {
    let mut tracker: VisibilityTracker<&'static str> = VisibilityTracker::new(
        Arc::new(LoggingObserver),
        VisibilityOptions::new().with_on_change(Some(|t: &VisibilityTracker<&'static str>| {
            println!(
                "  -> is_visible={} has_animated={}",
                t.is_visible(),
                t.has_animated()
            );
        })),
    );
    tracker.set_target(Some("hero-section"));

    for is_intersecting in [false, true, false] {
        println!("entry: is_intersecting={is_intersecting}");
        tracker.on_intersection(IntersectionEntry {
            is_intersecting,
            intersection_ratio: if is_intersecting { 0.6 } else { 0.0 },
        });
    }
    // The once policy keeps the final state visible despite the exit entry.
    println!("final: {:?}", tracker.state());
}
