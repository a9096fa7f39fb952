use crate::*;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::RefCell;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }

    fn gen_offset(&mut self) -> f64 {
        (self.next_u64() % 1_000) as f64
    }
}

#[derive(Clone, Debug, PartialEq)]
enum ObserverEvent {
    Observe {
        target: u32,
        root: Option<u32>,
        root_margin: String,
        threshold: f64,
    },
    Unobserve {
        target: u32,
    },
}

#[derive(Default)]
struct RecordingObserver {
    events: RefCell<Vec<ObserverEvent>>,
}

impl RecordingObserver {
    fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn events(&self) -> Vec<ObserverEvent> {
        self.events.borrow().clone()
    }

    fn observe_count(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| matches!(e, ObserverEvent::Observe { .. }))
            .count()
    }

    fn unobserve_count(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| matches!(e, ObserverEvent::Unobserve { .. }))
            .count()
    }

    fn last_observe(&self) -> Option<ObserverEvent> {
        self.events
            .borrow()
            .iter()
            .rev()
            .find(|e| matches!(e, ObserverEvent::Observe { .. }))
            .cloned()
    }
}

impl ViewportObserver<u32> for RecordingObserver {
    fn observe(&self, target: &u32, config: &ObserveConfig<u32>) {
        self.events.borrow_mut().push(ObserverEvent::Observe {
            target: *target,
            root: config.root,
            root_margin: config.root_margin.clone(),
            threshold: config.threshold,
        });
    }

    fn unobserve(&self, target: &u32) {
        self.events
            .borrow_mut()
            .push(ObserverEvent::Unobserve { target: *target });
    }
}

fn tracker(observer: &Arc<RecordingObserver>) -> VisibilityTracker<u32> {
    VisibilityTracker::new(observer.clone(), VisibilityOptions::new())
}

fn tracker_with(
    observer: &Arc<RecordingObserver>,
    options: VisibilityOptions<u32>,
) -> VisibilityTracker<u32> {
    VisibilityTracker::new(observer.clone(), options)
}

fn intersecting() -> IntersectionEntry {
    IntersectionEntry {
        is_intersecting: true,
        intersection_ratio: 1.0,
    }
}

fn not_intersecting() -> IntersectionEntry {
    IntersectionEntry {
        is_intersecting: false,
        intersection_ratio: 0.0,
    }
}

// === VisibilityTracker ===

#[test]
fn once_visibility_is_sticky_after_first_intersection() {
    let obs = RecordingObserver::new();
    let mut t = tracker(&obs);
    t.set_target(Some(1));
    assert!(!t.is_visible());
    assert_eq!(obs.observe_count(), 1);

    t.on_intersection(intersecting());
    assert!(t.is_visible());
    assert!(t.has_animated());
    // Detached for good: one unobserve, no resubscription.
    assert_eq!(obs.observe_count(), 1);
    assert_eq!(obs.unobserve_count(), 1);

    // Even if the platform delivers a stale exit entry, visible stays.
    t.on_intersection(not_intersecting());
    assert!(t.is_visible());
}

#[test]
fn repeating_mode_toggles_visibility_with_every_entry() {
    let obs = RecordingObserver::new();
    let mut t = tracker_with(&obs, VisibilityOptions::new().with_once(false));
    t.set_target(Some(7));

    t.on_intersection(intersecting());
    assert!(t.is_visible());
    assert!(!t.has_animated());

    t.on_intersection(not_intersecting());
    assert!(!t.is_visible());

    t.on_intersection(intersecting());
    assert!(t.is_visible());

    // Repeating mode never tears the observation down on its own.
    assert_eq!(obs.observe_count(), 1);
    assert_eq!(obs.unobserve_count(), 0);
}

#[test]
fn has_animated_causes_exactly_one_teardown_cycle() {
    let obs = RecordingObserver::new();
    let mut t = tracker(&obs);
    t.set_target(Some(1));
    t.on_intersection(intersecting());
    t.on_intersection(intersecting());

    let events = obs.events();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], ObserverEvent::Observe { target: 1, .. }));
    assert_eq!(events[1], ObserverEvent::Unobserve { target: 1 });
}

#[test]
fn detach_is_idempotent_and_drop_releases_once() {
    let obs = RecordingObserver::new();
    let mut t = tracker(&obs);
    t.set_target(Some(1));

    t.detach();
    t.detach();
    assert_eq!(obs.unobserve_count(), 1);

    drop(t);
    assert_eq!(obs.unobserve_count(), 1);
}

#[test]
fn drop_detaches_live_observation() {
    let obs = RecordingObserver::new();
    {
        let mut t = tracker(&obs);
        t.set_target(Some(3));
        assert_eq!(obs.observe_count(), 1);
    }
    assert_eq!(obs.unobserve_count(), 1);
}

#[test]
fn set_target_switches_observation_and_keeps_state() {
    let obs = RecordingObserver::new();
    let mut t = tracker_with(&obs, VisibilityOptions::new().with_once(false));
    t.set_target(Some(1));
    t.on_intersection(intersecting());
    assert!(t.is_visible());

    t.set_target(Some(2));
    let events = obs.events();
    assert!(matches!(events[0], ObserverEvent::Observe { target: 1, .. }));
    assert_eq!(events[1], ObserverEvent::Unobserve { target: 1 });
    assert!(matches!(events[2], ObserverEvent::Observe { target: 2, .. }));
    // Flags belong to the mount, not to the handle.
    assert!(t.is_visible());

    t.set_target(None);
    assert_eq!(obs.events().last(), Some(&ObserverEvent::Unobserve { target: 2 }));
}

#[test]
fn entries_without_a_target_are_ignored() {
    let obs = RecordingObserver::new();
    let mut t = tracker(&obs);
    t.on_intersection(intersecting());
    assert!(!t.is_visible());
    assert!(!t.has_animated());
    assert!(obs.events().is_empty());
}

#[test]
fn reconfigure_does_not_flicker_an_already_visible_target() {
    let obs = RecordingObserver::new();
    let seen = Arc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let options = VisibilityOptions::new().with_once(false).with_on_change(Some(
        move |t: &VisibilityTracker<u32>| {
            sink.borrow_mut().push(t.is_visible());
        },
    ));
    let mut t = tracker_with(&obs, options);
    t.set_target(Some(1));
    t.on_intersection(intersecting());
    assert!(t.is_visible());

    // Dependency change: threshold. The subscription cycles, the flag must not.
    t.update_options(|o| o.threshold = 0.5);
    assert!(t.is_visible());
    assert_eq!(obs.observe_count(), 2);
    assert_eq!(obs.unobserve_count(), 1);
    assert!(
        seen.borrow().iter().skip_while(|v| !**v).all(|v| *v),
        "is_visible reverted during resubscription: {:?}",
        seen.borrow()
    );

    match obs.last_observe() {
        Some(ObserverEvent::Observe { threshold, .. }) => assert_eq!(threshold, 0.5),
        other => panic!("expected observe, got {other:?}"),
    }
}

#[test]
fn one_entry_fires_at_most_one_change_notification() {
    let obs = RecordingObserver::new();
    let calls = Arc::new(RefCell::new(0usize));
    let sink = calls.clone();
    let options = VisibilityOptions::new().with_on_change(Some(
        move |_: &VisibilityTracker<u32>| {
            *sink.borrow_mut() += 1;
        },
    ));
    let mut t = tracker_with(&obs, options);
    t.set_target(Some(1));
    let before = *calls.borrow();

    // Flips is_visible AND has_animated AND detaches, in one entry.
    t.on_intersection(intersecting());
    assert_eq!(*calls.borrow(), before + 1);
}

#[test]
fn root_margin_empty_string_falls_back_to_50px() {
    let obs = RecordingObserver::new();
    let mut t = tracker_with(&obs, VisibilityOptions::new().with_root_margin(""));
    t.set_target(Some(1));
    match obs.last_observe() {
        Some(ObserverEvent::Observe { root_margin, .. }) => assert_eq!(root_margin, "50px"),
        other => panic!("expected observe, got {other:?}"),
    }
}

#[test]
fn root_margin_default_and_explicit_values_pass_through() {
    let obs = RecordingObserver::new();
    let mut t = tracker(&obs);
    t.set_target(Some(1));
    match obs.last_observe() {
        Some(ObserverEvent::Observe { root_margin, .. }) => assert_eq!(root_margin, "0px"),
        other => panic!("expected observe, got {other:?}"),
    }

    t.update_options(|o| o.root_margin = String::from("24px"));
    match obs.last_observe() {
        Some(ObserverEvent::Observe { root_margin, .. }) => assert_eq!(root_margin, "24px"),
        other => panic!("expected observe, got {other:?}"),
    }
}

#[test]
fn threshold_is_clamped_into_unit_interval() {
    let obs = RecordingObserver::new();
    let mut t = tracker_with(&obs, VisibilityOptions::new().with_threshold(1.5));
    t.set_target(Some(1));
    match obs.last_observe() {
        Some(ObserverEvent::Observe { threshold, .. }) => assert_eq!(threshold, 1.0),
        other => panic!("expected observe, got {other:?}"),
    }

    t.update_options(|o| o.threshold = -0.2);
    match obs.last_observe() {
        Some(ObserverEvent::Observe { threshold, .. }) => assert_eq!(threshold, 0.0),
        other => panic!("expected observe, got {other:?}"),
    }
}

#[test]
fn root_is_forwarded_to_the_observer() {
    let obs = RecordingObserver::new();
    let mut t = tracker_with(&obs, VisibilityOptions::new().with_root(Some(99)));
    t.set_target(Some(1));
    match obs.last_observe() {
        Some(ObserverEvent::Observe { root, .. }) => assert_eq!(root, Some(99)),
        other => panic!("expected observe, got {other:?}"),
    }
}

#[test]
fn restore_state_with_animated_detaches_under_once() {
    let obs = RecordingObserver::new();
    let mut t = tracker(&obs);
    t.set_target(Some(1));

    t.restore_state(VisibilityState {
        is_visible: true,
        has_animated: true,
    });
    assert!(t.is_visible());
    assert!(t.has_animated());
    assert_eq!(obs.unobserve_count(), 1);
    assert_eq!(obs.observe_count(), 1);
}

#[test]
fn visibility_matches_reference_model_under_random_entries() {
    let mut rng = Lcg::new(0x5eed);
    for case in 0..50u64 {
        let once = rng.gen_bool();
        let obs = RecordingObserver::new();
        let mut t = tracker_with(&obs, VisibilityOptions::new().with_once(once));
        t.set_target(Some(1));

        let mut vis = false;
        let mut animated = false;
        for _ in 0..40 {
            let inter = rng.gen_bool();
            t.on_intersection(if inter {
                intersecting()
            } else {
                not_intersecting()
            });

            if inter {
                vis = true;
                if once {
                    animated = true;
                }
            } else if !once || !animated {
                vis = false;
            }

            assert_eq!(t.is_visible(), vis, "case {case}, once={once}");
            assert_eq!(t.has_animated(), animated, "case {case}, once={once}");
        }
    }
}

// === ScrollDirectionTracker ===

#[test]
fn direction_sequence_matches_offset_deltas() {
    let mut t = ScrollDirectionTracker::new();
    assert_eq!(t.direction(), None);
    assert_eq!(t.last_offset(), 0.0);

    assert_eq!(t.on_scroll(100.0), Some(ScrollDirection::Down));
    assert_eq!(t.on_scroll(50.0), Some(ScrollDirection::Up));
    assert_eq!(t.on_scroll(50.0), Some(ScrollDirection::Up));
    assert_eq!(t.on_scroll(200.0), Some(ScrollDirection::Down));
    assert_eq!(t.last_offset(), 200.0);
}

#[test]
fn direction_first_tick_compares_against_zero_seed() {
    // A page mounted already scrolled classifies its first tick as down.
    let mut t = ScrollDirectionTracker::new();
    assert_eq!(t.on_scroll(480.0), Some(ScrollDirection::Down));

    let mut t = ScrollDirectionTracker::new();
    assert_eq!(t.on_scroll(0.0), None);
}

#[test]
fn direction_initial_classification_is_configurable() {
    let mut t = ScrollDirectionTracker::new_with_initial(Some(ScrollDirection::Up));
    assert_eq!(t.direction(), Some(ScrollDirection::Up));
    assert_eq!(t.on_scroll(0.0), Some(ScrollDirection::Up));
    assert_eq!(t.on_scroll(10.0), Some(ScrollDirection::Down));
}

#[test]
fn direction_ignores_non_comparable_offsets() {
    let mut t = ScrollDirectionTracker::new();
    assert_eq!(t.on_scroll(f64::NAN), None);
    assert_eq!(t.last_offset(), 0.0);
    assert_eq!(t.on_scroll(5.0), Some(ScrollDirection::Down));
}

#[test]
fn direction_restore_state_seeds_the_comparison() {
    let mut t = ScrollDirectionTracker::new();
    t.restore_state(DirectionState {
        direction: None,
        last_offset: 400.0,
    });
    assert_eq!(t.on_scroll(100.0), Some(ScrollDirection::Up));
}

#[test]
fn direction_matches_sign_of_last_moving_delta() {
    let mut rng = Lcg::new(42);
    let mut t = ScrollDirectionTracker::new();
    let mut last = 0.0f64;
    let mut expected = None;
    for _ in 0..200 {
        let offset = rng.gen_offset();
        if offset > last {
            expected = Some(ScrollDirection::Down);
        } else if offset < last {
            expected = Some(ScrollDirection::Up);
        }
        last = offset;
        assert_eq!(t.on_scroll(offset), expected);
    }
}

// === CompressionTracker ===

fn compression(obs: &Arc<RecordingObserver>) -> CompressionTracker<u32> {
    let mut c = CompressionTracker::new(obs.clone(), VisibilityOptions::new());
    c.set_target(Some(1));
    c
}

#[test]
fn compression_flags_a_target_deep_in_the_zone() {
    let obs = RecordingObserver::new();
    let mut c = compression(&obs);
    // top=150 < 200, bottom=50 > 0, progress = 1 - 50/1000 = 0.95
    assert!(c.on_scroll(BoundingRect::new(150.0, 50.0), 1000.0));
    assert!(c.is_compressed());
}

#[test]
fn compression_requires_enough_exit_progress() {
    let obs = RecordingObserver::new();
    let mut c = compression(&obs);
    // In zone, but progress = 1 - 800/1000 = 0.2, not past 0.3.
    assert!(!c.on_scroll(BoundingRect::new(150.0, 800.0), 1000.0));
    assert!(!c.is_compressed());
}

#[test]
fn compression_is_false_outside_the_zone_regardless_of_bottom() {
    let obs = RecordingObserver::new();
    let mut c = compression(&obs);
    assert!(!c.on_scroll(BoundingRect::new(300.0, 50.0), 1000.0));
    assert!(!c.is_compressed());
    assert!(!c.on_scroll(BoundingRect::new(300.0, 900.0), 1000.0));
    assert!(!c.is_compressed());

    // Zone boundary is strict: top exactly at 0.2 * H stays out.
    assert!(!c.on_scroll(BoundingRect::new(200.0, 50.0), 1000.0));
    // Fully scrolled past: bottom no longer positive.
    assert!(!c.on_scroll(BoundingRect::new(-500.0, 0.0), 1000.0));
}

#[test]
fn compression_resets_when_the_target_leaves_the_zone() {
    let obs = RecordingObserver::new();
    let mut c = compression(&obs);
    assert!(c.on_scroll(BoundingRect::new(150.0, 50.0), 1000.0));
    assert!(c.is_compressed());
    // Unchanged geometry reports no change.
    assert!(!c.on_scroll(BoundingRect::new(150.0, 50.0), 1000.0));

    assert!(c.on_scroll(BoundingRect::new(300.0, 900.0), 1000.0));
    assert!(!c.is_compressed());
}

#[test]
fn compression_without_a_target_is_a_no_op() {
    let obs = RecordingObserver::new();
    let mut c: CompressionTracker<u32> = CompressionTracker::new(obs.clone(), VisibilityOptions::new());
    assert!(!c.on_scroll(BoundingRect::new(150.0, 50.0), 1000.0));
    assert!(!c.is_compressed());
}

#[test]
fn compression_tolerates_degenerate_viewport_heights() {
    let obs = RecordingObserver::new();
    let mut c = compression(&obs);
    assert!(!c.on_scroll(BoundingRect::new(-10.0, 5.0), 0.0));
    assert!(!c.is_compressed());
}

#[test]
fn compression_composes_visibility_unmodified() {
    let obs = RecordingObserver::new();
    let mut c = compression(&obs);
    c.on_intersection(intersecting());
    assert!(c.is_visible());
    assert!(c.visibility().has_animated());
    // The once policy ran inside the composed tracker.
    assert_eq!(obs.unobserve_count(), 1);

    // Compression and visibility stay independent signals.
    assert!(c.on_scroll(BoundingRect::new(100.0, 100.0), 1000.0));
    assert!(c.is_visible());
    assert!(c.is_compressed());

    let state = c.state();
    assert!(state.is_compressed);
}
