// Example: classifying scroll movement from an offset script.
use inview::ScrollDirectionTracker;

fn main() {
    let mut tracker = ScrollDirectionTracker::new();
    for offset in [0.0, 100.0, 50.0, 50.0, 200.0] {
        let direction = tracker.on_scroll(offset);
        println!("offset={offset:>6} direction={direction:?}");
    }
}
