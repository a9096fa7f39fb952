// Example: driving all three signals from synthetic scroll frames.
use inview::{BoundingRect, VisibilityOptions};
use inview_adapter::{Controller, ScrollFrame};

fn main() {
    let mut controller = Controller::new(VisibilityOptions::new());
    controller.set_target(Some("hero"));

    // (offset, target top, target bottom) per tick, viewport height 1000.
    let script = [
        (0.0, 1200.0, 1400.0),
        (100.0, 500.0, 700.0),
        (50.0, 150.0, 50.0),
        (200.0, 300.0, 900.0),
    ];

    for (scroll_offset, top, bottom) in script {
        controller.on_frame(ScrollFrame {
            scroll_offset,
            viewport_height: 1000.0,
            target_rect: Some(BoundingRect::new(top, bottom)),
            root_rect: None,
        });
        println!(
            "offset={scroll_offset:>6} direction={:?} visible={} compressed={}",
            controller.direction(),
            controller.is_visible(),
            controller.is_compressed(),
        );
    }
}
