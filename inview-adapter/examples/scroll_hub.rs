// Example: one shared scroll source feeding independent components.
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use inview::ScrollDirectionTracker;
use inview_adapter::ScrollHub;

fn main() {
    let hub = ScrollHub::new();

    let header = Rc::new(RefCell::new(ScrollDirectionTracker::new()));
    let sidebar = Rc::new(RefCell::new(ScrollDirectionTracker::new()));

    let h = header.clone();
    let header_sub = hub.subscribe_scoped(Arc::new(move |off| {
        h.borrow_mut().on_scroll(off);
    }));
    let s = sidebar.clone();
    let _sidebar_sub = hub.subscribe_scoped(Arc::new(move |off| {
        s.borrow_mut().on_scroll(off);
    }));

    for offset in [0.0, 120.0, 80.0] {
        hub.publish(offset);
        println!(
            "offset={offset:>6} header={:?} sidebar={:?}",
            header.borrow().direction(),
            sidebar.borrow().direction(),
        );
    }

    // The header component unmounts: its subscription is released, the
    // sidebar keeps receiving ticks.
    drop(header_sub);
    hub.publish(300.0);
    println!(
        "after unmount: header={:?} sidebar={:?}",
        header.borrow().direction(),
        sidebar.borrow().direction(),
    );
}
