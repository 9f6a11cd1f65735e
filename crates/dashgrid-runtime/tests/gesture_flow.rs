//! End-to-end gesture flows through the public surface API.

use dashgrid_core::event::PointerEvent;
use dashgrid_core::geometry::GridRect;
use dashgrid_layout::{Widget, WidgetId};
use dashgrid_runtime::{LayoutNotice, LayoutSurface, NotificationSink, SurfaceConfig};
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

fn widget(id: u64, x: u16, y: u16, w: u16, h: u16) -> Widget {
    Widget::new(WidgetId(id), GridRect::new(x, y, w, h))
}

/// 1200px viewport: one column = 100px, one row = 40px.
fn surface(widgets: Vec<Widget>) -> LayoutSurface {
    let mut s = LayoutSurface::new(1200.0, SurfaceConfig::default().editing());
    s.set_widgets(widgets);
    s
}

#[test]
fn failed_resize_leaves_the_list_byte_for_byte_identical() {
    // A above locked B with nothing but B below: growing A to h=3 would
    // have to relocate B, so the whole gesture must revert.
    let widgets = vec![
        widget(1, 0, 0, 4, 2),
        widget(2, 0, 2, 4, 2).locked(),
    ];
    let mut s = surface(widgets.clone());

    // Grab A's bottom edge at (200, 75) and pull down one row.
    s.handle_pointer(PointerEvent::down(200.0, 75.0));
    s.handle_pointer(PointerEvent::moved(200.0, 115.0));
    s.handle_pointer(PointerEvent::up(200.0, 115.0));

    assert_eq!(s.widgets(), widgets.as_slice());
}

#[test]
fn reflow_notice_counts_every_displaced_widget() {
    #[derive(Default)]
    struct NoticeLog(Rc<RefCell<Vec<LayoutNotice>>>);
    impl NotificationSink for NoticeLog {
        fn notify(&mut self, notice: LayoutNotice) {
            self.0.borrow_mut().push(notice);
        }
    }

    // Three widgets stacked under A; growing A cascades through all of
    // them.
    let notices = Rc::new(RefCell::new(Vec::new()));
    let mut s = LayoutSurface::new(1200.0, SurfaceConfig::default().editing())
        .with_notifications(Box::new(NoticeLog(notices.clone())));
    s.set_widgets(vec![
        widget(1, 0, 0, 4, 2),
        widget(2, 0, 2, 4, 2),
        widget(3, 0, 4, 4, 2),
        widget(4, 0, 6, 4, 2),
    ]);

    s.handle_pointer(PointerEvent::down(200.0, 75.0));
    s.handle_pointer(PointerEvent::moved(200.0, 155.0)); // +2 rows
    s.handle_pointer(PointerEvent::up(200.0, 155.0));

    assert_eq!(
        notices.borrow().as_slice(),
        &[LayoutNotice::WidgetsReflowed { count: 3 }]
    );
}

#[test]
fn drag_swap_then_swap_back_restores_the_layout() {
    let original = vec![widget(1, 0, 0, 4, 2), widget(2, 4, 0, 8, 4)];
    let mut s = surface(original.clone());

    // A's handle to B's handle.
    s.handle_pointer(PointerEvent::down(200.0, 10.0));
    s.handle_pointer(PointerEvent::up(500.0, 10.0));
    assert_ne!(s.widgets(), original.as_slice());

    // B (now at A's old spot) back onto A.
    s.handle_pointer(PointerEvent::down(200.0, 10.0));
    s.handle_pointer(PointerEvent::up(500.0, 10.0));
    assert_eq!(s.widgets(), original.as_slice());
}

proptest! {
    // However the pointer wanders mid-gesture, the committed list is
    // untouched until pointer-up.
    #[test]
    fn committed_state_is_stable_mid_gesture(
        moves in proptest::collection::vec((0.0f32..1400.0, -100.0f32..600.0), 1..20)
    ) {
        let widgets = vec![widget(1, 0, 0, 4, 2), widget(2, 4, 0, 4, 2)];
        let mut s = surface(widgets.clone());

        s.handle_pointer(PointerEvent::down(395.0, 40.0));
        for (x, y) in moves {
            s.handle_pointer(PointerEvent::moved(x, y));
            prop_assert_eq!(s.widgets(), widgets.as_slice());
        }
    }
}
