use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use std::sync::Mutex;

use lazy_virtualizer::{Align, Invalidation, ListOptions, VariableSizeList};

fn uniform(count: usize, size: u32, viewport: u32) -> Controller {
    let mut c = Controller::new(ListOptions::new(count, move |_| size));
    c.on_viewport_size(viewport);
    c
}

#[test]
fn idle_overscan_widens_both_sides() {
    let mut c = uniform(100, 10, 50);
    c.scroll_to(200);
    assert!(!c.is_scrolling());

    let r = c.render_range();
    assert_eq!(
        r,
        RenderRange {
            overscan_start: 18,
            overscan_stop: 26,
            visible_start: 20,
            visible_stop: 24,
        }
    );
    assert_eq!(r.indexes().count(), 9);
}

#[test]
fn overscan_follows_the_scroll_direction() {
    let mut c = uniform(100, 10, 50);
    c.on_scroll(200, 0);
    assert_eq!(c.scroll_direction(), Some(ScrollDirection::Forward));
    let r = c.render_range();
    assert_eq!((r.overscan_start, r.overscan_stop), (19, 26));

    c.on_scroll(150, 16);
    assert_eq!(c.scroll_direction(), Some(ScrollDirection::Backward));
    let r = c.render_range();
    assert_eq!((r.visible_start, r.visible_stop), (15, 19));
    assert_eq!((r.overscan_start, r.overscan_stop), (13, 20));
}

#[test]
fn zero_overscan_still_renders_one_extra_item() {
    let mut c = uniform(100, 10, 50).with_overscan_count(0);
    c.scroll_to(200);
    let r = c.render_range();
    assert_eq!((r.overscan_start, r.overscan_stop), (19, 25));
}

#[test]
fn overscan_is_clamped_to_the_list() {
    let mut c = uniform(10, 10, 50);
    let r = c.render_range();
    assert_eq!(r.overscan_start, 0);
    assert_eq!(r.visible_stop, 4);

    c.scroll_to(60);
    let r = c.render_range();
    assert_eq!(r.visible_start, 6);
    assert_eq!(r.visible_stop, 9);
    assert_eq!(r.overscan_stop, 9);
}

#[test]
fn empty_list_renders_nothing() {
    let mut c = uniform(0, 10, 50);
    assert_eq!(c.render_range(), RenderRange::default());
    assert_eq!(c.scroll_to_item(5, Align::Start), 0);
    assert_eq!(c.list().last_measured_index(), None);
}

#[test]
fn render_range_can_be_driven_without_a_controller() {
    let mut list = VariableSizeList::new(ListOptions::new(100, |_| 10));
    let scroll = ScrollState {
        offset: 200,
        direction: Some(ScrollDirection::Forward),
        is_scrolling: true,
    };
    let r = render_range(&mut list, scroll, 50, 3);
    assert_eq!((r.overscan_start, r.overscan_stop), (19, 27));
}

#[test]
fn repeated_scroll_offset_is_ignored() {
    let mut c = uniform(100, 10, 50);
    c.take_needs_render();
    c.on_scroll(0, 0);
    assert!(!c.is_scrolling());
    assert!(!c.needs_render());
    assert_eq!(c.scroll_direction(), None);
}

#[test]
fn tick_settles_scrolling_after_the_delay() {
    let mut c = uniform(100, 10, 50);
    c.on_scroll(100, 1_000);
    c.item_style(10);
    assert_eq!(c.cached_style_count(), 1);
    c.take_needs_render();

    assert!(!c.tick(1_100));
    assert!(c.is_scrolling());

    c.on_scroll(120, 1_100);
    assert!(!c.tick(1_200));
    assert!(c.tick(1_250));
    assert!(!c.is_scrolling());
    assert_eq!(c.cached_style_count(), 0);
    assert!(c.take_needs_render());

    // Nothing more to settle.
    assert!(!c.tick(5_000));
}

#[test]
fn custom_reset_delay() {
    let mut c = uniform(100, 10, 50);
    c.set_is_scrolling_reset_delay_ms(10);
    c.on_scroll(5, 0);
    assert!(c.tick(10));
}

#[test]
fn scroll_to_item_clamps_the_index() {
    let mut c = uniform(10, 10, 30);
    // Index 9 spans [90, 100); the last full page starts at 70.
    assert_eq!(c.scroll_to_item(50, Align::Start), 70);
    assert_eq!(c.scroll_offset(), 70);
    assert!(!c.is_scrolling());
}

#[test]
fn scroll_to_item_auto_keeps_visible_items_in_place() {
    let mut c = uniform(100, 10, 50);
    c.scroll_to(200);
    assert_eq!(c.scroll_to_item(22, Align::Auto), 200);
    assert_eq!(c.scroll_to_item(30, Align::Auto), 260);
    assert_eq!(c.scroll_direction(), Some(ScrollDirection::Forward));
    // Far above the current offset: Smart centers, which clamps to 0 at the top.
    assert_eq!(c.scroll_to_item(0, Align::Smart), 0);
}

#[test]
fn item_styles_follow_the_layout() {
    let mut c = Controller::new(ListOptions::new(10, |i| 10 + i as u32));
    let s = c.item_style(2);
    assert_eq!(s.offset, 21);
    assert_eq!((s.top(), s.left()), (21, 0));
    assert_eq!((s.height(), s.width()), (Some(12), None));

    c.set_layout(Layout::Horizontal);
    assert_eq!(c.cached_style_count(), 0);
    let s = c.item_style(2);
    assert_eq!((s.top(), s.left()), (0, 21));
    assert_eq!((s.height(), s.width()), (None, Some(12)));
}

#[test]
fn item_styles_are_cached_until_reset() {
    let sizes = Arc::new(Mutex::new(vec![10u32; 20]));
    let mut c = Controller::new(ListOptions::new(20, {
        let sizes = Arc::clone(&sizes);
        move |i| sizes.lock().unwrap()[i]
    }));
    assert_eq!(c.item_style(5).offset, 50);

    sizes.lock().unwrap()[3] = 40;
    // Still served from the cache.
    assert_eq!(c.item_style(5).offset, 50);

    c.take_needs_render();
    c.reset_after_index(3, false);
    assert_eq!(c.cached_style_count(), 0);
    assert!(!c.needs_render());
    assert_eq!(c.item_style(5).offset, 80);

    c.reset_after_index(0, true);
    assert!(c.take_needs_render());
}

#[test]
fn reset_after_index_forwards_the_eviction_signal() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let options = ListOptions::new(10, |_| 1).with_on_invalidate(Some({
        let seen = Arc::clone(&seen);
        move |inv: Invalidation| seen.lock().unwrap().push(inv)
    }));
    let mut c = Controller::new(options);
    c.item_style(8);
    c.reset_after_index(4, false);

    assert_eq!(
        *seen.lock().unwrap(),
        vec![Invalidation {
            index: 4,
            force_rerender: false
        }]
    );
    assert_eq!(c.list().last_measured_index(), Some(3));
}

#[test]
fn resize_picks_the_scroll_axis() {
    let mut c = uniform(100, 10, 0);
    c.on_resize(640, 480);
    assert_eq!(c.viewport_size(), 480);

    let mut c = uniform(100, 10, 0).with_layout(Layout::Horizontal);
    c.on_resize(640, 480);
    assert_eq!(c.viewport_size(), 640);
    let r = c.render_range();
    assert_eq!(r.visible_stop, 63);
}

#[test]
fn item_count_and_size_changes_request_a_render() {
    let mut c = uniform(100, 10, 50);
    c.item_style(40);
    c.take_needs_render();

    c.set_item_count(100);
    assert!(!c.needs_render());
    c.set_item_count(20);
    assert!(c.take_needs_render());
    assert_eq!(c.estimated_total_size(), 200);

    c.set_item_size(|_| 5);
    assert!(c.take_needs_render());
    assert_eq!(c.cached_style_count(), 0);
    assert_eq!(c.estimated_total_size(), 20 * 50);
    assert_eq!(c.item_style(10).offset, 50);
}

#[test]
fn scroll_state_snapshot() {
    let mut c = uniform(100, 10, 50).with_initial_scroll_offset(30);
    assert_eq!(
        c.scroll_state(),
        ScrollState {
            offset: 30,
            direction: None,
            is_scrolling: false
        }
    );
    c.on_scroll(10, 0);
    assert_eq!(
        c.scroll_state(),
        ScrollState {
            offset: 10,
            direction: Some(ScrollDirection::Backward),
            is_scrolling: true
        }
    );
}

#[test]
fn render_range_after_shrinking_stays_inside_the_list() {
    let mut c = uniform(100, 10, 50);
    c.item_style(99);
    c.scroll_to(500);
    c.set_item_count(20);

    let r = c.render_range();
    assert_eq!(
        r,
        RenderRange {
            overscan_start: 17,
            overscan_stop: 19,
            visible_start: 19,
            visible_stop: 19,
        }
    );
    assert_eq!(r.indexes().count(), 3);
}
