// Example: driving a controller from simulated UI events.
use lazy_virtualizer::{Align, ListOptions};
use lazy_virtualizer_adapter::{Controller, Layout};

fn main() {
    let mut c = Controller::new(ListOptions::new(10_000, |i| 18 + (i % 3) as u32 * 12))
        .with_layout(Layout::Vertical)
        .with_overscan_count(3);
    c.on_resize(320, 480);

    for (now_ms, offset) in [(0u64, 40u64), (16, 120), (32, 260)] {
        c.on_scroll(offset, now_ms);
        let range = c.render_range();
        println!("t={now_ms} offset={offset} range={range:?}");
        for i in range.indexes() {
            let style = c.item_style(i);
            let _ = (style.top(), style.height());
        }
    }

    // Scrolling settles after the debounce delay.
    c.tick(500);
    println!("is_scrolling={}", c.is_scrolling());

    let offset = c.scroll_to_item(5_000, Align::Smart);
    println!("scroll_to_item(5000) => {offset}, range={:?}", c.render_range());

    // Row 4_990 changed height: drop measurements from there on.
    c.reset_after_index(4_990, true);
    println!(
        "needs_render={} total={}",
        c.take_needs_render(),
        c.estimated_total_size()
    );
}
