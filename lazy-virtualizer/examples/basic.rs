// Example: range and scroll-to queries over a large list with lazily measured rows.
use lazy_virtualizer::{Align, ListOptions, VariableSizeList};

fn main() {
    let mut list = VariableSizeList::new(
        ListOptions::new(1_000_000, |i| 20 + (i % 7) as u32 * 4).with_estimated_item_size(30),
    );

    let range = list.range_to_render(0, 600);
    println!("visible_range={range:?}");
    println!(
        "measured={:?} estimated_total_size={}",
        list.last_measured_index(),
        list.estimated_total_size()
    );

    // Jump far ahead: only the items up to the target are measured.
    let offset = list.offset_for_index_and_alignment(250_000, Align::Center, 0, 600);
    let range = list.range_to_render(offset, 600);
    println!("after scroll_to_index: offset={offset} visible_range={range:?}");
    println!("measured={:?}", list.last_measured_index());
}
