use lazy_virtualizer::VariableSizeList;

use crate::{RenderRange, ScrollDirection, ScrollState};

/// Computes the indexes to render for `scroll` over a viewport of `viewport_size`.
///
/// Overscan follows the scroll direction: while scrolling, only the side items are scrolling in
/// from gets the full `overscan_count`, the other side gets a single item. When idle both sides
/// get `max(1, overscan_count)`.
pub fn render_range(
    list: &mut VariableSizeList,
    scroll: ScrollState,
    viewport_size: u32,
    overscan_count: usize,
) -> RenderRange {
    let item_count = list.item_count();
    if item_count == 0 {
        return RenderRange::default();
    }

    let last = item_count - 1;
    let visible = list.range_to_render(scroll.offset, viewport_size);
    let visible_start = visible.start_index.min(last);
    let visible_stop = visible.stop_index.clamp(visible_start, last);

    let full = overscan_count.max(1);
    let backward = if !scroll.is_scrolling || scroll.direction == Some(ScrollDirection::Backward) {
        full
    } else {
        1
    };
    let forward = if !scroll.is_scrolling || scroll.direction == Some(ScrollDirection::Forward) {
        full
    } else {
        1
    };

    RenderRange {
        overscan_start: visible_start.saturating_sub(backward),
        overscan_stop: visible_stop.saturating_add(forward).min(last),
        visible_start,
        visible_stop,
    }
}
