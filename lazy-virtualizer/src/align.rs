use crate::{Align, ItemMetadata};

/// Scroll offset that brings `item` into a viewport of `viewport_size` according to `align`.
///
/// `total_size` must already account for `item` having been measured.
pub(crate) fn offset_for_alignment(
    item: ItemMetadata,
    total_size: u64,
    viewport_size: u32,
    align: Align,
    scroll_offset: u64,
) -> u64 {
    let view = viewport_size as u64;

    // Item flush with the viewport start, never past the last full page.
    let max_offset = item.offset.min(total_size.saturating_sub(view));
    // Item flush with the viewport end.
    let min_offset = item.end().saturating_sub(view);

    let align = match align {
        Align::Smart
            if scroll_offset >= min_offset.saturating_sub(view)
                && scroll_offset <= max_offset.saturating_add(view) =>
        {
            Align::Auto
        }
        Align::Smart => Align::Center,
        other => other,
    };

    match align {
        Align::Start => max_offset,
        Align::End => min_offset,
        // round(min + (max - min) / 2), half-up; also valid when the item outgrows the viewport.
        Align::Center => min_offset.saturating_add(max_offset).saturating_add(1) / 2,
        Align::Auto | Align::Smart => {
            if scroll_offset >= min_offset && scroll_offset <= max_offset {
                scroll_offset
            } else if scroll_offset < min_offset {
                min_offset
            } else {
                max_offset
            }
        }
    }
}
