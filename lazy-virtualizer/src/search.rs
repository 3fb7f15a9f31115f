use core::cmp::Ordering;

use crate::store::MetadataStore;

/// Returns the largest index whose offset is `<= offset` (0 when `offset` precedes every item).
///
/// When the query falls inside already measured territory this is a plain binary search.
/// Otherwise it gallops forward from the high-water mark (1, 2, 4, ... items at a time) and
/// binary-searches the last bracket, so a far jump measures `O(log n)` brackets' worth of items
/// instead of the whole list.
///
/// Measurements past `item_count` (the list shrank) are ignored for this call, so the result is
/// always inside the list.
///
/// Zero-size items share their offset with the next item. The search stops at the first
/// midpoint that lands exactly on such a shared offset, so within a run of zero-size items the
/// answer is some index carrying that offset, not necessarily the largest. Which one depends on
/// how much of the list was already measured.
pub(crate) fn find_nearest_item<F>(
    store: &mut MetadataStore,
    item_count: usize,
    offset: u64,
    mut size_of: F,
) -> usize
where
    F: FnMut(usize) -> u32,
{
    let measured = store.measured_len().min(item_count);
    let last_measured_offset = measured
        .checked_sub(1)
        .and_then(|last| store.get(last))
        .map_or(0, |meta| meta.offset);

    if last_measured_offset >= offset {
        vtrace!(offset, last_measured_offset, "find_nearest_item: binary");
        binary_search(store, &mut size_of, 0, measured, offset)
    } else {
        vtrace!(offset, last_measured_offset, "find_nearest_item: exponential");
        let start = measured.saturating_sub(1);
        exponential_search(store, &mut size_of, item_count, start, offset)
    }
}

/// Binary search over `low..high` (exclusive upper bound).
fn binary_search<F>(
    store: &mut MetadataStore,
    size_of: &mut F,
    mut low: usize,
    mut high: usize,
    offset: u64,
) -> usize
where
    F: FnMut(usize) -> u32,
{
    while low < high {
        let middle = low + (high - low) / 2;
        let current = store.resolve(middle, &mut *size_of).offset;
        match current.cmp(&offset) {
            Ordering::Equal => return middle,
            Ordering::Less => low = middle + 1,
            Ordering::Greater => high = middle,
        }
    }

    low.saturating_sub(1)
}

fn exponential_search<F>(
    store: &mut MetadataStore,
    size_of: &mut F,
    item_count: usize,
    mut index: usize,
    offset: u64,
) -> usize
where
    F: FnMut(usize) -> u32,
{
    let mut interval = 1usize;
    while index < item_count && store.resolve(index, &mut *size_of).offset < offset {
        index = index.saturating_add(interval);
        interval = interval.saturating_mul(2);
    }

    let high = if item_count == 0 {
        0
    } else {
        index.min(item_count - 1) + 1
    };
    binary_search(store, size_of, index / 2, high, offset)
}
