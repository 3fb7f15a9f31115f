use alloc::sync::Arc;

use crate::align::offset_for_alignment;
use crate::search::find_nearest_item;
use crate::store::MetadataStore;
use crate::{Align, Invalidation, ItemMetadata, ListOptions, VisibleRange};

/// Index over a list whose item sizes are only discovered on demand.
///
/// Items are measured lazily, strictly in ascending order, through the `item_size` callback in
/// [`ListOptions`]. Every query measures only as far as it has to:
/// - locating the item at an offset gallops forward instead of scanning,
/// - total size is extrapolated from what was measured plus an estimate for the rest,
/// - a visible range walks forward only until the viewport is covered.
///
/// The type holds no UI state. Scroll offset and viewport size are passed in by the caller on
/// each query; see the `lazy-virtualizer-adapter` crate for a controller that owns them.
#[derive(Clone, Debug)]
pub struct VariableSizeList {
    options: ListOptions,
    store: MetadataStore,
}

impl VariableSizeList {
    pub fn new(options: ListOptions) -> Self {
        vdebug!(
            item_count = options.item_count,
            estimated_item_size = options.estimated_item_size,
            "VariableSizeList::new"
        );
        let store = MetadataStore::new(options.estimated_item_size);
        Self { options, store }
    }

    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    /// Replaces the options.
    ///
    /// A different `item_size` callback invalidates every measurement. A count change alone keeps
    /// them: shrinking is absorbed by the total-size estimate and growing extends lazily.
    pub fn set_options(&mut self, options: ListOptions) {
        let item_size_unchanged = Arc::ptr_eq(&self.options.item_size, &options.item_size);
        self.options = options;
        self.store
            .set_estimated_item_size(self.options.estimated_item_size);
        vtrace!(
            item_count = self.options.item_count,
            estimated_item_size = self.options.estimated_item_size,
            "VariableSizeList::set_options"
        );
        if !item_size_unchanged {
            self.invalidate_from(0, true);
        }
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut ListOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn item_count(&self) -> usize {
        self.options.item_count
    }

    pub fn set_item_count(&mut self, item_count: usize) {
        self.options.item_count = item_count;
    }

    /// Installs a new size callback and drops every measurement made with the previous one.
    pub fn set_item_size(&mut self, item_size: impl Fn(usize) -> u32 + Send + Sync + 'static) {
        self.options.item_size = Arc::new(item_size);
        self.invalidate_from(0, true);
    }

    pub fn estimated_item_size(&self) -> u32 {
        self.store.estimated_item_size()
    }

    pub fn set_estimated_item_size(&mut self, estimated_item_size: u32) {
        self.options.estimated_item_size = estimated_item_size;
        self.store.set_estimated_item_size(estimated_item_size);
    }

    pub fn set_on_invalidate(
        &mut self,
        on_invalidate: Option<impl Fn(Invalidation) + Send + Sync + 'static>,
    ) {
        self.options.on_invalidate = on_invalidate.map(|f| Arc::new(f) as _);
    }

    pub fn store(&self) -> &MetadataStore {
        &self.store
    }

    pub fn last_measured_index(&self) -> Option<usize> {
        self.store.last_measured_index()
    }

    /// Offset and size of `index`, measuring up to it if needed.
    pub fn item_metadata(&mut self, index: usize) -> ItemMetadata {
        if index >= self.options.item_count {
            vwarn!(
                index,
                item_count = self.options.item_count,
                "item_metadata: index past the end of the list"
            );
        }
        self.store.resolve(index, &*self.options.item_size)
    }

    pub fn item_offset(&mut self, index: usize) -> u64 {
        self.item_metadata(index).offset
    }

    /// Size of an already measured item. `None` past the high-water mark: resolve it first.
    pub fn item_size(&self, index: usize) -> Option<u32> {
        self.store.get(index).map(|meta| meta.size)
    }

    /// Metadata of an already measured item, without measuring anything.
    pub fn measured_item(&self, index: usize) -> Option<ItemMetadata> {
        self.store.get(index)
    }

    /// Best-known scrollable extent for the configured item count.
    pub fn estimated_total_size(&self) -> u64 {
        self.store.estimated_total_size(self.options.item_count)
    }

    pub fn estimated_total_size_for(&self, item_count: usize) -> u64 {
        self.store.estimated_total_size(item_count)
    }

    /// Scroll offset that brings `index` into view according to `align`.
    ///
    /// Measures up to `index` first, so the total size used for clamping reflects that
    /// measurement rather than the estimate it replaced.
    pub fn offset_for_index_and_alignment(
        &mut self,
        index: usize,
        align: Align,
        scroll_offset: u64,
        viewport_size: u32,
    ) -> u64 {
        let item = self.item_metadata(index);
        let total_size = self.estimated_total_size();
        let offset = offset_for_alignment(item, total_size, viewport_size, align, scroll_offset);
        vtrace!(
            index,
            align = align.name(),
            scroll_offset,
            offset,
            "offset_for_index_and_alignment"
        );
        offset
    }

    /// Largest index whose offset is `<= offset`.
    pub fn start_index_for_offset(&mut self, offset: u64) -> usize {
        find_nearest_item(
            &mut self.store,
            self.options.item_count,
            offset,
            &*self.options.item_size,
        )
    }

    /// Last index needed to fill a viewport of `viewport_size` that starts at `scroll_offset`,
    /// walking forward from `start_index`.
    pub fn stop_index_for_start_index(
        &mut self,
        start_index: usize,
        scroll_offset: u64,
        viewport_size: u32,
    ) -> usize {
        let item_count = self.options.item_count;
        let max_offset = scroll_offset.saturating_add(viewport_size as u64);

        let mut offset = self.item_metadata(start_index).end();
        let mut stop_index = start_index;
        while stop_index + 1 < item_count && offset < max_offset {
            stop_index += 1;
            offset = offset.saturating_add(self.item_metadata(stop_index).size as u64);
        }
        stop_index
    }

    /// Items intersecting the viewport `[scroll_offset, scroll_offset + viewport_size)`.
    ///
    /// No overscan is applied. An empty list yields `0..=0` without measuring anything.
    pub fn range_to_render(&mut self, scroll_offset: u64, viewport_size: u32) -> VisibleRange {
        if self.options.item_count == 0 {
            return VisibleRange::default();
        }
        let start_index = self.start_index_for_offset(scroll_offset);
        let stop_index = self.stop_index_for_start_index(start_index, scroll_offset, viewport_size);
        VisibleRange {
            start_index,
            stop_index,
        }
    }

    /// Forgets measurements from `index` onward and emits the eviction signal.
    ///
    /// Entries past the new high-water mark are re-measured on their next access.
    pub fn invalidate_from(&mut self, index: usize, force_rerender: bool) {
        self.store.invalidate_from(index);
        if let Some(cb) = &self.options.on_invalidate {
            cb(Invalidation {
                index,
                force_rerender,
            });
        }
    }

    /// Forgets every measurement.
    pub fn reset(&mut self, force_rerender: bool) {
        self.invalidate_from(0, force_rerender);
    }
}
