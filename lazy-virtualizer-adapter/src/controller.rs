use core::cmp;

use lazy_virtualizer::{Align, ListOptions, VariableSizeList};

use crate::{ItemStyle, ItemStyleCache, Layout, RenderRange, ScrollDirection, ScrollState};

/// Default number of extra items rendered on each side of the viewport.
pub const DEFAULT_OVERSCAN_COUNT: usize = 2;

/// Default debounce before `is_scrolling` falls back to `false`.
pub const DEFAULT_IS_SCROLLING_RESET_DELAY_MS: u64 = 150;

/// A framework-neutral controller that wraps a [`VariableSizeList`] with the state a windowed
/// list component keeps around it: scroll offset and direction, viewport size, overscan and a
/// per-item style cache.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_resize` / `on_viewport_size` and `on_scroll` when UI events occur
/// - `tick(now_ms)` on a timer to settle `is_scrolling`
/// - `render_range()` and `item_style(i)` while rendering
///
/// `needs_render` is raised whenever something visible changed; poll it with
/// [`Controller::take_needs_render`].
#[derive(Clone, Debug)]
pub struct Controller {
    list: VariableSizeList,
    layout: Layout,
    viewport_size: u32,
    scroll_offset: u64,
    scroll_direction: Option<ScrollDirection>,
    is_scrolling: bool,
    last_scroll_event_ms: Option<u64>,
    is_scrolling_reset_delay_ms: u64,
    overscan_count: usize,
    styles: ItemStyleCache,
    needs_render: bool,
}

impl Controller {
    pub fn new(options: ListOptions) -> Self {
        Self::from_list(VariableSizeList::new(options))
    }

    pub fn from_list(list: VariableSizeList) -> Self {
        Self {
            list,
            layout: Layout::default(),
            viewport_size: 0,
            scroll_offset: 0,
            scroll_direction: None,
            is_scrolling: false,
            last_scroll_event_ms: None,
            is_scrolling_reset_delay_ms: DEFAULT_IS_SCROLLING_RESET_DELAY_MS,
            overscan_count: DEFAULT_OVERSCAN_COUNT,
            styles: ItemStyleCache::new(),
            needs_render: true,
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_overscan_count(mut self, overscan_count: usize) -> Self {
        self.overscan_count = overscan_count;
        self
    }

    pub fn with_initial_scroll_offset(mut self, offset: u64) -> Self {
        self.scroll_offset = offset;
        self
    }

    pub fn list(&self) -> &VariableSizeList {
        &self.list
    }

    pub fn into_list(self) -> VariableSizeList {
        self.list
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn set_layout(&mut self, layout: Layout) {
        if self.layout == layout {
            return;
        }
        self.layout = layout;
        self.styles.clear();
        self.needs_render = true;
    }

    pub fn overscan_count(&self) -> usize {
        self.overscan_count
    }

    pub fn set_overscan_count(&mut self, overscan_count: usize) {
        self.overscan_count = overscan_count;
        self.needs_render = true;
    }

    pub fn set_is_scrolling_reset_delay_ms(&mut self, delay_ms: u64) {
        self.is_scrolling_reset_delay_ms = delay_ms;
    }

    pub fn viewport_size(&self) -> u32 {
        self.viewport_size
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            offset: self.scroll_offset,
            direction: self.scroll_direction,
            is_scrolling: self.is_scrolling,
        }
    }

    pub fn item_count(&self) -> usize {
        self.list.item_count()
    }

    pub fn set_item_count(&mut self, item_count: usize) {
        if self.list.item_count() == item_count {
            return;
        }
        self.list.set_item_count(item_count);
        self.needs_render = true;
    }

    /// Installs a new size callback. Every measurement and cached style is dropped.
    pub fn set_item_size(&mut self, item_size: impl Fn(usize) -> u32 + Send + Sync + 'static) {
        self.list.set_item_size(item_size);
        self.styles.clear();
        self.needs_render = true;
    }

    pub fn estimated_total_size(&self) -> u64 {
        self.list.estimated_total_size()
    }

    /// Call this when the scroll container is resized.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        self.on_viewport_size(self.layout.main_axis(width, height));
    }

    pub fn on_viewport_size(&mut self, viewport_size: u32) {
        if self.viewport_size == viewport_size {
            return;
        }
        self.viewport_size = viewport_size;
        self.needs_render = true;
    }

    /// Call this when the UI reports a scroll offset change (e.g. user wheel/drag).
    ///
    /// Marks the list as scrolling until `tick` observes `is_scrolling_reset_delay_ms` without a
    /// further scroll event.
    pub fn on_scroll(&mut self, scroll_offset: u64, now_ms: u64) {
        if scroll_offset == self.scroll_offset {
            return;
        }
        atrace!(scroll_offset, now_ms, "on_scroll");
        self.apply_scroll_offset(scroll_offset);
        self.is_scrolling = true;
        self.last_scroll_event_ms = Some(now_ms);
    }

    /// Settles `is_scrolling` once scroll events have been quiet for the reset delay.
    ///
    /// Returns `true` when scrolling stopped on this tick. Styles cached while scrolling are
    /// dropped at that point.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.is_scrolling {
            return false;
        }
        let Some(last) = self.last_scroll_event_ms else {
            return false;
        };
        if now_ms.saturating_sub(last) < self.is_scrolling_reset_delay_ms {
            return false;
        }
        self.is_scrolling = false;
        self.last_scroll_event_ms = None;
        self.styles.clear();
        self.needs_render = true;
        true
    }

    /// Applies a programmatic scroll offset. Does not mark the list as scrolling.
    pub fn scroll_to(&mut self, scroll_offset: u64) -> u64 {
        if scroll_offset != self.scroll_offset {
            self.apply_scroll_offset(scroll_offset);
        }
        self.scroll_offset
    }

    /// Scrolls so that `index` is positioned according to `align`.
    ///
    /// `index` is clamped into the list. Returns the applied offset.
    pub fn scroll_to_item(&mut self, index: usize, align: Align) -> u64 {
        let item_count = self.list.item_count();
        if item_count == 0 {
            return self.scroll_offset;
        }
        let index = cmp::min(index, item_count - 1);
        let offset = self.list.offset_for_index_and_alignment(
            index,
            align,
            self.scroll_offset,
            self.viewport_size,
        );
        self.scroll_to(offset)
    }

    /// Indexes to render for the current scroll state and viewport.
    pub fn render_range(&mut self) -> RenderRange {
        let scroll = self.scroll_state();
        crate::render_range(
            &mut self.list,
            scroll,
            self.viewport_size,
            self.overscan_count,
        )
    }

    /// Placement of `index`, measured on first use and cached until the next invalidation.
    pub fn item_style(&mut self, index: usize) -> ItemStyle {
        if let Some(style) = self.styles.get(index) {
            return style;
        }
        let style = ItemStyle::new(self.list.item_metadata(index), self.layout);
        self.styles.insert(index, style);
        style
    }

    pub fn cached_style_count(&self) -> usize {
        self.styles.len()
    }

    /// Re-measures items from `index` onward, e.g. after their content changed.
    ///
    /// Cached styles are always dropped; a re-render is only requested when `force_rerender`.
    pub fn reset_after_index(&mut self, index: usize, force_rerender: bool) {
        adebug!(index, force_rerender, "reset_after_index");
        self.list.invalidate_from(index, force_rerender);
        self.styles.clear();
        if force_rerender {
            self.needs_render = true;
        }
    }

    pub fn needs_render(&self) -> bool {
        self.needs_render
    }

    /// Returns whether a render was requested since the last call, and clears the request.
    pub fn take_needs_render(&mut self) -> bool {
        core::mem::replace(&mut self.needs_render, false)
    }

    fn apply_scroll_offset(&mut self, scroll_offset: u64) {
        self.scroll_direction = if scroll_offset > self.scroll_offset {
            Some(ScrollDirection::Forward)
        } else {
            Some(ScrollDirection::Backward)
        };
        self.scroll_offset = scroll_offset;
        self.needs_render = true;
    }
}
