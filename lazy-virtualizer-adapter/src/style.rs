#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use lazy_virtualizer::ItemMetadata;

use crate::Layout;

#[cfg(feature = "std")]
type StyleMap = HashMap<usize, ItemStyle>;
#[cfg(not(feature = "std"))]
type StyleMap = BTreeMap<usize, ItemStyle>;

/// Absolute placement of one rendered item inside the scroll container.
///
/// The cross axis has no explicit extent: the item fills the container (`None`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStyle {
    pub offset: u64,
    pub size: u32,
    pub layout: Layout,
}

impl ItemStyle {
    pub fn new(meta: ItemMetadata, layout: Layout) -> Self {
        Self {
            offset: meta.offset,
            size: meta.size,
            layout,
        }
    }

    pub fn top(&self) -> u64 {
        match self.layout {
            Layout::Vertical => self.offset,
            Layout::Horizontal => 0,
        }
    }

    pub fn left(&self) -> u64 {
        match self.layout {
            Layout::Vertical => 0,
            Layout::Horizontal => self.offset,
        }
    }

    pub fn height(&self) -> Option<u32> {
        match self.layout {
            Layout::Vertical => Some(self.size),
            Layout::Horizontal => None,
        }
    }

    pub fn width(&self) -> Option<u32> {
        match self.layout {
            Layout::Vertical => None,
            Layout::Horizontal => Some(self.size),
        }
    }
}

/// Memoized [`ItemStyle`]s keyed by item index.
///
/// Styles are only valid as long as the measurements they were built from; the cache is wiped
/// wholesale whenever the list invalidates.
#[derive(Clone, Debug, Default)]
pub struct ItemStyleCache {
    styles: StyleMap,
}

impl ItemStyleCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Option<ItemStyle> {
        self.styles.get(&index).copied()
    }

    pub fn insert(&mut self, index: usize, style: ItemStyle) {
        self.styles.insert(index, style);
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn clear(&mut self) {
        self.styles.clear();
    }
}
