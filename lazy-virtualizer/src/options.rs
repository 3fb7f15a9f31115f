use alloc::sync::Arc;

use crate::Invalidation;
use crate::store::DEFAULT_ESTIMATED_ITEM_SIZE;

/// Returns the size of item `i` along the scroll axis.
///
/// Must be a pure function of the index: the list measures each item once and trusts the
/// result until it is invalidated.
pub type ItemSizeCallback = Arc<dyn Fn(usize) -> u32 + Send + Sync>;

/// Receives the eviction signal whenever measurements are invalidated.
pub type OnInvalidateCallback = Arc<dyn Fn(Invalidation) + Send + Sync>;

/// Configuration for [`crate::VariableSizeList`].
///
/// Cheap to clone: the callbacks live in `Arc`s.
#[derive(Clone)]
pub struct ListOptions {
    pub item_count: usize,
    pub item_size: ItemSizeCallback,
    /// Size assumed for items that have not been measured yet. `0` means "use the default"
    /// ([`DEFAULT_ESTIMATED_ITEM_SIZE`]).
    pub estimated_item_size: u32,
    pub on_invalidate: Option<OnInvalidateCallback>,
}

impl ListOptions {
    pub fn new(item_count: usize, item_size: impl Fn(usize) -> u32 + Send + Sync + 'static) -> Self {
        Self {
            item_count,
            item_size: Arc::new(item_size),
            estimated_item_size: DEFAULT_ESTIMATED_ITEM_SIZE,
            on_invalidate: None,
        }
    }

    pub fn with_estimated_item_size(mut self, estimated_item_size: u32) -> Self {
        self.estimated_item_size = estimated_item_size;
        self
    }

    pub fn with_item_size(mut self, item_size: impl Fn(usize) -> u32 + Send + Sync + 'static) -> Self {
        self.item_size = Arc::new(item_size);
        self
    }

    pub fn with_on_invalidate(
        mut self,
        on_invalidate: Option<impl Fn(Invalidation) + Send + Sync + 'static>,
    ) -> Self {
        self.on_invalidate = on_invalidate.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for ListOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListOptions")
            .field("item_count", &self.item_count)
            .field("estimated_item_size", &self.estimated_item_size)
            .field("on_invalidate", &self.on_invalidate.is_some())
            .finish_non_exhaustive()
    }
}
