use alloc::vec::Vec;

use crate::ItemMetadata;

/// Size assumed for items that have not been measured yet when no estimate is configured.
pub const DEFAULT_ESTIMATED_ITEM_SIZE: u32 = 50;

/// Incrementally filled offset/size table for one list.
///
/// Entries are dense from index 0 and are only ever filled forward. The high-water mark
/// (`last_measured_index`) separates trusted entries from stale ones: after an invalidation,
/// entries past the mark stay in memory but are never returned until they are measured again.
#[derive(Clone, Debug)]
pub struct MetadataStore {
    entries: Vec<ItemMetadata>,
    last_measured: Option<usize>,
    estimated_item_size: u32,
}

impl MetadataStore {
    /// Creates an empty store. An estimate of `0` falls back to [`DEFAULT_ESTIMATED_ITEM_SIZE`].
    pub fn new(estimated_item_size: u32) -> Self {
        Self {
            entries: Vec::new(),
            last_measured: None,
            estimated_item_size: normalize_estimate(estimated_item_size),
        }
    }

    pub fn estimated_item_size(&self) -> u32 {
        self.estimated_item_size
    }

    pub(crate) fn set_estimated_item_size(&mut self, estimated_item_size: u32) {
        self.estimated_item_size = normalize_estimate(estimated_item_size);
    }

    /// Largest index whose metadata is known, or `None` when nothing has been measured.
    pub fn last_measured_index(&self) -> Option<usize> {
        self.last_measured
    }

    /// Number of trusted entries (`last_measured_index + 1`).
    pub fn measured_len(&self) -> usize {
        self.last_measured.map_or(0, |last| last + 1)
    }

    /// Returns the metadata for `index` without measuring anything.
    pub fn get(&self, index: usize) -> Option<ItemMetadata> {
        if index >= self.measured_len() {
            return None;
        }
        self.entries.get(index).copied()
    }

    /// Returns the metadata for `index`, measuring every item between the high-water mark and
    /// `index` (inclusive, ascending) with `size_of`.
    ///
    /// Already measured indexes are answered from the table; `size_of` is not called for them.
    /// The table is dense, so an index no list could hold panics with a capacity overflow
    /// instead of measuring forever.
    pub fn resolve(&mut self, index: usize, mut size_of: impl FnMut(usize) -> u32) -> ItemMetadata {
        let first = self.measured_len();
        if index < first {
            return self.entries[index];
        }

        let mut offset = match self.last_measured {
            Some(last) => self.entries[last].end(),
            None => 0,
        };
        vtrace!(first, last = index, "measuring items");

        if self.entries.len() <= index {
            self.entries.reserve((index - self.entries.len()).saturating_add(1));
        }
        for i in first..=index {
            let size = size_of(i);
            let meta = ItemMetadata { offset, size };
            match self.entries.get_mut(i) {
                Some(slot) => *slot = meta,
                None => self.entries.push(meta),
            }
            offset = offset.saturating_add(size as u64);
        }

        self.last_measured = Some(index);
        self.entries[index]
    }

    /// Lowers the high-water mark so that `index` and everything after it is measured again on
    /// the next resolve. Returns the new mark.
    ///
    /// Marks already below `index` are left alone.
    pub fn invalidate_from(&mut self, index: usize) -> Option<usize> {
        let previous = self.last_measured;
        self.last_measured = match (previous, index.checked_sub(1)) {
            (Some(last), Some(bound)) => Some(last.min(bound)),
            _ => None,
        };
        vdebug!(
            index,
            previous = ?previous,
            current = ?self.last_measured,
            "invalidate_from"
        );
        self.last_measured
    }

    /// Measured extent plus the estimate for every item past the high-water mark.
    ///
    /// A mark beyond `item_count` (the list shrank) is clamped for this computation only; the
    /// store itself is left untouched.
    pub fn estimated_total_size(&self, item_count: usize) -> u64 {
        let last = match self.last_measured {
            Some(last) if item_count > 0 => Some(last.min(item_count - 1)),
            _ => None,
        };

        let measured = last.map_or(0, |i| self.entries[i].end());
        let unmeasured = item_count - last.map_or(0, |i| i + 1);
        measured.saturating_add((unmeasured as u64).saturating_mul(self.estimated_item_size as u64))
    }
}

impl Default for MetadataStore {
    fn default() -> Self {
        Self::new(DEFAULT_ESTIMATED_ITEM_SIZE)
    }
}

fn normalize_estimate(estimated_item_size: u32) -> u32 {
    if estimated_item_size == 0 {
        DEFAULT_ESTIMATED_ITEM_SIZE
    } else {
        estimated_item_size
    }
}
