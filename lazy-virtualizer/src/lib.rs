//! A lazily measured index for virtualizing lists with variable item sizes.
//!
//! Given an ordered collection whose item sizes are only known by asking a callback, this crate
//! answers the two questions a windowed list needs on every scroll or resize event:
//!
//! - which items intersect the viewport, and
//! - at which offset does item `i` sit,
//!
//! while measuring as few items as possible. Measurements are cached in a dense table that
//! grows forward from index 0; lookups past the measured region gallop (exponential search)
//! instead of measuring the whole list, and the total scrollable extent is extrapolated from an
//! estimated item size.
//!
//! It is UI-agnostic. A renderer is expected to provide:
//! - the item count and a pure `item_size(index)` callback
//! - the scroll offset and viewport size along the scroll axis
//! - a place to drop per-item caches when [`Invalidation`] fires
//!
//! For a controller that owns scroll state, overscan and per-item styles, see the
//! `lazy-virtualizer-adapter` crate.
//!
//! ```
//! use lazy_virtualizer::{Align, ListOptions, VariableSizeList};
//!
//! let mut list = VariableSizeList::new(ListOptions::new(10_000, |i| 20 + (i % 5) as u32 * 10));
//!
//! let range = list.range_to_render(0, 300);
//! assert_eq!(range.start_index, 0);
//! assert!(list.last_measured_index().unwrap() < 100);
//!
//! let offset = list.offset_for_index_and_alignment(5_000, Align::Start, 0, 300);
//! assert_eq!(offset, list.item_offset(5_000));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod align;
mod list;
mod options;
mod search;
mod store;
mod types;


pub use list::VariableSizeList;
pub use options::{ItemSizeCallback, ListOptions, OnInvalidateCallback};
pub use store::{DEFAULT_ESTIMATED_ITEM_SIZE, MetadataStore};
pub use types::{Align, Invalidation, ItemMetadata, VisibleRange};
