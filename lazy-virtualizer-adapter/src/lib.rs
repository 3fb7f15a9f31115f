//! Adapter utilities for the `lazy-virtualizer` crate.
//!
//! `lazy-virtualizer` answers range and offset queries but owns no UI state. This crate provides
//! the framework-neutral pieces a windowed list component keeps around it:
//!
//! - A [`Controller`] owning scroll offset, scroll direction, `is_scrolling` debouncing and the
//!   viewport size
//! - Direction-aware overscan ([`render_range`])
//! - A per-item style cache that is dropped whenever measurements are invalidated
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod range;
mod style;
mod types;

#[cfg(test)]
mod tests;

pub use controller::{Controller, DEFAULT_IS_SCROLLING_RESET_DELAY_MS, DEFAULT_OVERSCAN_COUNT};
pub use range::render_range;
pub use style::{ItemStyle, ItemStyleCache};
pub use types::{Layout, RenderRange, ScrollDirection, ScrollState};
