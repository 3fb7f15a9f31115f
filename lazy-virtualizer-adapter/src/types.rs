/// Orientation of the list; decides which viewport dimension is the scroll axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Layout {
    #[default]
    Vertical,
    Horizontal,
}

impl Layout {
    /// Picks the scroll-axis extent out of a `width` x `height` viewport.
    pub fn main_axis(self, width: u32, height: u32) -> u32 {
        match self {
            Self::Vertical => height,
            Self::Horizontal => width,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// Indexes to realize for one frame. All bounds are inclusive.
///
/// `visible_*` is the exact viewport cover; `overscan_*` widens it so that items just outside the
/// viewport are already rendered when they scroll in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderRange {
    pub overscan_start: usize,
    pub overscan_stop: usize,
    pub visible_start: usize,
    pub visible_stop: usize,
}

impl RenderRange {
    /// Iterates the overscanned indexes in ascending order.
    pub fn indexes(&self) -> core::ops::RangeInclusive<usize> {
        self.overscan_start..=self.overscan_stop
    }
}

/// A lightweight snapshot of the controller's scroll state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub offset: u64,
    pub direction: Option<ScrollDirection>,
    pub is_scrolling: bool,
}
