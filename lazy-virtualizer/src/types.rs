/// Position and extent of one item along the scroll axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemMetadata {
    /// Cumulative extent of every item before this one.
    pub offset: u64,
    pub size: u32,
}

impl ItemMetadata {
    /// Offset just past this item (where the next item starts).
    pub fn end(&self) -> u64 {
        self.offset.saturating_add(self.size as u64)
    }
}

/// Items intersecting a viewport. Both bounds are inclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start_index: usize,
    pub stop_index: usize,
}

impl VisibleRange {
    pub fn contains(&self, index: usize) -> bool {
        (self.start_index..=self.stop_index).contains(&index)
    }
}

/// Where a scrolled-to item should land inside the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Align {
    /// Scroll as little as possible; keep the current offset if the item is already visible.
    #[default]
    Auto,
    /// Item flush with the start of the viewport.
    Start,
    /// Item flush with the end of the viewport.
    End,
    Center,
    /// `Auto` when the target is within one viewport of the current offset, `Center` otherwise.
    Smart,
}

impl Align {
    /// Parses an alignment name. Unknown names map to [`Align::Auto`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "start" => Self::Start,
            "end" => Self::End,
            "center" => Self::Center,
            "smart" => Self::Smart,
            _ => Self::Auto,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Start => "start",
            Self::End => "end",
            Self::Center => "center",
            Self::Smart => "smart",
        }
    }
}

impl From<&str> for Align {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

/// Signal emitted when cached measurements from `index` onward are dropped.
///
/// Anything a renderer memoized per item index (inline styles, layout boxes) is stale once this
/// fires and should be evicted. `force_rerender` tells the renderer whether to schedule a new
/// frame right away.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Invalidation {
    pub index: usize,
    pub force_rerender: bool,
}
