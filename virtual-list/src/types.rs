/// Where a `scroll_to` target should land inside the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    /// Item top at the viewport top.
    Top,
    /// Item bottom at the viewport bottom.
    Bottom,
    /// Smallest move that brings the item fully into view (none if it already is).
    #[default]
    Auto,
}

/// The item a programmatic scroll is aimed at.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollTarget<K> {
    Index(usize),
    Key(K),
}

impl<K> From<usize> for ScrollTarget<K> {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// Phase of the scroll controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollPhase {
    #[default]
    Idle,
    /// A scrollbar thumb or touch drag is in progress.
    Dragging,
    /// A `scroll_to` landed on an estimated height and waits for a measurement pass.
    Animating,
}

/// Result of feeding a wheel/touch delta to the controller.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeltaOutcome {
    /// The list took the delta; the host should stop the event from propagating.
    Consumed,
    /// The list is already at the edge in the delta's direction; let an ancestor scroll.
    PassThrough,
}

impl DeltaOutcome {
    pub fn is_pass_through(self) -> bool {
        matches!(self, Self::PassThrough)
    }
}

/// How the list container is sized against the configured viewport height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SizingMode {
    /// The container is always exactly `viewport_height` tall.
    #[default]
    FullHeight,
    /// The container shrinks to its content, up to `viewport_height`.
    MaxHeight,
}

/// A snapshot of the window to render.
///
/// `end_index` is exclusive, so an empty list yields `0..0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowRange {
    pub start_index: usize,
    pub end_index: usize,
    /// Summed height of the items before `start_index`.
    pub offset: u64,
    /// Summed height of all items (or the reported natural height when not virtualized).
    pub total_height: u64,
    /// Whether windowing was applied; `false` means the full list is rendered.
    pub virtualized: bool,
}

impl WindowRange {
    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }

    /// Inclusive index of the last rendered item.
    pub fn last_index(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.end_index - 1)
    }

    pub fn indexes(&self) -> core::ops::Range<usize> {
        self.start_index..self.end_index
    }
}

/// Placement of one item in list space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemPlacement {
    pub index: usize,
    pub top: u64,
    pub height: u32,
    /// `false` when `height` is the estimate.
    pub measured: bool,
}

impl ItemPlacement {
    pub fn bottom(&self) -> u64 {
        self.top.saturating_add(self.height as u64)
    }
}

/// Container layout hints for the host renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerLayout {
    /// Fixed container height (`SizingMode::FullHeight`).
    pub height: Option<u32>,
    /// Upper bound on the container height (`SizingMode::MaxHeight`).
    pub max_height: Option<u32>,
    /// Native overflow should be hidden; scrolling goes through the list.
    pub overflow_hidden: bool,
    /// Pointer events on items should be disabled (thumb drag in progress).
    pub pointer_events_disabled: bool,
    /// Height of the inner filler that fakes the full scrollable region.
    pub filler_height: u64,
    /// Translation applied to the rendered slice inside the filler.
    pub content_offset: u64,
}
