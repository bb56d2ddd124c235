use crate::ScrollPhase;

/// Viewport part of a [`FrameState`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub height: u32,
}

/// Scroll part of a [`FrameState`]. `phase` is informational; restoring always starts idle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub scroll_top: u64,
    pub phase: ScrollPhase,
}

/// What a host persists to bring a list back to the same place, e.g. when a tab is
/// re-opened. Measured heights travel separately through `VirtualList::export_heights`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameState {
    pub viewport: ViewportState,
    pub scroll: ScrollState,
}
