use crate::height_cache::HeightCache;
use crate::key::ListKey;
use crate::{ItemPlacement, WindowRange};

/// Inputs of the window computation that come from configuration rather than scrolling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowConfig {
    pub viewport_height: u32,
    /// Height assumed for items that were never measured.
    pub item_height: u32,
    pub virtual_enabled: bool,
    /// Extra items rendered after the last intersecting one.
    pub trailing_buffer: usize,
}

impl WindowConfig {
    /// Whether windowing applies to a list of `count` items.
    ///
    /// Requires virtualization to be enabled, a non-zero viewport and estimate, and the
    /// estimated content to overflow the viewport.
    pub fn is_virtual(&self, count: usize) -> bool {
        if !self.virtual_enabled || self.viewport_height == 0 || self.item_height == 0 {
            return false;
        }
        (self.item_height as u64).saturating_mul(count as u64) > self.viewport_height as u64
    }
}

/// Computes the window for `scroll_top`.
///
/// Scans every item once: the first item whose bottom reaches `scroll_top` starts the window,
/// the first item whose bottom passes `scroll_top + viewport_height` ends it, then
/// `trailing_buffer` more items are added. When windowing does not apply the whole list is
/// returned and `natural_height` (as reported by the renderer) becomes the total height.
pub fn compute_window<T, K: ListKey>(
    items: &[T],
    get_key: impl Fn(&T) -> K,
    scroll_top: u64,
    config: &WindowConfig,
    heights: &HeightCache<K>,
    natural_height: u64,
) -> WindowRange {
    let count = items.len();
    if !config.is_virtual(count) {
        return WindowRange {
            start_index: 0,
            end_index: count,
            offset: 0,
            total_height: natural_height,
            virtualized: false,
        };
    }

    let view_end = scroll_top.saturating_add(config.viewport_height as u64);
    let mut item_top = 0u64;
    let mut start: Option<(usize, u64)> = None;
    let mut end: Option<usize> = None;

    for (i, item) in items.iter().enumerate() {
        let height = heights.height_or(&get_key(item), config.item_height);
        let bottom = item_top.saturating_add(height as u64);

        if start.is_none() && bottom >= scroll_top {
            start = Some((i, item_top));
        }
        if end.is_none() && bottom > view_end {
            end = Some(i);
        }
        item_top = bottom;
    }

    let (start_index, offset) = start.unwrap_or((0, 0));
    let last = count - 1;
    let end = end
        .unwrap_or(last)
        .saturating_add(config.trailing_buffer)
        .min(last);

    WindowRange {
        start_index,
        end_index: end + 1,
        offset,
        total_height: item_top,
        virtualized: true,
    }
}

/// Places item `index` using measured heights where known and `estimate` elsewhere.
///
/// Returns `None` when `index` is out of bounds.
pub fn place_item<T, K: ListKey>(
    items: &[T],
    get_key: impl Fn(&T) -> K,
    index: usize,
    estimate: u32,
    heights: &HeightCache<K>,
) -> Option<ItemPlacement> {
    let target = items.get(index)?;
    let top = items[..index].iter().fold(0u64, |acc, item| {
        acc.saturating_add(heights.height_or(&get_key(item), estimate) as u64)
    });
    let measured = heights.get(&get_key(target));
    Some(ItemPlacement {
        index,
        top,
        height: measured.unwrap_or(estimate),
        measured: measured.is_some(),
    })
}

/// Everything a window depends on. Two equal inputs always produce the same window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowInputs {
    pub scroll_top: u64,
    pub data_revision: u64,
    pub count: usize,
    pub heights_version: u64,
    pub viewport_height: u32,
    pub virtualized: bool,
    /// Only tracked while not virtualized; the natural height is ignored otherwise.
    pub natural_height: Option<u64>,
}

/// Memoizes [`compute_window`] on its trigger set.
///
/// Changes to anything outside [`WindowInputs`] do not cause a recompute, which keeps the
/// render → measure → recompute loop from feeding on unrelated state.
#[derive(Clone, Debug, Default)]
pub struct WindowCalculator {
    last: Option<(WindowInputs, WindowRange)>,
    recomputes: u64,
}

impl WindowCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached window for `inputs`, or runs `compute` and caches the result.
    pub fn window(
        &mut self,
        inputs: WindowInputs,
        compute: impl FnOnce() -> WindowRange,
    ) -> WindowRange {
        if let Some((prev, range)) = &self.last {
            if *prev == inputs {
                return *range;
            }
        }
        let range = compute();
        self.recomputes = self.recomputes.wrapping_add(1);
        vtrace!(
            scroll_top = inputs.scroll_top,
            start = range.start_index,
            end = range.end_index,
            offset = range.offset,
            total = range.total_height,
            "WindowCalculator::recompute"
        );
        self.last = Some((inputs, range));
        range
    }

    /// Last computed window, if any.
    pub fn last(&self) -> Option<WindowRange> {
        self.last.map(|(_, range)| range)
    }

    /// Number of actual recomputations so far.
    pub fn recomputes(&self) -> u64 {
        self.recomputes
    }

    /// Drops the cached window so the next call recomputes.
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}
