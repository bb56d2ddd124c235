use alloc::vec::Vec;

use crate::controller::{PendingScroll, ScrollController};
use crate::height_cache::HeightCache;
use crate::key::ListKey;
use crate::options::ListOptions;
use crate::scrollbar::ScrollbarGeometry;
use crate::window::{WindowCalculator, WindowInputs, compute_window, place_item};
use crate::{
    Align, ContainerLayout, DeltaOutcome, FrameState, ItemPlacement, ScrollPhase, ScrollState,
    ScrollTarget, SizingMode, ViewportState, WindowRange,
};

/// One rendered row handed to the host.
#[derive(Debug)]
pub struct VisibleItem<'a, T, K> {
    pub index: usize,
    pub item: &'a T,
    pub key: K,
}

/// A windowed list.
///
/// The list owns the item sequence, the height cache and the scroll controller, and keeps
/// the current [`WindowRange`] up to date after every accepted change. It holds no UI
/// objects: the host renders `range()`, reports measured heights back, and forwards input.
///
/// For mount bookkeeping and frame-batched measurement, see the `virtual-list-adapter` crate.
#[derive(Clone, Debug)]
pub struct VirtualList<T, K> {
    options: ListOptions<T, K>,
    items: Vec<T>,
    data_revision: u64,
    heights: HeightCache<K>,
    calculator: WindowCalculator,
    controller: ScrollController<K>,
    range: WindowRange,
    natural_height: u64,
    notified: Option<(usize, usize, u64)>,
    batch_depth: usize,
    refresh_pending: bool,
    thumb_dragging: bool,
}

impl<T, K: ListKey> VirtualList<T, K> {
    pub fn new(options: ListOptions<T, K>, items: Vec<T>) -> Self {
        vdebug!(
            count = items.len(),
            viewport_height = options.viewport_height,
            item_height = options.item_height,
            virtual_enabled = options.virtual_enabled,
            "VirtualList::new"
        );
        let controller = ScrollController::new(options.scroll_to_attempts);
        let mut list = Self {
            options,
            items,
            data_revision: 0,
            heights: HeightCache::new(),
            calculator: WindowCalculator::new(),
            controller,
            range: WindowRange::default(),
            natural_height: 0,
            notified: None,
            batch_depth: 0,
            refresh_pending: false,
            thumb_dragging: false,
        };
        list.debug_check_unique_keys();
        list.refresh();
        list
    }

    pub fn options(&self) -> &ListOptions<T, K> {
        &self.options
    }

    pub fn set_options(&mut self, options: ListOptions<T, K>) {
        let layout_changed = options.item_height != self.options.item_height
            || options.trailing_buffer != self.options.trailing_buffer
            || !alloc::sync::Arc::ptr_eq(&options.get_key, &self.options.get_key);
        self.controller.set_scroll_to_attempts(options.scroll_to_attempts);
        self.options = options;
        vtrace!(
            viewport_height = self.options.viewport_height,
            item_height = self.options.item_height,
            virtual_enabled = self.options.virtual_enabled,
            "VirtualList::set_options"
        );
        if layout_changed {
            self.calculator.invalidate();
        }
        self.refresh();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut ListOptions<T, K>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_viewport_height(&mut self, height: u32) {
        if self.options.viewport_height == height {
            return;
        }
        self.options.viewport_height = height;
        self.refresh();
    }

    pub fn set_item_height(&mut self, height: u32) {
        self.update_options(|o| o.item_height = height);
    }

    pub fn set_virtual_enabled(&mut self, enabled: bool) {
        if self.options.virtual_enabled == enabled {
            return;
        }
        self.options.virtual_enabled = enabled;
        self.refresh();
    }

    pub fn set_sizing(&mut self, sizing: SizingMode) {
        self.options.sizing = sizing;
    }

    /// Groups several updates so the window is recomputed (and observers notified) once.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        self.batch_depth = self.batch_depth.saturating_add(1);
        f(self);
        debug_assert!(self.batch_depth > 0, "batch_depth underflow");
        self.batch_depth = self.batch_depth.saturating_sub(1);
        if self.batch_depth == 0 && core::mem::take(&mut self.refresh_pending) {
            self.refresh();
        }
    }

    // ----- data -----

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Bumped on every replacement or in-place edit of the item sequence.
    pub fn data_revision(&self) -> u64 {
        self.data_revision
    }

    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.data_changed();
    }

    /// Edits the items in place. Counts as a data change.
    pub fn update_items(&mut self, f: impl FnOnce(&mut Vec<T>)) {
        f(&mut self.items);
        self.data_changed();
    }

    fn data_changed(&mut self) {
        self.data_revision = self.data_revision.wrapping_add(1);
        vdebug!(
            count = self.items.len(),
            revision = self.data_revision,
            "VirtualList: data changed"
        );
        self.debug_check_unique_keys();
        self.refresh();
    }

    pub fn key_for(&self, index: usize) -> Option<K> {
        self.items.get(index).map(|item| (self.options.get_key)(item))
    }

    pub fn index_of_key(&self, key: &K) -> Option<usize> {
        self.items
            .iter()
            .position(|item| (self.options.get_key)(item) == *key)
    }

    fn resolve_index(&self, target: &ScrollTarget<K>) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }
        match target {
            ScrollTarget::Index(i) => Some((*i).min(self.items.len() - 1)),
            ScrollTarget::Key(key) => self.index_of_key(key),
        }
    }

    /// Top, height and measured flag of item `index`.
    pub fn item_placement(&self, index: usize) -> Option<ItemPlacement> {
        place_item(
            &self.items,
            self.options.get_key.as_ref(),
            index,
            self.options.item_height,
            &self.heights,
        )
    }

    // ----- heights -----

    pub fn heights(&self) -> &HeightCache<K> {
        &self.heights
    }

    /// Records a measurement. Takes effect on [`Self::commit_heights`].
    pub fn record_height(&mut self, key: K, height: u32) -> bool {
        self.heights.set(key, height)
    }

    /// Drops a measurement. Takes effect on [`Self::commit_heights`].
    pub fn forget_height(&mut self, key: &K) -> bool {
        self.heights.remove(key)
    }

    /// Publishes recorded measurements.
    ///
    /// If anything changed, the window is recomputed and a pending `scroll_to` gets its
    /// correction pass. Returns `true` if the cache version advanced.
    pub fn commit_heights(&mut self) -> bool {
        if !self.heights.commit() {
            return false;
        }
        self.refresh();
        self.settle_scroll();
        true
    }

    /// Replaces the measurement cache, e.g. when restoring a session.
    pub fn import_heights(&mut self, entries: impl IntoIterator<Item = (K, u32)>) {
        self.heights.import(entries);
        self.commit_heights();
    }

    pub fn export_heights(&self) -> Vec<(K, u32)> {
        self.heights.export()
    }

    pub fn reset_heights(&mut self) {
        self.heights.clear();
        self.commit_heights();
    }

    /// Reports the rendered content height; only used while windowing is off.
    pub fn set_natural_height(&mut self, height: u64) {
        if self.natural_height == height {
            return;
        }
        self.natural_height = height;
        self.refresh();
    }

    pub fn natural_height(&self) -> u64 {
        self.natural_height
    }

    // ----- window -----

    pub fn range(&self) -> WindowRange {
        self.range
    }

    pub fn is_virtual(&self) -> bool {
        self.options.window_config().is_virtual(self.items.len())
    }

    pub fn calculator(&self) -> &WindowCalculator {
        &self.calculator
    }

    /// Items inside [`Self::range`].
    ///
    /// Inside [`Self::batch_update`] the range is the one from before the batch, so its bounds
    /// are clipped to the current data.
    pub fn visible_items(&self) -> &[T] {
        let len = self.items.len();
        let end = self.range.end_index.min(len);
        let start = self.range.start_index.min(end);
        &self.items[start..end]
    }

    pub fn for_each_visible(&self, mut f: impl FnMut(VisibleItem<'_, T, K>)) {
        let start = self.range.start_index;
        for (offset, item) in self.visible_items().iter().enumerate() {
            f(VisibleItem {
                index: start + offset,
                item,
                key: (self.options.get_key)(item),
            });
        }
    }

    fn compute_range(&mut self) -> WindowRange {
        let config = self.options.window_config();
        let count = self.items.len();
        let virtualized = config.is_virtual(count);
        let scroll_top = self.controller.scroll_top();
        let inputs = WindowInputs {
            scroll_top,
            data_revision: self.data_revision,
            count,
            heights_version: self.heights.version(),
            viewport_height: config.viewport_height,
            virtualized,
            natural_height: (!virtualized).then_some(self.natural_height),
        };

        let items = &self.items;
        let get_key = self.options.get_key.as_ref();
        let heights = &self.heights;
        let natural_height = self.natural_height;
        self.calculator.window(inputs, || {
            compute_window(items, get_key, scroll_top, &config, heights, natural_height)
        })
    }

    fn refresh(&mut self) {
        if self.batch_depth > 0 {
            self.refresh_pending = true;
            return;
        }
        let range = self.compute_range();
        // Total height does not depend on the position, so one re-clamp is enough.
        self.range = if self
            .controller
            .set_bounds(range.total_height, self.options.viewport_height)
        {
            self.compute_range()
        } else {
            range
        };
        self.notify_visible_change();
    }

    fn notify_visible_change(&mut self) {
        let marker = (
            self.range.start_index,
            self.range.end_index,
            self.data_revision,
        );
        if self.notified == Some(marker) {
            return;
        }
        self.notified = Some(marker);
        if let Some(cb) = &self.options.on_visible_change {
            cb(&self.items[self.range.indexes()], &self.items);
        }
    }

    // ----- scrolling -----

    pub fn scroll_top(&self) -> u64 {
        self.controller.scroll_top()
    }

    pub fn max_scroll(&self) -> u64 {
        self.controller.max_scroll()
    }

    pub fn phase(&self) -> ScrollPhase {
        self.controller.phase()
    }

    pub fn controller(&self) -> &ScrollController<K> {
        &self.controller
    }

    pub fn pending_scroll(&self) -> Option<&PendingScroll<K>> {
        self.controller.pending_scroll()
    }

    /// Applies a wheel/touch delta immediately.
    pub fn apply_delta(&mut self, delta: i64) -> DeltaOutcome {
        let outcome = self.controller.apply_delta(delta);
        vtrace!(delta, scroll_top = self.scroll_top(), "VirtualList::apply_delta");
        self.refresh();
        outcome
    }

    /// Queues a wheel/touch delta for the next [`Self::flush_queued_delta`].
    pub fn queue_delta(&mut self, delta: i64) -> DeltaOutcome {
        self.controller.queue_delta(delta)
    }

    pub fn has_queued_delta(&self) -> bool {
        self.controller.has_queued_delta()
    }

    pub fn flush_queued_delta(&mut self) -> bool {
        if !self.controller.flush_queued_delta() {
            return false;
        }
        self.refresh();
        true
    }

    /// Starts a touch drag.
    pub fn begin_drag(&mut self) {
        self.thumb_dragging = false;
        self.controller.begin_drag();
    }

    /// Starts dragging the scrollbar thumb. Item pointer events are disabled until
    /// [`Self::end_drag`].
    pub fn begin_thumb_drag(&mut self) {
        self.controller.begin_drag();
        self.thumb_dragging = true;
    }

    pub fn is_thumb_dragging(&self) -> bool {
        self.thumb_dragging
    }

    pub fn end_drag(&mut self) {
        self.thumb_dragging = false;
        self.controller.end_drag();
    }

    /// Scrolls to where a scrollbar thumb placed at `thumb_top` points.
    pub fn drag_thumb_to(&mut self, thumb_top: f64) -> bool {
        let geometry = self.scrollbar_geometry();
        if !self.controller.apply_thumb_offset(thumb_top, &geometry) {
            return false;
        }
        self.refresh();
        true
    }

    /// Sets the position directly (clamped), e.g. from a restored session.
    pub fn set_scroll_top(&mut self, scroll_top: u64) -> bool {
        if !self.controller.set_scroll_top(scroll_top) {
            return false;
        }
        self.refresh();
        true
    }

    /// Accepts a position reported by the host's native scroll container.
    pub fn on_external_scroll(&mut self, position: u64) -> bool {
        if !self.controller.on_external_scroll(position) {
            return false;
        }
        vtrace!(position, "VirtualList::on_external_scroll");
        self.refresh();
        true
    }

    /// Scrolls `target` into view. Returns the applied position, or `None` when the list is
    /// empty or the key is unknown.
    ///
    /// Index targets past the end are clamped to the last item. If the target's height is
    /// still an estimate the list stays in [`ScrollPhase::Animating`] until a measurement
    /// pass (see [`Self::settle_scroll`]) corrects the position.
    pub fn scroll_to(&mut self, target: ScrollTarget<K>, align: Align, offset: i64) -> Option<u64> {
        let Some(index) = self.resolve_index(&target) else {
            vwarn!("VirtualList::scroll_to: target not found");
            return None;
        };
        let item = self.item_placement(index)?;
        self.controller.scroll_to(target, item, align, offset);
        self.refresh();
        Some(self.controller.scroll_top())
    }

    pub fn scroll_to_index(&mut self, index: usize, align: Align, offset: i64) -> Option<u64> {
        self.scroll_to(ScrollTarget::Index(index), align, offset)
    }

    pub fn scroll_to_key(&mut self, key: K, align: Align, offset: i64) -> Option<u64> {
        self.scroll_to(ScrollTarget::Key(key), align, offset)
    }

    pub fn cancel_scroll_to(&mut self) -> bool {
        self.controller.cancel_scroll_to()
    }

    /// Runs the correction pass of a pending `scroll_to`. Returns `true` if the position
    /// moved.
    pub fn settle_scroll(&mut self) -> bool {
        let Some(target) = self.controller.pending_scroll().map(|p| p.target.clone()) else {
            return false;
        };
        let Some(item) = self
            .resolve_index(&target)
            .and_then(|index| self.item_placement(index))
        else {
            vwarn!("VirtualList::settle_scroll: target disappeared");
            self.controller.cancel_scroll_to();
            return false;
        };
        if !self.controller.settle(item) {
            return false;
        }
        self.refresh();
        true
    }

    // ----- host-facing snapshots -----

    pub fn scrollbar_geometry(&self) -> ScrollbarGeometry {
        ScrollbarGeometry::new(
            self.options.viewport_height,
            self.range.total_height,
            self.controller.scroll_top(),
            self.items.len(),
        )
    }

    /// Whether the synthetic scrollbar is in use at all (windowing configured).
    pub fn uses_scrollbar(&self) -> bool {
        self.options.virtual_enabled
            && self.options.viewport_height > 0
            && self.options.item_height > 0
    }

    pub fn container_layout(&self) -> ContainerLayout {
        let viewport = self.options.viewport_height;
        let (height, max_height) = match (viewport, self.options.sizing) {
            (0, _) => (None, None),
            (h, SizingMode::FullHeight) => (Some(h), None),
            (h, SizingMode::MaxHeight) => (None, Some(h)),
        };
        let virtual_scroll = self.uses_scrollbar();
        ContainerLayout {
            height,
            max_height,
            overflow_hidden: virtual_scroll,
            pointer_events_disabled: virtual_scroll && self.thumb_dragging,
            filler_height: self.range.total_height,
            content_offset: self.range.offset,
        }
    }

    pub fn viewport_state(&self) -> ViewportState {
        ViewportState {
            height: self.options.viewport_height,
        }
    }

    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            scroll_top: self.controller.scroll_top(),
            phase: self.controller.phase(),
        }
    }

    pub fn frame_state(&self) -> FrameState {
        FrameState {
            viewport: self.viewport_state(),
            scroll: self.scroll_state(),
        }
    }

    /// Restores viewport height and scroll position. The phase is not restored; a restored
    /// list always starts idle.
    pub fn restore_frame_state(&mut self, frame: FrameState) {
        // The viewport goes first so the position is clamped against the restored bounds.
        self.set_viewport_height(frame.viewport.height);
        self.set_scroll_top(frame.scroll.scroll_top);
    }

    #[cfg(debug_assertions)]
    fn debug_check_unique_keys(&self) {
        let mut seen = crate::key::KeyMap::<K, ()>::new();
        for item in &self.items {
            let fresh = seen.insert((self.options.get_key)(item), ()).is_none();
            debug_assert!(fresh, "VirtualList: duplicate item key");
        }
    }

    #[cfg(not(debug_assertions))]
    fn debug_check_unique_keys(&self) {}
}
