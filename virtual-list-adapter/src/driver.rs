use virtual_list::{
    Align, DeltaOutcome, ListKey, ListOptions, ScrollPhase, ScrollTarget, VirtualList,
};

use crate::{FrameScheduler, Measure, MountRegistry, ScrollbarState, ScrollbarVisibility};

/// What a frame callback did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Mounted views that returned a height.
    pub measured: usize,
    /// The measurements changed the height cache.
    pub heights_committed: bool,
    /// The scroll position moved during the frame.
    pub scrolled: bool,
}

/// A framework-neutral driver around a [`VirtualList`].
///
/// It holds no UI objects. A host drives it by calling:
/// - `mount` / `unmount` when item views appear or disappear
/// - `on_wheel`, `on_touch_*`, `on_thumb_pointer_*`, `on_native_scroll` for input
/// - `on_frame(now_ms, measurer)` when the scheduler fires
/// - `tick(now_ms)` from a timer to let the scrollbar auto-hide
///
/// Hosts with a real scroll container apply `take_scroll_instruction()` after each call.
#[derive(Debug)]
pub struct ListDriver<T, K, H, S> {
    list: VirtualList<T, K>,
    mounted: MountRegistry<K, H>,
    scheduler: S,
    frame_pending: bool,
    scrollbar: ScrollbarVisibility,
    touch_y: Option<i64>,
    native_top: u64,
    instruction: Option<u64>,
}

impl<T, K: ListKey, H, S: FrameScheduler> ListDriver<T, K, H, S> {
    pub fn new(options: ListOptions<T, K>, items: alloc::vec::Vec<T>, scheduler: S) -> Self {
        Self::from_list(VirtualList::new(options, items), scheduler)
    }

    pub fn from_list(list: VirtualList<T, K>, scheduler: S) -> Self {
        let native_top = list.scroll_top();
        vdebug!(count = list.len(), scroll_top = native_top, "ListDriver::new");
        Self {
            list,
            mounted: MountRegistry::new(),
            scheduler,
            frame_pending: false,
            scrollbar: ScrollbarVisibility::new(),
            touch_y: None,
            native_top,
            instruction: None,
        }
    }

    pub fn with_scrollbar(mut self, scrollbar: ScrollbarVisibility) -> Self {
        self.scrollbar = scrollbar;
        self
    }

    pub fn list(&self) -> &VirtualList<T, K> {
        &self.list
    }

    /// Direct access for data and option updates.
    ///
    /// Position changes made through here are picked up by the next driver call that syncs
    /// the native-scroll instruction (any input, frame or `scroll_to`).
    pub fn list_mut(&mut self) -> &mut VirtualList<T, K> {
        &mut self.list
    }

    pub fn into_list(self) -> VirtualList<T, K> {
        self.list
    }

    pub fn mounted(&self) -> &MountRegistry<K, H> {
        &self.mounted
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn scrollbar(&self) -> &ScrollbarVisibility {
        &self.scrollbar
    }

    /// A frame was requested and `on_frame` has not run since.
    pub fn is_frame_pending(&self) -> bool {
        self.frame_pending
    }

    fn request_frame(&mut self) {
        if self.frame_pending {
            return;
        }
        self.frame_pending = true;
        self.scheduler.request_frame();
    }

    /// Records the position a host scroll container should be moved to, unless it is
    /// already there.
    fn sync_instruction(&mut self) {
        let top = self.list.scroll_top();
        self.instruction = (top != self.native_top).then_some(top);
    }

    fn after_move(&mut self, before: u64, now_ms: u64) -> bool {
        let moved = self.list.scroll_top() != before;
        if moved {
            self.scrollbar.show(now_ms);
        }
        self.sync_instruction();
        moved
    }

    // ----- mount bookkeeping -----

    /// The renderer mounted the view for `key`. Its height is measured on the next frame.
    pub fn mount(&mut self, key: K, handle: H) {
        self.mounted.register(key, handle);
        self.request_frame();
    }

    /// The renderer unmounted the view for `key`. Returns `false` if `key` was not mounted.
    pub fn unmount(&mut self, key: &K) -> bool {
        if self.mounted.unregister(key).is_none() {
            vwarn!("ListDriver::unmount: key was not mounted");
            return false;
        }
        if self.list.options().evict_unmounted_heights && self.list.forget_height(key) {
            self.request_frame();
        }
        true
    }

    // ----- frame -----

    /// Runs one scheduled frame: applies queued scroll deltas, measures every mounted view
    /// once, publishes the measurements and runs the `scroll_to` correction pass.
    pub fn on_frame(&mut self, now_ms: u64, mut measurer: impl Measure<H>) -> FrameReport {
        self.frame_pending = false;
        let before = self.list.scroll_top();
        self.list.flush_queued_delta();

        let mut measured = 0usize;
        for (key, handle) in self.mounted.iter() {
            if let Some(height) = measurer.measure(handle) {
                measured += 1;
                self.list.record_height(key.clone(), height);
            }
        }

        let heights_committed = self.list.commit_heights();
        if !heights_committed && self.list.pending_scroll().is_some() {
            self.list.settle_scroll();
        }
        // An unsettled scroll_to keeps asking for frames until its attempts run out.
        if self.list.phase() == ScrollPhase::Animating {
            self.request_frame();
        }

        let scrolled = self.after_move(before, now_ms);
        vtrace!(
            measured,
            heights_committed,
            scrolled,
            scroll_top = self.list.scroll_top(),
            "ListDriver::on_frame"
        );
        FrameReport {
            measured,
            heights_committed,
            scrolled,
        }
    }

    // ----- input -----

    /// A wheel event. The delta is applied on the next frame, combined with any other
    /// deltas that arrive first.
    ///
    /// On [`DeltaOutcome::PassThrough`] the host should let the event reach an outer
    /// scrollable region.
    pub fn on_wheel(&mut self, delta_y: i64) -> DeltaOutcome {
        let outcome = self.list.queue_delta(delta_y);
        if outcome == DeltaOutcome::Consumed {
            self.request_frame();
        }
        outcome
    }

    pub fn on_touch_start(&mut self, y: i64) {
        self.touch_y = Some(y);
        self.list.begin_drag();
    }

    /// Moving the finger up scrolls down, like a wheel delta of `previous_y - y`.
    pub fn on_touch_move(&mut self, y: i64) -> DeltaOutcome {
        let Some(prev) = self.touch_y else {
            return DeltaOutcome::PassThrough;
        };
        self.touch_y = Some(y);
        let delta = prev.saturating_sub(y);
        if delta == 0 {
            return DeltaOutcome::Consumed;
        }
        let outcome = self.list.queue_delta(delta);
        if outcome == DeltaOutcome::Consumed {
            self.request_frame();
        }
        outcome
    }

    pub fn on_touch_end(&mut self) {
        self.touch_y = None;
        self.list.end_drag();
    }

    /// The pointer grabbed the scrollbar thumb at `pointer_y`.
    pub fn on_thumb_pointer_down(&mut self, pointer_y: f64, now_ms: u64) {
        let thumb_top = self.list.scrollbar_geometry().thumb_position();
        self.scrollbar.begin_drag(pointer_y, thumb_top, now_ms);
        self.list.begin_thumb_drag();
    }

    /// Drags the thumb. Returns `true` if the list scrolled.
    pub fn on_thumb_pointer_move(&mut self, pointer_y: f64, now_ms: u64) -> bool {
        let Some(thumb_top) = self.scrollbar.drag_to(pointer_y) else {
            return false;
        };
        let before = self.list.scroll_top();
        self.list.drag_thumb_to(thumb_top);
        self.after_move(before, now_ms)
    }

    pub fn on_thumb_pointer_up(&mut self, now_ms: u64) {
        if self.scrollbar.end_drag(now_ms) {
            self.list.end_drag();
        }
    }

    /// The host's native scroll container moved on its own (e.g. keyboard scrolling or a
    /// browser adjusting after content shrank).
    ///
    /// The reported position never comes back as a scroll instruction.
    pub fn on_native_scroll(&mut self, position: u64, now_ms: u64) -> bool {
        let before = self.list.scroll_top();
        self.native_top = position;
        self.list.on_external_scroll(position);
        self.after_move(before, now_ms)
    }

    /// Scrolls `target` into view. See [`VirtualList::scroll_to`].
    pub fn scroll_to(
        &mut self,
        target: ScrollTarget<K>,
        align: Align,
        offset: i64,
        now_ms: u64,
    ) -> Option<u64> {
        let before = self.list.scroll_top();
        let applied = self.list.scroll_to(target, align, offset)?;
        if self.list.phase() == ScrollPhase::Animating {
            self.request_frame();
        }
        self.after_move(before, now_ms);
        Some(applied)
    }

    pub fn scroll_to_index(&mut self, index: usize, align: Align, now_ms: u64) -> Option<u64> {
        self.scroll_to(ScrollTarget::Index(index), align, 0, now_ms)
    }

    pub fn scroll_to_key(&mut self, key: K, align: Align, now_ms: u64) -> Option<u64> {
        self.scroll_to(ScrollTarget::Key(key), align, 0, now_ms)
    }

    /// Advances the scrollbar hide timer. Returns `true` if the scrollbar just hid.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.scrollbar.tick(now_ms)
    }

    // ----- output -----

    pub fn scrollbar_state(&self) -> ScrollbarState {
        let geometry = self.list.scrollbar_geometry();
        let eligible = self.list.uses_scrollbar() && geometry.is_scrollable();
        ScrollbarState {
            thumb_size: geometry.thumb_size(),
            thumb_position: geometry.thumb_position(),
            visible: eligible && self.scrollbar.is_visible(),
            dragging: self.scrollbar.is_dragging(),
        }
    }

    /// Position the host's native scroll container should be set to, if it has to move.
    ///
    /// Taking the instruction assumes the host applies it.
    pub fn take_scroll_instruction(&mut self) -> Option<u64> {
        let top = self.instruction.take()?;
        self.native_top = top;
        Some(top)
    }
}
