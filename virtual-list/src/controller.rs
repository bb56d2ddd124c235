use crate::scrollbar::ScrollbarGeometry;
use crate::{Align, DeltaOutcome, ItemPlacement, ScrollPhase, ScrollTarget};

/// Measurement passes a `scroll_to` may wait for before giving up on a correction.
pub const DEFAULT_SCROLL_TO_ATTEMPTS: u8 = 3;

/// A `scroll_to` that landed on an estimated height and waits for a measurement pass.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingScroll<K> {
    pub target: ScrollTarget<K>,
    /// Index the target resolved to on the last pass.
    pub index: usize,
    /// Alignment to re-apply. `Auto` is replaced by the side it picked once it moved.
    pub align: Align,
    pub offset: i64,
    pub attempts_left: u8,
}

/// Owner of the authoritative scroll position.
///
/// Every input source funnels through here and every write is clamped to
/// `[0, max_scroll]`. Methods return whether the position changed; the owning list uses that
/// to decide when to recompute the window.
#[derive(Clone, Debug)]
pub struct ScrollController<K> {
    scroll_top: u64,
    max_scroll: u64,
    viewport_height: u32,
    phase: ScrollPhase,
    pending: Option<PendingScroll<K>>,
    queued_delta: i64,
    scroll_to_attempts: u8,
}

impl<K> Default for ScrollController<K> {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_TO_ATTEMPTS)
    }
}

impl<K> ScrollController<K> {
    pub fn new(scroll_to_attempts: u8) -> Self {
        Self {
            scroll_top: 0,
            max_scroll: 0,
            viewport_height: 0,
            phase: ScrollPhase::Idle,
            pending: None,
            queued_delta: 0,
            scroll_to_attempts: scroll_to_attempts.max(1),
        }
    }

    pub fn scroll_top(&self) -> u64 {
        self.scroll_top
    }

    pub fn max_scroll(&self) -> u64 {
        self.max_scroll
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    pub fn pending_scroll(&self) -> Option<&PendingScroll<K>> {
        self.pending.as_ref()
    }

    pub fn is_at_top(&self) -> bool {
        self.scroll_top == 0
    }

    pub fn is_at_bottom(&self) -> bool {
        self.scroll_top >= self.max_scroll
    }

    pub fn clamp(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll)
    }

    pub fn set_scroll_to_attempts(&mut self, attempts: u8) {
        self.scroll_to_attempts = attempts.max(1);
    }

    /// Refreshes `max_scroll` from the latest content height and re-clamps the position.
    ///
    /// Returns `true` if the position had to move.
    pub fn set_bounds(&mut self, total_height: u64, viewport_height: u32) -> bool {
        self.viewport_height = viewport_height;
        self.max_scroll = total_height.saturating_sub(viewport_height as u64);
        self.commit(self.scroll_top)
    }

    fn commit(&mut self, offset: u64) -> bool {
        let next = self.clamp(offset);
        if next == self.scroll_top {
            return false;
        }
        vtrace!(from = self.scroll_top, to = next, "ScrollController::commit");
        self.scroll_top = next;
        true
    }

    /// Sets the position directly (clamped). Does not touch the phase.
    pub fn set_scroll_top(&mut self, offset: u64) -> bool {
        self.commit(offset)
    }

    fn blocked_at_edge(&self, from: u64, delta: i64) -> bool {
        (delta < 0 && from == 0) || (delta > 0 && from >= self.max_scroll)
    }

    fn cancel_pending(&mut self) {
        if self.pending.take().is_some() {
            vdebug!("ScrollController: pending scroll_to cancelled by user input");
        }
        if self.phase == ScrollPhase::Animating {
            self.phase = ScrollPhase::Idle;
        }
    }

    /// Applies a wheel/touch delta right away.
    ///
    /// A delta pointing past an edge the list already sits on is rejected with
    /// [`DeltaOutcome::PassThrough`] so the host can let an outer region scroll instead.
    pub fn apply_delta(&mut self, delta: i64) -> DeltaOutcome {
        if self.blocked_at_edge(self.scroll_top, delta) {
            return DeltaOutcome::PassThrough;
        }
        self.cancel_pending();
        let next = offset_by(self.scroll_top, delta);
        self.commit(next);
        DeltaOutcome::Consumed
    }

    /// Like [`Self::apply_delta`], but accumulates the delta until
    /// [`Self::flush_queued_delta`] so bursts of events within one frame apply once.
    ///
    /// The edge check runs against the position the queue will land on, not the committed one.
    pub fn queue_delta(&mut self, delta: i64) -> DeltaOutcome {
        let effective = self.clamp(offset_by(self.scroll_top, self.queued_delta));
        if self.blocked_at_edge(effective, delta) {
            return DeltaOutcome::PassThrough;
        }
        self.cancel_pending();
        self.queued_delta = self.queued_delta.saturating_add(delta);
        DeltaOutcome::Consumed
    }

    pub fn has_queued_delta(&self) -> bool {
        self.queued_delta != 0
    }

    /// Applies the accumulated delta. Returns `true` if the position changed.
    pub fn flush_queued_delta(&mut self) -> bool {
        let delta = core::mem::take(&mut self.queued_delta);
        if delta == 0 {
            return false;
        }
        self.commit(offset_by(self.scroll_top, delta))
    }

    /// Enters [`ScrollPhase::Dragging`] (thumb or touch drag).
    pub fn begin_drag(&mut self) {
        self.cancel_pending();
        self.phase = ScrollPhase::Dragging;
    }

    pub fn end_drag(&mut self) {
        if self.phase == ScrollPhase::Dragging {
            self.phase = ScrollPhase::Idle;
        }
    }

    /// Maps a thumb offset on the track back into content space and scrolls there.
    pub fn apply_thumb_offset(&mut self, thumb_top: f64, geometry: &ScrollbarGeometry) -> bool {
        self.commit(geometry.scroll_top_for_thumb(thumb_top))
    }

    /// Accepts a position that changed outside the controller (e.g. a native container
    /// adjusting after the data shrank).
    pub fn on_external_scroll(&mut self, position: u64) -> bool {
        if position == self.scroll_top {
            return false;
        }
        self.commit(position)
    }

    pub fn cancel_scroll_to(&mut self) -> bool {
        let had = self.pending.is_some();
        self.pending = None;
        if self.phase == ScrollPhase::Animating {
            self.phase = ScrollPhase::Idle;
        }
        had
    }

    /// Scroll position for `item` under `align`, or `None` when `Align::Auto` finds the item
    /// already fully visible. The second value is the side actually used.
    fn aligned_top(&self, item: &ItemPlacement, align: Align) -> (Option<u64>, Align) {
        let view = self.viewport_height as u64;
        let to_bottom = item.bottom().saturating_sub(view);
        match align {
            Align::Top => (Some(item.top), Align::Top),
            Align::Bottom => (Some(to_bottom), Align::Bottom),
            Align::Auto => {
                let view_end = self.scroll_top.saturating_add(view);
                if item.top < self.scroll_top {
                    (Some(item.top), Align::Top)
                } else if item.bottom() > view_end {
                    (Some(to_bottom), Align::Bottom)
                } else {
                    (None, Align::Auto)
                }
            }
        }
    }

    /// Scrolls so that `item` (the resolved `target`) lands according to `align`, shifted by
    /// `offset` pixels.
    ///
    /// If the item's height is still an estimate the controller enters
    /// [`ScrollPhase::Animating`] and keeps the request so [`Self::settle`] can correct it
    /// after the next measurement pass. Any earlier pending request is dropped.
    ///
    /// Returns the applied position.
    pub fn scroll_to(
        &mut self,
        target: ScrollTarget<K>,
        item: ItemPlacement,
        align: Align,
        offset: i64,
    ) -> u64 {
        let (top, resolved) = self.aligned_top(&item, align);
        if let Some(top) = top {
            self.commit(offset_by(top, offset));
        }
        vdebug!(
            index = item.index,
            measured = item.measured,
            scroll_top = self.scroll_top,
            "ScrollController::scroll_to"
        );

        if item.measured {
            self.pending = None;
            if self.phase == ScrollPhase::Animating {
                self.phase = ScrollPhase::Idle;
            }
        } else {
            self.pending = Some(PendingScroll {
                target,
                index: item.index,
                align: resolved,
                offset,
                attempts_left: self.scroll_to_attempts,
            });
            self.phase = ScrollPhase::Animating;
        }
        self.scroll_top
    }

    /// Re-runs a pending `scroll_to` against fresh measurements.
    ///
    /// Once the target is measured (or the attempt budget runs out) the request is retired and
    /// the controller returns to idle. Returns `true` if the position changed.
    pub fn settle(&mut self, item: ItemPlacement) -> bool {
        let Some(mut pending) = self.pending.take() else {
            return false;
        };
        let (top, resolved) = self.aligned_top(&item, pending.align);
        let changed = match top {
            Some(top) => self.commit(offset_by(top, pending.offset)),
            None => false,
        };
        pending.index = item.index;
        pending.align = resolved;
        pending.attempts_left = pending.attempts_left.saturating_sub(1);

        if item.measured || pending.attempts_left == 0 {
            vdebug!(
                index = item.index,
                measured = item.measured,
                scroll_top = self.scroll_top,
                "ScrollController::settle done"
            );
            if self.phase == ScrollPhase::Animating {
                self.phase = ScrollPhase::Idle;
            }
        } else {
            self.pending = Some(pending);
        }
        changed
    }
}

fn offset_by(base: u64, delta: i64) -> u64 {
    if delta >= 0 {
        base.saturating_add(delta as u64)
    } else {
        base.saturating_sub(delta.unsigned_abs())
    }
}
