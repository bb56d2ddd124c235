use virtual_list::SCROLLBAR_HIDE_DELAY_MS;

/// What a host needs to draw the synthetic scrollbar for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollbarState {
    pub thumb_size: u32,
    /// Thumb offset from the top of the track.
    pub thumb_position: f64,
    pub visible: bool,
    pub dragging: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct ThumbDrag {
    pointer_y: f64,
    thumb_top: f64,
}

/// Show/hide timer and drag origin of the synthetic scrollbar.
///
/// The scrollbar shows on every scroll and on drag start, and hides again after
/// `hide_delay_ms` without activity. While a drag is in progress the timer is suspended.
/// Time is injected through `now_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollbarVisibility {
    hide_delay_ms: u64,
    hide_at_ms: Option<u64>,
    drag: Option<ThumbDrag>,
}

impl Default for ScrollbarVisibility {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollbarVisibility {
    pub fn new() -> Self {
        Self {
            hide_delay_ms: SCROLLBAR_HIDE_DELAY_MS,
            hide_at_ms: None,
            drag: None,
        }
    }

    pub fn with_hide_delay_ms(mut self, hide_delay_ms: u64) -> Self {
        self.hide_delay_ms = hide_delay_ms;
        self
    }

    pub fn hide_delay_ms(&self) -> u64 {
        self.hide_delay_ms
    }

    pub fn is_visible(&self) -> bool {
        self.drag.is_some() || self.hide_at_ms.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Shows the scrollbar and restarts the hide timer.
    pub fn show(&mut self, now_ms: u64) {
        self.hide_at_ms = Some(now_ms.saturating_add(self.hide_delay_ms));
    }

    /// Remembers where the pointer grabbed the thumb.
    pub fn begin_drag(&mut self, pointer_y: f64, thumb_top: f64, now_ms: u64) {
        self.drag = Some(ThumbDrag {
            pointer_y,
            thumb_top,
        });
        self.show(now_ms);
    }

    /// Thumb offset the pointer at `pointer_y` drags to, or `None` when no drag is active.
    pub fn drag_to(&self, pointer_y: f64) -> Option<f64> {
        let drag = self.drag?;
        Some(drag.thumb_top + (pointer_y - drag.pointer_y))
    }

    /// Ends a drag and restarts the hide timer. Returns `false` if no drag was active.
    pub fn end_drag(&mut self, now_ms: u64) -> bool {
        if self.drag.take().is_none() {
            return false;
        }
        self.show(now_ms);
        true
    }

    /// Advances the hide timer. Returns `true` if the scrollbar just hid.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.drag.is_some() {
            return false;
        }
        match self.hide_at_ms {
            Some(at) if now_ms >= at => {
                self.hide_at_ms = None;
                true
            }
            _ => false,
        }
    }
}
