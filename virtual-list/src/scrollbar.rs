//! Geometry of the synthetic scrollbar.
//!
//! Everything here is a pure function of the viewport height, content height, scroll
//! position and item count. Visibility timers and drag bookkeeping live with the host adapter.

/// Smallest thumb the scrollbar will draw.
pub const MIN_THUMB_SIZE: u32 = 20;

/// Idle time after which a visible scrollbar hides again.
pub const SCROLLBAR_HIDE_DELAY_MS: u64 = 2000;

/// Inputs of the scrollbar geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollbarGeometry {
    pub viewport_height: u32,
    pub total_height: u64,
    pub scroll_top: u64,
    pub count: usize,
}

impl ScrollbarGeometry {
    pub fn new(viewport_height: u32, total_height: u64, scroll_top: u64, count: usize) -> Self {
        Self {
            viewport_height,
            total_height,
            scroll_top,
            count,
        }
    }

    /// The content overflows the viewport, so a scrollbar makes sense.
    pub fn is_scrollable(&self) -> bool {
        self.total_height > self.viewport_height as u64
    }

    /// `floor(clamp(viewport / count * 10, MIN_THUMB_SIZE, viewport / 2))`; 0 for an empty list.
    ///
    /// The upper bound wins over the lower one when the viewport is shorter than
    /// `2 * MIN_THUMB_SIZE`.
    pub fn thumb_size(&self) -> u32 {
        if self.count == 0 {
            return 0;
        }
        let view = self.viewport_height as u64;
        let base = view.saturating_mul(10) / self.count as u64;
        let size = base.max(MIN_THUMB_SIZE as u64).min(view / 2);
        size as u32
    }

    /// Scrollable distance in content space.
    pub fn content_range(&self) -> u64 {
        self.total_height
            .saturating_sub(self.viewport_height as u64)
    }

    /// Distance the thumb can travel along the track.
    pub fn track_range(&self) -> u32 {
        self.viewport_height.saturating_sub(self.thumb_size())
    }

    /// Thumb offset from the top of the track.
    pub fn thumb_position(&self) -> f64 {
        let content = self.content_range();
        if self.scroll_top == 0 || content == 0 {
            return 0.0;
        }
        let ratio = (self.scroll_top as f64 / content as f64).min(1.0);
        ratio * self.track_range() as f64
    }

    /// Inverse of [`Self::thumb_position`]: the scroll position for a thumb placed at
    /// `thumb_top`.
    ///
    /// Rounds up, so dragging the thumb to the end of the track reaches the true maximum.
    /// The result is not clamped; callers clamp against their own bounds.
    pub fn scroll_top_for_thumb(&self, thumb_top: f64) -> u64 {
        let track = self.track_range();
        let ratio = if track > 0 {
            thumb_top / track as f64
        } else {
            0.0
        };
        ceil_non_negative(ratio * self.content_range() as f64)
    }
}

fn ceil_non_negative(v: f64) -> u64 {
    if v.is_nan() || v <= 0.0 {
        return 0;
    }
    let t = v as u64;
    if (t as f64) < v { t.saturating_add(1) } else { t }
}
