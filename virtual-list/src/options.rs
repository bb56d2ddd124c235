use alloc::sync::Arc;

use crate::controller::DEFAULT_SCROLL_TO_ATTEMPTS;
use crate::key::Keyed;
use crate::window::WindowConfig;
use crate::SizingMode;

/// Extracts the stable key of an item.
pub type KeyExtractor<T, K> = Arc<dyn Fn(&T) -> K + Send + Sync>;

/// Fired when the rendered window changes, with `(visible_slice, full_list)`.
pub type VisibleChangeCallback<T> = Arc<dyn Fn(&[T], &[T]) + Send + Sync>;

/// Configuration for [`crate::VirtualList`].
///
/// Closures are stored in `Arc`s so the options stay cheap to clone; hosts typically clone
/// the current options, tweak a few fields and hand them back through
/// `VirtualList::set_options`.
pub struct ListOptions<T, K> {
    /// Height of the scrolling viewport. `0` disables windowing.
    pub viewport_height: u32,
    /// Estimated height of an item that has not been measured yet. `0` disables windowing.
    pub item_height: u32,
    /// Set to `false` to always render the full list.
    pub virtual_enabled: bool,
    pub sizing: SizingMode,
    /// Items rendered past the last one intersecting the viewport.
    pub trailing_buffer: usize,
    /// Measurement passes a `scroll_to` waits for before giving up on a correction.
    pub scroll_to_attempts: u8,
    /// Drop an item's cached height when the renderer unmounts it.
    pub evict_unmounted_heights: bool,
    pub get_key: KeyExtractor<T, K>,
    pub on_visible_change: Option<VisibleChangeCallback<T>>,
}

impl<T, K> Clone for ListOptions<T, K> {
    fn clone(&self) -> Self {
        Self {
            viewport_height: self.viewport_height,
            item_height: self.item_height,
            virtual_enabled: self.virtual_enabled,
            sizing: self.sizing,
            trailing_buffer: self.trailing_buffer,
            scroll_to_attempts: self.scroll_to_attempts,
            evict_unmounted_heights: self.evict_unmounted_heights,
            get_key: Arc::clone(&self.get_key),
            on_visible_change: self.on_visible_change.clone(),
        }
    }
}

impl<T, K> ListOptions<T, K> {
    /// Creates options for a list keyed by `get_key`.
    ///
    /// `item_height` is the estimate used until an item has been measured.
    pub fn new(
        viewport_height: u32,
        item_height: u32,
        get_key: impl Fn(&T) -> K + Send + Sync + 'static,
    ) -> Self {
        Self {
            viewport_height,
            item_height,
            virtual_enabled: true,
            sizing: SizingMode::FullHeight,
            trailing_buffer: 1,
            scroll_to_attempts: DEFAULT_SCROLL_TO_ATTEMPTS,
            evict_unmounted_heights: true,
            get_key: Arc::new(get_key),
            on_visible_change: None,
        }
    }

    pub fn with_get_key(mut self, get_key: impl Fn(&T) -> K + Send + Sync + 'static) -> Self {
        self.get_key = Arc::new(get_key);
        self
    }

    pub fn with_virtual(mut self, enabled: bool) -> Self {
        self.virtual_enabled = enabled;
        self
    }

    pub fn with_sizing(mut self, sizing: SizingMode) -> Self {
        self.sizing = sizing;
        self
    }

    pub fn with_trailing_buffer(mut self, trailing_buffer: usize) -> Self {
        self.trailing_buffer = trailing_buffer;
        self
    }

    pub fn with_scroll_to_attempts(mut self, attempts: u8) -> Self {
        self.scroll_to_attempts = attempts;
        self
    }

    pub fn with_evict_unmounted_heights(mut self, evict: bool) -> Self {
        self.evict_unmounted_heights = evict;
        self
    }

    pub fn with_on_visible_change(
        mut self,
        on_visible_change: Option<impl Fn(&[T], &[T]) + Send + Sync + 'static>,
    ) -> Self {
        self.on_visible_change = on_visible_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn window_config(&self) -> WindowConfig {
        WindowConfig {
            viewport_height: self.viewport_height,
            item_height: self.item_height,
            virtual_enabled: self.virtual_enabled,
            trailing_buffer: self.trailing_buffer,
        }
    }
}

impl<T: Keyed + 'static> ListOptions<T, T::Key> {
    /// Creates options for items that carry their own key.
    pub fn keyed(viewport_height: u32, item_height: u32) -> Self {
        Self::new(viewport_height, item_height, T::key)
    }
}

impl<T, K> core::fmt::Debug for ListOptions<T, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListOptions")
            .field("viewport_height", &self.viewport_height)
            .field("item_height", &self.item_height)
            .field("virtual_enabled", &self.virtual_enabled)
            .field("sizing", &self.sizing)
            .field("trailing_buffer", &self.trailing_buffer)
            .field("scroll_to_attempts", &self.scroll_to_attempts)
            .field("evict_unmounted_heights", &self.evict_unmounted_heights)
            .field("on_visible_change", &self.on_visible_change.is_some())
            .finish_non_exhaustive()
    }
}
