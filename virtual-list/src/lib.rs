//! A headless windowing engine for long, variable-height lists.
//!
//! For host-side glue (mount registry, frame-batched measurement, scrollbar visibility), see
//! the `virtual-list-adapter` crate.
//!
//! The crate computes which slice of a list must be rendered for a given scroll position,
//! keeps measured item heights in a versioned cache, owns and clamps the scroll position for
//! every input source, and provides the geometry of a synthetic scrollbar.
//!
//! It is UI-agnostic. A host is expected to provide:
//! - the items and a way to key them
//! - viewport height and an estimated item height
//! - measured heights of rendered items
//! - input deltas (wheel, touch, scrollbar drag)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod height_cache;
mod key;
mod list;
mod options;
pub mod scrollbar;
mod state;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use controller::{DEFAULT_SCROLL_TO_ATTEMPTS, PendingScroll, ScrollController};
pub use height_cache::HeightCache;
pub use key::{KeyMap, Keyed, ListKey};
pub use list::{VirtualList, VisibleItem};
pub use options::{KeyExtractor, ListOptions, VisibleChangeCallback};
pub use scrollbar::{MIN_THUMB_SIZE, SCROLLBAR_HIDE_DELAY_MS, ScrollbarGeometry};
pub use state::{FrameState, ScrollState, ViewportState};
pub use types::{
    Align, ContainerLayout, DeltaOutcome, ItemPlacement, ScrollPhase, ScrollTarget, SizingMode,
    WindowRange,
};
pub use window::{WindowCalculator, WindowConfig, WindowInputs, compute_window, place_item};
