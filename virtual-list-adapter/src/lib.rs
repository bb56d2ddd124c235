//! Host-side glue for the `virtual-list` crate.
//!
//! `virtual-list` computes windows, owns the scroll position and caches heights, but never
//! talks to a renderer. This crate provides the small, framework-neutral pieces that sit
//! between the two:
//!
//! - a mount registry of rendered item views, keyed by item key
//! - frame-batched measurement through the [`Measure`] and [`FrameScheduler`] seams
//! - show/hide timing and drag bookkeeping for the synthetic scrollbar
//! - [`ListDriver`], which wires all of the above to a [`virtual_list::VirtualList`]
//!
//! No UI toolkit bindings live here.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod driver;
mod measure;
mod registry;
mod scheduler;
mod scrollbar;


pub use driver::{FrameReport, ListDriver};
pub use measure::Measure;
pub use registry::MountRegistry;
pub use scheduler::{FrameScheduler, ManualScheduler};
pub use scrollbar::{ScrollbarState, ScrollbarVisibility};
