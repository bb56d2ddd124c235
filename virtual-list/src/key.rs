#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

/// Key → value map used for everything indexed by item key (heights, mounted handles).
#[cfg(feature = "std")]
pub type KeyMap<K, V> = HashMap<K, V>;
#[cfg(not(feature = "std"))]
pub type KeyMap<K, V> = BTreeMap<K, V>;

/// Bound required of item keys.
///
/// With `std` keys are hashed; without it they are ordered.
#[cfg(feature = "std")]
pub trait ListKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq + Clone> ListKey for K {}

#[cfg(not(feature = "std"))]
pub trait ListKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<K: Ord + Clone> ListKey for K {}

/// Items that carry their own stable key.
///
/// This is the typed counterpart of "key the list by this field":
///
/// ```
/// use virtual_list::Keyed;
///
/// struct Row {
///     id: u32,
///     text: String,
/// }
///
/// impl Keyed for Row {
///     type Key = u32;
///     fn key(&self) -> u32 {
///         self.id
///     }
/// }
/// ```
pub trait Keyed {
    type Key;

    fn key(&self) -> Self::Key;
}
