use alloc::vec::Vec;

use crate::key::{KeyMap, ListKey};

/// Measured item heights keyed by item identity.
///
/// The cache never decides whether an item exists; a missing entry only means the item has
/// not been measured yet and callers fall back to the estimate.
///
/// Writes do not change [`HeightCache::version`] directly. They mark the cache dirty, and
/// [`HeightCache::commit`] turns any number of net changes into a single version bump. This
/// lets a measurement batch touch many entries while downstream consumers see one change.
#[derive(Clone, Debug)]
pub struct HeightCache<K> {
    heights: KeyMap<K, u32>,
    version: u64,
    dirty: bool,
}

impl<K: ListKey> Default for HeightCache<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ListKey> HeightCache<K> {
    pub fn new() -> Self {
        Self {
            heights: KeyMap::new(),
            version: 0,
            dirty: false,
        }
    }

    pub fn get(&self, key: &K) -> Option<u32> {
        self.heights.get(key).copied()
    }

    /// Measured height, or `estimate` on a miss.
    pub fn height_or(&self, key: &K, estimate: u32) -> u32 {
        self.get(key).unwrap_or(estimate)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.heights.contains_key(key)
    }

    /// Stores a measurement. Returns `true` if the stored value changed.
    pub fn set(&mut self, key: K, height: u32) -> bool {
        if self.heights.get(&key) == Some(&height) {
            return false;
        }
        self.heights.insert(key, height);
        self.dirty = true;
        true
    }

    /// Drops a measurement. Returns `true` if an entry existed.
    pub fn remove(&mut self, key: &K) -> bool {
        if self.heights.remove(key).is_none() {
            return false;
        }
        self.dirty = true;
        true
    }

    pub fn clear(&mut self) {
        if self.heights.is_empty() {
            return;
        }
        self.heights.clear();
        self.dirty = true;
    }

    /// Whether there are uncommitted changes.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Publishes pending changes as one version bump.
    ///
    /// Returns `true` if the version advanced.
    pub fn commit(&mut self) -> bool {
        if !self.dirty {
            return false;
        }
        self.dirty = false;
        self.version = self.version.wrapping_add(1);
        vtrace!(version = self.version, entries = self.heights.len(), "HeightCache::commit");
        true
    }

    /// Change marker; advances once per committed batch.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, u32)> + '_ {
        self.heights.iter().map(|(k, v)| (k, *v))
    }

    pub fn for_each(&self, mut f: impl FnMut(&K, u32)) {
        for (k, v) in self.iter() {
            f(k, v);
        }
    }

    /// Copies the entries out, e.g. for persistence.
    pub fn export(&self) -> Vec<(K, u32)> {
        let mut out = Vec::with_capacity(self.heights.len());
        self.for_each(|k, v| out.push((k.clone(), v)));
        out
    }

    /// Replaces the entries. The change is published by the next [`HeightCache::commit`].
    pub fn import(&mut self, entries: impl IntoIterator<Item = (K, u32)>) {
        self.heights.clear();
        for (k, v) in entries {
            self.heights.insert(k, v);
        }
        vdebug!(entries = self.heights.len(), "HeightCache::import");
        self.dirty = true;
    }
}
