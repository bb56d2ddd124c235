use virtual_list::{KeyMap, ListKey};

/// Handles of the item views the renderer currently has mounted, by item key.
///
/// `H` is whatever the host measures through (an element id, a widget pointer, a test
/// fixture). The registry only tracks membership; it never measures.
#[derive(Clone, Debug)]
pub struct MountRegistry<K, H> {
    handles: KeyMap<K, H>,
}

impl<K: ListKey, H> Default for MountRegistry<K, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ListKey, H> MountRegistry<K, H> {
    pub fn new() -> Self {
        Self {
            handles: KeyMap::new(),
        }
    }

    /// Registers `handle` for `key`, returning the handle it replaced.
    pub fn register(&mut self, key: K, handle: H) -> Option<H> {
        self.handles.insert(key, handle)
    }

    pub fn unregister(&mut self, key: &K) -> Option<H> {
        self.handles.remove(key)
    }

    pub fn get(&self, key: &K) -> Option<&H> {
        self.handles.get(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.handles.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &H)> + '_ {
        self.handles.iter()
    }

    pub fn clear(&mut self) {
        self.handles.clear();
    }
}
